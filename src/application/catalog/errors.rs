use thiserror::Error;

/// 目録管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 書籍が存在しない
    #[error("Book not found")]
    BookNotFound,

    /// 会員が存在しない
    #[error("Member not found")]
    MemberNotFound,

    /// 未返却の貸出または予約が書籍を参照している
    #[error("Book has open borrows or reservations")]
    BookInUse,

    /// 未返却の貸出または予約が会員を参照している
    #[error("Member has open borrows or reservations")]
    MemberInUse,

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// BorrowStoreのエラー
    #[error("Borrow store error")]
    BorrowStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ReservationStoreのエラー
    #[error("Reservation store error")]
    ReservationStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
