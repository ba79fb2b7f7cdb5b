use thiserror::Error;

use crate::domain::BorrowBookError;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LendingError {
    /// 会員が存在しない
    #[error("Member not found")]
    MemberNotFound,

    /// 書籍が存在しない
    #[error("Book not found")]
    BookNotFound,

    /// 書籍が貸出中
    #[error("Book is not available for borrowing")]
    BookNotAvailable,

    /// 貸出記録が見つからない
    #[error("Borrow not found")]
    BorrowNotFound,

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// BorrowStoreのエラー
    #[error("Borrow store error")]
    BorrowStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<BorrowBookError> for LendingError {
    fn from(err: BorrowBookError) -> Self {
        match err {
            BorrowBookError::BookNotAvailable => LendingError::BookNotAvailable,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
