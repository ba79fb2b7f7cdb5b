use thiserror::Error;

use crate::domain::ReserveBookError;

/// 予約管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum ReservationError {
    /// 会員が存在しない
    #[error("Member not found")]
    MemberNotFound,

    /// 書籍が存在しない
    #[error("Book not found")]
    BookNotFound,

    /// 貸出可能な書籍は予約できない
    #[error("Book is still available, borrow it instead of reserving")]
    BookStillAvailable,

    /// 予約が見つからない
    #[error("Reservation not found")]
    ReservationNotFound,

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ReservationStoreのエラー
    #[error("Reservation store error")]
    ReservationStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ReserveBookError> for ReservationError {
    fn from(err: ReserveBookError) -> Self {
        match err {
            ReserveBookError::BookStillAvailable => ReservationError::BookStillAvailable,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ReservationError>;
