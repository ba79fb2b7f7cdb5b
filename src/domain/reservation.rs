use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::book::Book;
use super::{BookId, MemberId, ReserveBookError, ReservationId};

/// 予約ステータス
///
/// 現状はpendingのみ。取り消しはレコードの削除で表現され、
/// これ以上の状態遷移は定義されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// 受付済み・未処理
    Pending,
}

impl ReservationStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
        }
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            _ => Err(format!("Invalid reservation status: {}", s)),
        }
    }
}

/// Reservation集約 - 貸出中の書籍に対する順番待ちの申し込み
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,

    // 他の集約への参照（IDのみ）
    pub member_id: MemberId,
    pub book_id: BookId,

    pub reservation_date: NaiveDate,
    pub status: ReservationStatus,
}

/// 純粋関数：書籍を予約する
///
/// ビジネスルール：
/// - 貸出中（unavailable）の書籍のみ予約できる
/// - ステータスはpendingで始まる
///
/// 副作用なし。新しいReservationを返す。
pub fn reserve_book(
    book: &Book,
    member_id: MemberId,
    reservation_date: NaiveDate,
) -> Result<Reservation, ReserveBookError> {
    if book.available {
        return Err(ReserveBookError::BookStillAvailable);
    }

    Ok(Reservation {
        id: ReservationId::new(),
        member_id,
        book_id: book.id,
        reservation_date,
        status: ReservationStatus::Pending,
    })
}

/// 書籍の予約待ち行列
///
/// グローバルな予約コレクションの挿入順を保った部分列。
/// 日付での並べ替えは行わない。
pub fn queue_for_book(book_id: BookId, reservations: &[Reservation]) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|reservation| reservation.book_id == book_id)
        .collect()
}

/// 会員の予約IDの一覧
///
/// Member側に重複リストを持たず、正となるReservationコレクションへの
/// 索引として導出する。
pub fn reservation_ids_for_member(
    member_id: MemberId,
    reservations: &[Reservation],
) -> Vec<ReservationId> {
    reservations
        .iter()
        .filter(|reservation| reservation.member_id == member_id)
        .map(|reservation| reservation.id)
        .collect()
}
