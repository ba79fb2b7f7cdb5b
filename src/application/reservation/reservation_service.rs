use chrono::NaiveDate;

use crate::application::ServiceDependencies;
use crate::domain::{self, commands::*, value_objects::*};
use crate::ports::*;

use super::errors::{ReservationError, Result};

/// 予約待ち行列の1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub member_id: MemberId,
    pub member_name: String,
    pub reserved_on: NaiveDate,
}

/// 1冊分の予約待ち行列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationQueue {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub entries: Vec<QueueEntry>,
}

/// 蔵書概況レポート
///
/// 待ち行列はグローバルな予約コレクションの挿入順（＝予約作成順）
/// で並ぶ。日付では並べ替えない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySummary {
    pub total_books: usize,
    pub available_books: usize,
    pub unavailable_books: usize,
    pub queues: Vec<ReservationQueue>,
}

/// 書籍を予約する（純粋な関数）
///
/// ビジネスルール：
/// - 会員が存在すること
/// - 書籍が存在し、貸出中であること（貸出可能な書籍の予約は拒否）
///
/// 検証はすべて変更前に行い、拒否された操作はコレクションを
/// 一切変更しない。成功時は予約をグローバルコレクションの末尾に
/// 追加して永続化する。
///
/// # 戻り値
/// 成功時は作成された予約のID
pub async fn reserve_book(deps: &ServiceDependencies, cmd: ReserveBook) -> Result<ReservationId> {
    // 1. 会員の存在確認
    let members = deps
        .member_store
        .load()
        .await
        .map_err(ReservationError::MemberStoreError)?;

    if !members.iter().any(|member| member.id == cmd.member_id) {
        return Err(ReservationError::MemberNotFound);
    }

    // 2. 書籍の解決
    let books = deps
        .book_store
        .load()
        .await
        .map_err(ReservationError::BookStoreError)?;

    let book = books
        .iter()
        .find(|book| book.id == cmd.book_id)
        .ok_or(ReservationError::BookNotFound)?;

    // 3. ドメイン層の純粋関数を呼び出し（貸出中であることの検証を含む）
    let reservation =
        domain::reservation::reserve_book(book, cmd.member_id, cmd.reservation_date)?;
    let reservation_id = reservation.id;

    // 4. グローバルコレクションの末尾に追加して永続化
    let mut reservations = deps
        .reservation_store
        .load()
        .await
        .map_err(ReservationError::ReservationStoreError)?;
    reservations.push(reservation);

    deps.reservation_store
        .save(&reservations)
        .await
        .map_err(ReservationError::ReservationStoreError)?;

    Ok(reservation_id)
}

/// 予約を取り消す（純粋な関数）
///
/// 取り消しはレコードの削除で表現される。
///
/// # エラー
/// - ReservationNotFound: IDが解決できない
pub async fn cancel_reservation(
    deps: &ServiceDependencies,
    cmd: CancelReservation,
) -> Result<()> {
    let mut reservations = deps
        .reservation_store
        .load()
        .await
        .map_err(ReservationError::ReservationStoreError)?;

    let index = reservations
        .iter()
        .position(|reservation| reservation.id == cmd.reservation_id)
        .ok_or(ReservationError::ReservationNotFound)?;

    reservations.remove(index);

    deps.reservation_store
        .save(&reservations)
        .await
        .map_err(ReservationError::ReservationStoreError)?;

    Ok(())
}

/// 蔵書と予約待ち行列の概況を取得する
///
/// 予約をグローバルコレクションの挿入順に走査し、書籍は最初に
/// 予約が現れた順でまとめる。解決できない参照のエントリは読み
/// 飛ばす（削除拒否ポリシーの下では生じない）。
pub async fn book_summary(deps: &ServiceDependencies) -> Result<LibrarySummary> {
    let books = deps
        .book_store
        .load()
        .await
        .map_err(ReservationError::BookStoreError)?;
    let members = deps
        .member_store
        .load()
        .await
        .map_err(ReservationError::MemberStoreError)?;
    let reservations = deps
        .reservation_store
        .load()
        .await
        .map_err(ReservationError::ReservationStoreError)?;

    let total_books = books.len();
    let available_books = books.iter().filter(|book| book.available).count();
    let unavailable_books = total_books - available_books;

    let mut queues: Vec<ReservationQueue> = Vec::new();
    for reservation in &reservations {
        let member = match members.iter().find(|m| m.id == reservation.member_id) {
            Some(member) => member,
            None => continue,
        };

        let entry = QueueEntry {
            member_id: member.id,
            member_name: member.name.clone(),
            reserved_on: reservation.reservation_date,
        };

        match queues
            .iter()
            .position(|queue| queue.book_id == reservation.book_id)
        {
            Some(index) => queues[index].entries.push(entry),
            None => {
                let book = match books.iter().find(|b| b.id == reservation.book_id) {
                    Some(book) => book,
                    None => continue,
                };
                queues.push(ReservationQueue {
                    book_id: book.id,
                    title: book.title.clone(),
                    author: book.author.clone(),
                    entries: vec![entry],
                });
            }
        }
    }

    Ok(LibrarySummary {
        total_books,
        available_books,
        unavailable_books,
        queues,
    })
}
