use crate::application::ServiceDependencies;
use crate::domain::{self, commands::*, value_objects::*};
use crate::ports::*;

use super::errors::{LendingError, Result};

/// 書籍を貸し出す（純粋な関数）
///
/// ビジネスルール：
/// - 会員が存在すること
/// - 書籍が存在し、貸出可能であること
/// - 1会員あたりの同時貸出冊数に上限は設けない
///
/// 検証はすべて変更前に行い、拒否された操作はコレクションを
/// 一切変更しない。成功時はBookとBorrowの両コレクションを
/// 永続化する。
///
/// # 戻り値
/// 成功時は作成された貸出のID
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> Result<BorrowId> {
    // 1. 会員の存在確認
    let members = deps
        .member_store
        .load()
        .await
        .map_err(LendingError::MemberStoreError)?;

    if !members.iter().any(|member| member.id == cmd.member_id) {
        return Err(LendingError::MemberNotFound);
    }

    // 2. 書籍の解決
    let mut books = deps
        .book_store
        .load()
        .await
        .map_err(LendingError::BookStoreError)?;

    let index = books
        .iter()
        .position(|book| book.id == cmd.book_id)
        .ok_or(LendingError::BookNotFound)?;

    // 3. ドメイン層の純粋関数を呼び出し（貸出可能性の検証を含む）
    let (borrow, updated_book) =
        domain::borrow::check_out(&books[index], cmd.member_id, cmd.borrow_date)?;
    let borrow_id = borrow.id;

    // 4. 両コレクションを更新して永続化
    books[index] = updated_book;

    let mut borrows = deps
        .borrow_store
        .load()
        .await
        .map_err(LendingError::BorrowStoreError)?;
    borrows.push(borrow);

    deps.book_store
        .save(&books)
        .await
        .map_err(LendingError::BookStoreError)?;
    deps.borrow_store
        .save(&borrows)
        .await
        .map_err(LendingError::BorrowStoreError)?;

    Ok(borrow_id)
}

/// 書籍を返却する（純粋な関数）
///
/// ビジネスルール：
/// - 貸出記録が存在すること
/// - 返却期限は記録としての情報であり、延滞していても返却は
///   受け付ける（延滞料金なし）
///
/// Borrowレコードを削除し、書籍を貸出可能へ戻して両コレクションを
/// 永続化する。返却後、予約待ち行列の先頭会員がいれば通知する。
/// 通知の失敗は返却を失敗させない。
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<()> {
    // 1. 貸出記録の解決
    let mut borrows = deps
        .borrow_store
        .load()
        .await
        .map_err(LendingError::BorrowStoreError)?;

    let index = borrows
        .iter()
        .position(|borrow| borrow.id == cmd.borrow_id)
        .ok_or(LendingError::BorrowNotFound)?;

    // 2. 書籍を貸出可能へ戻す
    let mut books = deps
        .book_store
        .load()
        .await
        .map_err(LendingError::BookStoreError)?;

    let book_index = books
        .iter()
        .position(|book| book.id == borrows[index].book_id)
        .ok_or(LendingError::BookNotFound)?;

    let borrow = borrows.remove(index);
    books[book_index] = domain::borrow::check_in(&books[book_index]);
    let book_title = books[book_index].title.clone();

    // 3. 永続化
    deps.book_store
        .save(&books)
        .await
        .map_err(LendingError::BookStoreError)?;
    deps.borrow_store
        .save(&borrows)
        .await
        .map_err(LendingError::BorrowStoreError)?;

    // 4. 予約待ち行列の先頭会員へ通知
    notify_queue_head(deps, borrow.book_id, &book_title).await;

    Ok(())
}

/// 返却された書籍の予約待ち行列の先頭会員へ通知する
///
/// 予約から貸出への自動変換は行わない。ここでの失敗は返却処理を
/// 巻き戻さないため、警告ログに留める。
async fn notify_queue_head(deps: &ServiceDependencies, book_id: BookId, book_title: &str) {
    let reservations = match deps.reservation_store.load().await {
        Ok(reservations) => reservations,
        Err(err) => {
            tracing::warn!("could not load reservations for notification: {}", err);
            return;
        }
    };

    let queue = domain::reservation::queue_for_book(book_id, &reservations);
    if let Some(head) = queue.first() {
        if let Err(err) = deps
            .notification_service
            .notify_book_available(head.member_id, book_title, head.reservation_date)
            .await
        {
            tracing::warn!(
                "could not notify member {}: {}",
                head.member_id.value(),
                err
            );
        }
    }
}
