use crate::application::ServiceDependencies;
use crate::domain::book::Book;
use crate::domain::member::Member;
use crate::domain::{self, commands::*, value_objects::*};
use crate::ports::*;

use super::errors::{CatalogError, Result};

// ============================================================================
// 書籍
// ============================================================================

/// 書籍を登録する（純粋な関数）
///
/// 新しいIDを払い出し、貸出可能な状態で蔵書の末尾に追加して
/// 永続化する。
///
/// # 戻り値
/// 成功時は登録された書籍のID
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<BookId> {
    let mut books = deps
        .book_store
        .load()
        .await
        .map_err(CatalogError::BookStoreError)?;

    let book = domain::book::create_book(cmd.title, cmd.author, cmd.isbn);
    let book_id = book.id;
    books.push(book);

    deps.book_store
        .save(&books)
        .await
        .map_err(CatalogError::BookStoreError)?;

    Ok(book_id)
}

/// 書籍情報を更新する（純粋な関数）
///
/// コマンドで指定されたフィールドのみ適用して永続化する。
///
/// # エラー
/// - BookNotFound: IDが解決できない
pub async fn update_book(deps: &ServiceDependencies, cmd: UpdateBook) -> Result<()> {
    let mut books = deps
        .book_store
        .load()
        .await
        .map_err(CatalogError::BookStoreError)?;

    let index = books
        .iter()
        .position(|book| book.id == cmd.book_id)
        .ok_or(CatalogError::BookNotFound)?;

    books[index] = domain::book::apply_book_update(&books[index], &cmd);

    deps.book_store
        .save(&books)
        .await
        .map_err(CatalogError::BookStoreError)?;

    Ok(())
}

/// 書籍を削除する（純粋な関数）
///
/// ビジネスルール：
/// - 未返却の貸出または予約が参照している間は削除を拒否する
///   （宙に浮いた参照を作らない）
///
/// 検証はすべて変更前に行い、拒否された操作はコレクションを
/// 一切変更しない。
pub async fn remove_book(deps: &ServiceDependencies, book_id: BookId) -> Result<()> {
    let mut books = deps
        .book_store
        .load()
        .await
        .map_err(CatalogError::BookStoreError)?;

    let index = books
        .iter()
        .position(|book| book.id == book_id)
        .ok_or(CatalogError::BookNotFound)?;

    let borrows = deps
        .borrow_store
        .load()
        .await
        .map_err(CatalogError::BorrowStoreError)?;
    if domain::borrow::open_borrow_for_book(book_id, &borrows).is_some() {
        return Err(CatalogError::BookInUse);
    }

    let reservations = deps
        .reservation_store
        .load()
        .await
        .map_err(CatalogError::ReservationStoreError)?;
    if !domain::reservation::queue_for_book(book_id, &reservations).is_empty() {
        return Err(CatalogError::BookInUse);
    }

    books.remove(index);

    deps.book_store
        .save(&books)
        .await
        .map_err(CatalogError::BookStoreError)?;

    Ok(())
}

/// タイトルで書籍を検索する
///
/// 大文字小文字を区別しない部分一致。蔵書の並び順を保ち、
/// コレクションは変更しない。
pub async fn search_books(deps: &ServiceDependencies, query: &str) -> Result<Vec<Book>> {
    let books = deps
        .book_store
        .load()
        .await
        .map_err(CatalogError::BookStoreError)?;

    Ok(domain::book::search_by_title(&books, query)
        .into_iter()
        .cloned()
        .collect())
}

// ============================================================================
// 会員
// ============================================================================

/// 会員を登録する（純粋な関数）
///
/// # 戻り値
/// 成功時は登録された会員のID
pub async fn register_member(deps: &ServiceDependencies, cmd: RegisterMember) -> Result<MemberId> {
    let mut members = deps
        .member_store
        .load()
        .await
        .map_err(CatalogError::MemberStoreError)?;

    let member = domain::member::register_member(cmd.name, cmd.contact);
    let member_id = member.id;
    members.push(member);

    deps.member_store
        .save(&members)
        .await
        .map_err(CatalogError::MemberStoreError)?;

    Ok(member_id)
}

/// 会員情報を更新する（純粋な関数）
///
/// # エラー
/// - MemberNotFound: IDが解決できない
pub async fn update_member(deps: &ServiceDependencies, cmd: UpdateMember) -> Result<()> {
    let mut members = deps
        .member_store
        .load()
        .await
        .map_err(CatalogError::MemberStoreError)?;

    let index = members
        .iter()
        .position(|member| member.id == cmd.member_id)
        .ok_or(CatalogError::MemberNotFound)?;

    members[index] = domain::member::apply_member_update(&members[index], &cmd);

    deps.member_store
        .save(&members)
        .await
        .map_err(CatalogError::MemberStoreError)?;

    Ok(())
}

/// 会員を削除する（純粋な関数）
///
/// ビジネスルール：
/// - 未返却の貸出または予約が参照している間は削除を拒否する
///
/// 削除経路はこの1つだけであり、宙に浮いた参照は生じない。
pub async fn remove_member(deps: &ServiceDependencies, member_id: MemberId) -> Result<()> {
    let mut members = deps
        .member_store
        .load()
        .await
        .map_err(CatalogError::MemberStoreError)?;

    let index = members
        .iter()
        .position(|member| member.id == member_id)
        .ok_or(CatalogError::MemberNotFound)?;

    let borrows = deps
        .borrow_store
        .load()
        .await
        .map_err(CatalogError::BorrowStoreError)?;
    if !domain::borrow::borrowed_book_ids(member_id, &borrows).is_empty() {
        return Err(CatalogError::MemberInUse);
    }

    let reservations = deps
        .reservation_store
        .load()
        .await
        .map_err(CatalogError::ReservationStoreError)?;
    if !domain::reservation::reservation_ids_for_member(member_id, &reservations).is_empty() {
        return Err(CatalogError::MemberInUse);
    }

    members.remove(index);

    deps.member_store
        .save(&members)
        .await
        .map_err(CatalogError::MemberStoreError)?;

    Ok(())
}

/// 名前で会員を検索する
///
/// 大文字小文字を区別しない部分一致。
pub async fn search_members(deps: &ServiceDependencies, query: &str) -> Result<Vec<Member>> {
    let members = deps
        .member_store
        .load()
        .await
        .map_err(CatalogError::MemberStoreError)?;

    Ok(domain::member::search_by_name(&members, query)
        .into_iter()
        .cloned()
        .collect())
}
