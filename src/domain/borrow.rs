use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::book::Book;
use super::{BookId, BorrowBookError, BorrowId, MemberId};

/// 貸出期間（日数）
pub const BORROW_PERIOD_DAYS: i64 = 30;

/// Borrow集約 - 1冊の書籍の未返却の貸出
///
/// このレコードの存在そのものが`available = false`の唯一の根拠。
/// 返却時にはレコードごと削除される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrow {
    pub id: BorrowId,

    // 他の集約への参照（IDのみ）
    pub member_id: MemberId,
    pub book_id: BookId,

    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出可能（available）な書籍のみ貸出できる
/// - 返却期限は貸出日 + 30日
///
/// 副作用なし。新しいBorrowと貸出中になったBookを返す。
pub fn check_out(
    book: &Book,
    member_id: MemberId,
    borrow_date: NaiveDate,
) -> Result<(Borrow, Book), BorrowBookError> {
    if !book.available {
        return Err(BorrowBookError::BookNotAvailable);
    }

    let borrow = Borrow {
        id: BorrowId::new(),
        member_id,
        book_id: book.id,
        borrow_date,
        due_date: borrow_date + Duration::days(BORROW_PERIOD_DAYS),
    };

    let book = Book {
        available: false,
        ..book.clone()
    };

    Ok((borrow, book))
}

/// 純粋関数：書籍を返却する
///
/// 対応するBorrowレコードの削除は呼び出し側の責務。
/// 返却期限は記録としての情報であり、延滞していても返却は受け付ける。
pub fn check_in(book: &Book) -> Book {
    Book {
        available: true,
        ..book.clone()
    }
}

/// 書籍の未返却Borrowを探す
pub fn open_borrow_for_book(book_id: BookId, borrows: &[Borrow]) -> Option<&Borrow> {
    borrows.iter().find(|borrow| borrow.book_id == book_id)
}

/// 会員が借用中の書籍IDの一覧
///
/// Member側に重複リストを持たず、正となるBorrowコレクションへの
/// 索引として導出する。
pub fn borrowed_book_ids(member_id: MemberId, borrows: &[Borrow]) -> Vec<BookId> {
    borrows
        .iter()
        .filter(|borrow| borrow.member_id == member_id)
        .map(|borrow| borrow.book_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::create_book;

    fn available_book() -> Book {
        create_book(
            "Dune".to_string(),
            "Herbert".to_string(),
            "111".to_string(),
        )
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // check_out() のテスト
    #[test]
    fn test_check_out_sets_due_date_thirty_days_out() {
        let book = available_book();
        let member_id = MemberId::new();

        let result = check_out(&book, member_id, day("2024-03-01"));
        assert!(result.is_ok());

        let (borrow, updated_book) = result.unwrap();

        assert_eq!(borrow.borrow_date, day("2024-03-01"));
        assert_eq!(borrow.due_date, day("2024-03-31"));
        assert_eq!(borrow.book_id, book.id);
        assert_eq!(borrow.member_id, member_id);
        assert!(!updated_book.available);
    }

    #[test]
    fn test_check_out_fails_when_book_not_available() {
        let book = Book {
            available: false,
            ..available_book()
        };

        let result = check_out(&book, MemberId::new(), day("2024-03-01"));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), BorrowBookError::BookNotAvailable);
    }

    // check_in() のテスト
    #[test]
    fn test_check_in_restores_availability() {
        let book = available_book();
        let (_, borrowed) = check_out(&book, MemberId::new(), day("2024-03-01")).unwrap();

        let returned = check_in(&borrowed);
        assert!(returned.available);
        assert_eq!(returned.id, book.id);
    }

    // 導出索引のテスト
    #[test]
    fn test_borrowed_book_ids_derives_from_borrow_collection() {
        let member_id = MemberId::new();
        let other_member = MemberId::new();
        let book_a = available_book();
        let book_b = create_book("Emma".to_string(), "Austen".to_string(), "222".to_string());

        let (borrow_a, _) = check_out(&book_a, member_id, day("2024-03-01")).unwrap();
        let (borrow_b, _) = check_out(&book_b, other_member, day("2024-03-02")).unwrap();
        let borrows = vec![borrow_a, borrow_b];

        assert_eq!(borrowed_book_ids(member_id, &borrows), vec![book_a.id]);
        assert_eq!(borrowed_book_ids(other_member, &borrows), vec![book_b.id]);
    }

    #[test]
    fn test_open_borrow_for_book() {
        let book = available_book();
        let (borrow, _) = check_out(&book, MemberId::new(), day("2024-03-01")).unwrap();
        let borrows = vec![borrow.clone()];

        assert_eq!(open_borrow_for_book(book.id, &borrows), Some(&borrow));
        assert_eq!(open_borrow_for_book(BookId::new(), &borrows), None);
    }
}
