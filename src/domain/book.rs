use serde::{Deserialize, Serialize};

use super::BookId;
use super::commands::UpdateBook;

/// Book集約 - 蔵書1冊
///
/// `available`は導出状態であり、未返却のBorrowがこの書籍を
/// 1件も参照していない場合に限りtrueとなる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
}

/// 純粋関数：書籍を登録する
///
/// 新規書籍は常に貸出可能（available = true）で始まる。
pub fn create_book(title: String, author: String, isbn: String) -> Book {
    Book {
        id: BookId::new(),
        title,
        author,
        isbn,
        available: true,
    }
}

/// 純粋関数：書籍情報を更新する
///
/// コマンドで指定されたフィールドのみ適用する。
/// `available`は貸出状態からの導出値であり、ここでは変更できない。
///
/// 副作用なし。更新後のBookを返す。
pub fn apply_book_update(book: &Book, cmd: &UpdateBook) -> Book {
    Book {
        title: cmd.title.clone().unwrap_or_else(|| book.title.clone()),
        author: cmd.author.clone().unwrap_or_else(|| book.author.clone()),
        isbn: cmd.isbn.clone().unwrap_or_else(|| book.isbn.clone()),
        ..book.clone()
    }
}

/// 純粋関数：タイトルの部分一致検索
///
/// 大文字小文字を区別しない。コレクションの元の並び順を保ち、
/// 非破壊で全件を返す。
pub fn search_by_title<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let query = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> Book {
        create_book(title.to_string(), "Author".to_string(), "111".to_string())
    }

    #[test]
    fn test_create_book_starts_available() {
        let book = create_book(
            "Dune".to_string(),
            "Herbert".to_string(),
            "111".to_string(),
        );
        assert!(book.available);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.isbn, "111");
    }

    #[test]
    fn test_apply_book_update_only_touches_given_fields() {
        let original = book("Dune");
        let cmd = UpdateBook {
            book_id: original.id,
            title: Some("Dune Messiah".to_string()),
            author: None,
            isbn: None,
        };

        let updated = apply_book_update(&original, &cmd);

        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.author, original.author);
        assert_eq!(updated.isbn, original.isbn);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.available, original.available);
    }

    #[test]
    fn test_search_by_title_is_case_insensitive() {
        let books = vec![book("Dune"), book("The Dispossessed"), book("Neuromancer")];

        let results = search_by_title(&books, "dUnE");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dune");
    }

    #[test]
    fn test_search_by_title_keeps_collection_order() {
        let books = vec![book("Foundation"), book("Second Foundation"), book("Dune")];

        let results = search_by_title(&books, "foundation");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Foundation");
        assert_eq!(results[1].title, "Second Foundation");
    }

    #[test]
    fn test_search_by_title_no_match_returns_empty() {
        let books = vec![book("Dune")];
        assert!(search_by_title(&books, "hyperion").is_empty());
    }
}
