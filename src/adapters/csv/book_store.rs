use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::book::Book;
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};

use super::records::{BOOK_HEADERS, BookRecord, read_records, write_records};

/// BookStoreの表形式ファイル実装
///
/// ヘッダー行 + 1レコード1行。保存は常に全件の書き直し。
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn load(&self) -> Result<Vec<Book>> {
        let records: Vec<BookRecord> = read_records(&self.path).await?;
        Ok(records.into_iter().map(Book::from).collect())
    }

    async fn save(&self, books: &[Book]) -> Result<()> {
        let records: Vec<BookRecord> = books.iter().map(BookRecord::from).collect();
        write_records(&self.path, BOOK_HEADERS, &records).await
    }
}
