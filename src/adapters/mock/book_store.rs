use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::book::Book;
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};

/// BookStoreのインメモリ実装
///
/// Mutexで保護された単一コレクション。ロックは各ストア呼び出しの間
/// 保持され、排他境界となる。テストと開発用。
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.lock().unwrap().clone())
    }

    async fn save(&self, books: &[Book]) -> Result<()> {
        *self.books.lock().unwrap() = books.to_vec();
        Ok(())
    }
}
