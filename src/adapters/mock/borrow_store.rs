use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::borrow::Borrow;
use crate::ports::borrow_store::{BorrowStore as BorrowStoreTrait, Result};

/// BorrowStoreのインメモリ実装
pub struct BorrowStore {
    borrows: Mutex<Vec<Borrow>>,
}

impl BorrowStore {
    pub fn new() -> Self {
        Self {
            borrows: Mutex::new(Vec::new()),
        }
    }
}

impl Default for BorrowStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BorrowStoreTrait for BorrowStore {
    async fn load(&self) -> Result<Vec<Borrow>> {
        Ok(self.borrows.lock().unwrap().clone())
    }

    async fn save(&self, borrows: &[Borrow]) -> Result<()> {
        *self.borrows.lock().unwrap() = borrows.to_vec();
        Ok(())
    }
}
