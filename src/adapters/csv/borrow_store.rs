use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::borrow::Borrow;
use crate::ports::borrow_store::{BorrowStore as BorrowStoreTrait, Result};

use super::records::{BORROW_HEADERS, BorrowRecord, read_records, write_records};

/// BorrowStoreの表形式ファイル実装
pub struct BorrowStore {
    path: PathBuf,
}

impl BorrowStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BorrowStoreTrait for BorrowStore {
    async fn load(&self) -> Result<Vec<Borrow>> {
        let records: Vec<BorrowRecord> = read_records(&self.path).await?;
        Ok(records.into_iter().map(Borrow::from).collect())
    }

    async fn save(&self, borrows: &[Borrow]) -> Result<()> {
        let records: Vec<BorrowRecord> = borrows.iter().map(BorrowRecord::from).collect();
        write_records(&self.path, BORROW_HEADERS, &records).await
    }
}
