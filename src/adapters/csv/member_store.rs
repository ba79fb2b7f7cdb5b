use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::member::Member;
use crate::ports::member_store::{MemberStore as MemberStoreTrait, Result};

use super::records::{MEMBER_HEADERS, MemberRecord, read_records, write_records};

/// MemberStoreの表形式ファイル実装
pub struct MemberStore {
    path: PathBuf,
}

impl MemberStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MemberStoreTrait for MemberStore {
    async fn load(&self) -> Result<Vec<Member>> {
        let records: Vec<MemberRecord> = read_records(&self.path).await?;
        Ok(records.into_iter().map(Member::from).collect())
    }

    async fn save(&self, members: &[Member]) -> Result<()> {
        let records: Vec<MemberRecord> = members.iter().map(MemberRecord::from).collect();
        write_records(&self.path, MEMBER_HEADERS, &records).await
    }
}
