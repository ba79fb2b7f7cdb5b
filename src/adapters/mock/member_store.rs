use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::member::Member;
use crate::ports::member_store::{MemberStore as MemberStoreTrait, Result};

/// MemberStoreのインメモリ実装
pub struct MemberStore {
    members: Mutex<Vec<Member>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberStoreTrait for MemberStore {
    async fn load(&self) -> Result<Vec<Member>> {
        Ok(self.members.lock().unwrap().clone())
    }

    async fn save(&self, members: &[Member]) -> Result<()> {
        *self.members.lock().unwrap() = members.to_vec();
        Ok(())
    }
}
