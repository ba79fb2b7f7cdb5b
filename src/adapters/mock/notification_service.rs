use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::value_objects::MemberId;
use crate::ports::notification_service::{
    NotificationService as NotificationServiceTrait, Result,
};

/// 送信された通知の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub member_id: MemberId,
    pub book_title: String,
    pub reserved_on: NaiveDate,
}

/// NotificationServiceのモック実装
///
/// 実際の配信チャネルには繋がず、送信内容をログに出して記録する。
/// テストでの検証に使う。
pub struct NotificationService {
    sent: Mutex<Vec<SentNotification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// これまでに送信された通知
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn notify_book_available(
        &self,
        member_id: MemberId,
        book_title: &str,
        reserved_on: NaiveDate,
    ) -> Result<()> {
        tracing::info!(
            "notify member {}: '{}' (reserved on {}) is available again",
            member_id.value(),
            book_title,
            reserved_on
        );
        self.sent.lock().unwrap().push(SentNotification {
            member_id,
            book_title: book_title.to_string(),
            reserved_on,
        });
        Ok(())
    }
}
