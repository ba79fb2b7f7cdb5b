use crate::domain::value_objects::MemberId;
use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 予約していた書籍が返却されたことを会員に通知する
    ///
    /// 返却処理で予約待ち行列の先頭会員に対して呼ばれる。
    /// 予約から貸出への自動変換は行わない。
    async fn notify_book_available(
        &self,
        member_id: MemberId,
        book_title: &str,
        reserved_on: NaiveDate,
    ) -> Result<()>;
}
