use crate::domain::member::Member;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員レコードストアポート
///
/// 会員コレクションの永続化を抽象化する。借用中書籍・予約の一覧は
/// 導出値であるため永続化されない。
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// 会員コレクション全体を読み込む
    ///
    /// 永続表現が存在しない場合は空のコレクションを返す。
    async fn load(&self) -> Result<Vec<Member>>;

    /// 会員コレクション全体を書き直す
    async fn save(&self, members: &[Member]) -> Result<()>;
}
