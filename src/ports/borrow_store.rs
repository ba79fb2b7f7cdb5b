use crate::domain::borrow::Borrow;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出レコードストアポート
///
/// 未返却の貸出コレクションの永続化を抽象化する。返却された貸出は
/// コレクションから取り除かれた上で全件書き直しされる。
#[async_trait]
pub trait BorrowStore: Send + Sync {
    /// 貸出コレクション全体を読み込む
    ///
    /// 永続表現が存在しない場合は空のコレクションを返す。
    async fn load(&self) -> Result<Vec<Borrow>>;

    /// 貸出コレクション全体を書き直す
    async fn save(&self, borrows: &[Borrow]) -> Result<()>;
}
