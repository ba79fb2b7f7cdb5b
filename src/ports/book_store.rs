use crate::domain::book::Book;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍レコードストアポート
///
/// 蔵書コレクションの永続化を抽象化する。永続表現は常に
/// コレクション全体として読み書きされ、部分更新は行わない。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// 蔵書コレクション全体を読み込む
    ///
    /// 永続表現が存在しない場合は空のコレクションを返す
    /// （初回起動を許容する）。
    async fn load(&self) -> Result<Vec<Book>>;

    /// 蔵書コレクション全体を書き直す
    ///
    /// 追記ではなく全件の書き直し。すべての変更操作の後に呼ばれる。
    async fn save(&self, books: &[Book]) -> Result<()>;
}
