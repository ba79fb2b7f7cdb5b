use crate::domain::reservation::Reservation;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約レコードストアポート
///
/// 予約コレクションの永続化を抽象化する。書籍ごとの予約待ち行列は
/// このコレクションの挿入順から導出されるため、保存時も順序を保つ。
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// 予約コレクション全体を挿入順で読み込む
    ///
    /// 永続表現が存在しない場合は空のコレクションを返す。
    async fn load(&self) -> Result<Vec<Reservation>>;

    /// 予約コレクション全体を書き直す
    async fn save(&self, reservations: &[Reservation]) -> Result<()>;
}
