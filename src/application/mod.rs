pub mod catalog;
pub mod lending;
pub mod reservation;

use std::sync::Arc;

use crate::ports::{BookStore, BorrowStore, MemberStore, NotificationService, ReservationStore};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// このパターンにより：
/// - すべての依存が明示的
/// - アンビエントな共有状態を持たない
/// - テストが明確（インメモリ実装の注入）
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: Arc<dyn BookStore>,
    pub member_store: Arc<dyn MemberStore>,
    pub borrow_store: Arc<dyn BorrowStore>,
    pub reservation_store: Arc<dyn ReservationStore>,
    pub notification_service: Arc<dyn NotificationService>,
}
