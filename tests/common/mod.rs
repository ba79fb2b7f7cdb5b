use std::sync::Arc;

use chrono::NaiveDate;
use rusty_library_circulation::adapters::mock::{
    book_store::BookStore as MockBookStore, borrow_store::BorrowStore as MockBorrowStore,
    member_store::MemberStore as MockMemberStore,
    notification_service::NotificationService as MockNotificationService,
    reservation_store::ReservationStore as MockReservationStore,
};
use rusty_library_circulation::application::{ServiceDependencies, catalog};
use rusty_library_circulation::domain::commands::{AddBook, RegisterMember};
use rusty_library_circulation::domain::value_objects::{BookId, MemberId};

/// テスト用の依存一式
///
/// インメモリ実装を注入したServiceDependenciesと、送信内容の
/// 検証用に通知モックへの参照を持つ。
pub struct TestContext {
    pub deps: ServiceDependencies,
    pub notifications: Arc<MockNotificationService>,
}

pub fn test_context() -> TestContext {
    let notifications = Arc::new(MockNotificationService::new());
    let deps = ServiceDependencies {
        book_store: Arc::new(MockBookStore::new()),
        member_store: Arc::new(MockMemberStore::new()),
        borrow_store: Arc::new(MockBorrowStore::new()),
        reservation_store: Arc::new(MockReservationStore::new()),
        notification_service: notifications.clone(),
    };
    TestContext {
        deps,
        notifications,
    }
}

/// 書籍を1冊登録する
#[allow(dead_code)]
pub async fn seed_book(deps: &ServiceDependencies, title: &str) -> BookId {
    catalog::add_book(
        deps,
        AddBook {
            title: title.to_string(),
            author: "Author".to_string(),
            isbn: "111".to_string(),
        },
    )
    .await
    .unwrap()
}

/// 会員を1人登録する
#[allow(dead_code)]
pub async fn seed_member(deps: &ServiceDependencies, name: &str) -> MemberId {
    catalog::register_member(
        deps,
        RegisterMember {
            name: name.to_string(),
            contact: format!("{}@example.com", name.to_lowercase()),
        },
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}
