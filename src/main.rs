use rusty_library_circulation::{
    adapters::csv::{
        self, book_store::BookStore as CsvBookStore, borrow_store::BorrowStore as CsvBorrowStore,
        member_store::MemberStore as CsvMemberStore,
        reservation_store::ReservationStore as CsvReservationStore,
    },
    adapters::mock::notification_service::NotificationService as MockNotificationService,
    application::ServiceDependencies,
    cli,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_circulation=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Data directory for the tabular record files
    let data_dir = std::path::PathBuf::from(
        std::env::var("LIBRARY_DATA_DIR").unwrap_or_else(|_| "data".into()),
    );

    tracing::info!("Data directory: {}", data_dir.display());

    std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");

    // Initialize adapters
    let book_store = Arc::new(CsvBookStore::new(data_dir.join(csv::BOOKS_FILE)));
    let member_store = Arc::new(CsvMemberStore::new(data_dir.join(csv::MEMBERS_FILE)));
    let borrow_store = Arc::new(CsvBorrowStore::new(data_dir.join(csv::BORROWS_FILE)));
    let reservation_store = Arc::new(CsvReservationStore::new(
        data_dir.join(csv::RESERVATIONS_FILE),
    ));
    let notification_service = Arc::new(MockNotificationService::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        book_store,
        member_store,
        borrow_store,
        reservation_store,
        notification_service,
    };

    // Run the menu loop
    cli::run(&service_deps)
        .await
        .expect("Failed to read from standard input");
}
