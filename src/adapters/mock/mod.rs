pub mod book_store;
pub mod borrow_store;
pub mod member_store;
pub mod notification_service;
pub mod reservation_store;
