pub mod book_store;
pub mod borrow_store;
pub mod member_store;
pub mod notification_service;
pub mod reservation_store;

pub use book_store::*;
pub use borrow_store::*;
pub use member_store::*;
pub use notification_service::*;
pub use reservation_store::*;
