pub mod book_store;
pub mod borrow_store;
pub mod member_store;
pub mod records;
pub mod reservation_store;

pub use book_store::*;
pub use borrow_store::*;
pub use member_store::*;
pub use reservation_store::*;

/// 既定のデータファイル名
pub const BOOKS_FILE: &str = "books.dat";
pub const BORROWS_FILE: &str = "borrows.dat";
pub const RESERVATIONS_FILE: &str = "reservations.dat";
pub const MEMBERS_FILE: &str = "members.dat";
