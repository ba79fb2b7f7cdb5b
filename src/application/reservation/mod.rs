pub mod errors;
pub mod reservation_service;

pub use errors::*;
pub use reservation_service::*;
