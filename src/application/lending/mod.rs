pub mod errors;
pub mod lending_service;

pub use errors::*;
pub use lending_service::*;
