//! Data models

pub mod book;
pub mod response;

pub use book::{Book, BookQuery};
pub use response::ApiResponse;
