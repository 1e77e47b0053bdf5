//! Repository layer: the book collection

pub mod books;

use async_trait::async_trait;

use crate::{error::AppResult, models::Book};

pub use books::InMemoryBookStore;

/// Storage contract for the book collection.
///
/// Identifiers are assigned by the store; the caller's `id` on `add` is ignored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Positional page over insertion order. Both arguments must be >= 1.
    async fn list(&self, page_number: i64, page_size: i64) -> AppResult<Vec<Book>>;

    async fn get(&self, id: i32) -> AppResult<Book>;

    async fn add(&self, book: Book) -> AppResult<Book>;

    /// Overwrite every field of the book with the same id
    async fn update(&self, book: Book) -> AppResult<Book>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}
