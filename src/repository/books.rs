//! In-memory book store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Process-lifetime book collection guarded by a single lock.
///
/// Reads share the lock; every mutation holds it exclusively for the whole
/// operation, so identifier assignment cannot race.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    inner: RwLock<Collection>,
}

#[derive(Debug, Default)]
struct Collection {
    books: Vec<Book>,
    /// Highest id ever issued; ids of deleted books are not handed out again
    last_id: i32,
}

impl Collection {
    fn next_id(&self) -> AppResult<i32> {
        let max = self
            .books
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or(0)
            .max(self.last_id);

        max.checked_add(1)
            .ok_or_else(|| AppError::Internal("book identifier space exhausted".to_string()))
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.books.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self, page_number: i64, page_size: i64) -> AppResult<Vec<Book>> {
        if page_number < 1 || page_size < 1 {
            return Err(AppError::BadRequest(
                "page_number and page_size must be positive".to_string(),
            ));
        }

        // Offsets past usize::MAX cannot address anything: empty page.
        let skip = (page_number - 1)
            .checked_mul(page_size)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);

        let collection = self.inner.read().await;
        Ok(collection.books.iter().skip(skip).take(take).cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Book> {
        let collection = self.inner.read().await;
        collection
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn add(&self, mut book: Book) -> AppResult<Book> {
        let mut collection = self.inner.write().await;
        let id = collection.next_id()?;
        book.id = id;
        collection.last_id = id;
        collection.books.push(book.clone());
        tracing::debug!(id, "book added");
        Ok(book)
    }

    async fn update(&self, book: Book) -> AppResult<Book> {
        let mut collection = self.inner.write().await;
        let id = book.id;
        let idx = collection.position(id).ok_or_else(|| not_found(id))?;
        let stored = &mut collection.books[idx];
        stored.apply(book);
        tracing::debug!(id, "book updated");
        Ok(stored.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut collection = self.inner.write().await;
        let idx = collection.position(id).ok_or_else(|| not_found(id))?;
        collection.books.remove(idx);
        tracing::debug!(id, "book deleted");
        Ok(())
    }
}
