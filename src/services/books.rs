//! Book catalog service
//!
//! Every operation ends in an [`ApiResponse`]: store errors are logged and
//! rendered into the envelope instead of being propagated to the caller.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{ApiResponse, Book},
    repository::BookStore,
};

pub const MSG_LIST_OK: &str = "Books retrieved successfully";
pub const MSG_GET_OK: &str = "Book retrieved successfully";
pub const MSG_ADD_OK: &str = "Book added successfully";
pub const MSG_UPDATE_OK: &str = "Book updated successfully";
pub const MSG_DELETE_OK: &str = "Book deleted successfully";
pub const MSG_NOT_FOUND: &str = "Book not found";
pub const MSG_INVALID_PAGE: &str =
    "Invalid pagination: page_number and page_size must be positive";

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Paginated list in insertion order
    pub async fn list(&self, page_number: i64, page_size: i64) -> ApiResponse<Vec<Book>> {
        match self.store.list(page_number, page_size).await {
            Ok(books) => ApiResponse::success(MSG_LIST_OK, books),
            Err(AppError::BadRequest(_)) => {
                tracing::warn!(page_number, page_size, "rejected book list pagination");
                ApiResponse::failure(MSG_INVALID_PAGE)
            }
            Err(e) => failure("retrieving books", e),
        }
    }

    pub async fn get(&self, id: i32) -> ApiResponse<Book> {
        match self.store.get(id).await {
            Ok(book) => ApiResponse::success(MSG_GET_OK, book),
            Err(e) => failure("retrieving the book", e),
        }
    }

    /// Add a new book; its incoming id is replaced by the store
    pub async fn add(&self, book: Book) -> ApiResponse<Book> {
        match self.store.add(book).await {
            Ok(book) => {
                tracing::info!(id = book.id, title = %book.title, "Book added");
                ApiResponse::success(MSG_ADD_OK, book)
            }
            Err(e) => failure("adding the book", e),
        }
    }

    pub async fn update(&self, book: Book) -> ApiResponse<Book> {
        match self.store.update(book).await {
            Ok(book) => {
                tracing::info!(id = book.id, "Book updated");
                ApiResponse::success(MSG_UPDATE_OK, book)
            }
            Err(e) => failure("updating the book", e),
        }
    }

    pub async fn delete(&self, id: i32) -> ApiResponse<()> {
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Book deleted");
                ApiResponse::done(MSG_DELETE_OK)
            }
            Err(e) => failure("deleting the book", e),
        }
    }
}

fn failure<T>(action: &str, err: AppError) -> ApiResponse<T> {
    match err {
        AppError::NotFound(msg) => {
            tracing::warn!("{}", msg);
            ApiResponse::failure(MSG_NOT_FOUND)
        }
        AppError::BadRequest(msg) => {
            tracing::warn!("Bad request while {}: {}", action, msg);
            ApiResponse::failure(msg)
        }
        AppError::Internal(msg) => {
            tracing::error!("Error while {}: {}", action, msg);
            ApiResponse::failure(format!("An error occurred while {}: {}", action, msg))
        }
    }
}
