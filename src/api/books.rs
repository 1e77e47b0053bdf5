//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ApiResponse, Book, BookQuery};

/// Envelope carrying a single book (documentation schema)
#[derive(Serialize, ToSchema)]
pub struct BookEnvelope {
    pub is_success: bool,
    pub message: String,
    pub data: Option<Book>,
}

/// Envelope carrying a page of books (documentation schema)
#[derive(Serialize, ToSchema)]
pub struct BookListEnvelope {
    pub is_success: bool,
    pub message: String,
    pub data: Option<Vec<Book>>,
}

/// Envelope without payload (documentation schema)
#[derive(Serialize, ToSchema)]
pub struct MessageEnvelope {
    pub is_success: bool,
    pub message: String,
}

/// List books, one page at a time
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Page of books", body = BookListEnvelope),
        (status = 400, description = "Invalid pagination", body = BookListEnvelope)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> ApiResponse<Vec<Book>> {
    let defaults = &state.config.pagination;
    state
        .services
        .books
        .list(
            query.page_number.unwrap_or(defaults.default_page_number),
            query.page_size.unwrap_or(defaults.default_page_size),
        )
        .await
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookEnvelope),
        (status = 400, description = "Book not found", body = BookEnvelope)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> ApiResponse<Book> {
    state.services.books.get(id).await
}

/// Add a new book; the server assigns its ID
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = BookEnvelope),
        (status = 400, description = "Book could not be added", body = BookEnvelope)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> (StatusCode, ApiResponse<Book>) {
    let response = state.services.books.add(book).await;
    let status = if response.is_success {
        StatusCode::CREATED
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, response)
}

/// Replace every field of an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = BookEnvelope),
        (status = 400, description = "Book not found", body = BookEnvelope)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(mut book): Json<Book>,
) -> ApiResponse<Book> {
    // The path is authoritative over any id in the body.
    book.id = id;
    state.services.books.update(book).await
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageEnvelope),
        (status = 400, description = "Book not found", body = MessageEnvelope)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    state.services.books.delete(id).await
}
