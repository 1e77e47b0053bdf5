//! Book model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Book record held by the catalog.
///
/// Every field except `id` is free-form; missing fields in an incoming body
/// fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Identifier assigned by the store (ignored on create)
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    /// Free text, e.g. "available" or "borrowed"
    pub availability_status: String,
    pub edition: String,
    pub summary: String,
}

impl Book {
    /// Overwrite every field except the identifier.
    pub fn apply(&mut self, other: Book) {
        self.title = other.title;
        self.author = other.author;
        self.genre = other.genre;
        self.publication_date = other.publication_date;
        self.availability_status = other.availability_status;
        self.edition = other.edition;
        self.summary = other.summary;
    }
}

/// Pagination query for the book list
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Page number, starting at 1 (default: 1)
    pub page_number: Option<i64>,
    /// Books per page (default: 10)
    pub page_size: Option<i64>,
}
