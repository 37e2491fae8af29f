//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book record, keyed by isbn
///
/// The same shape is used as the wire format for requests and responses.
/// `available_copies` must be at least 1 when a book enters the catalog;
/// afterwards it may legitimately reach 0 through borrowing but never goes
/// negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, immutable once created
    #[validate(length(min = 1, message = "isbn must not be empty"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Used as the secondary index key
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub publication_year: i32,
    /// Number of units currently loanable
    #[validate(range(min = 1, message = "availableCopies must be at least 1"))]
    pub available_copies: i32,
}
