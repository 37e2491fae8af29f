//! Book catalog endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Query parameters identifying one book
#[derive(Deserialize)]
pub struct IsbnQuery {
    pub isbn: String,
}

/// Query parameters for the find endpoint: exactly one must be set
#[derive(Deserialize)]
pub struct FindQuery {
    pub isbn: Option<String>,
    pub author: Option<String>,
}

/// Find result: a single book for an isbn query, a list for an author query
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum FindBookResponse {
    Book(Book),
    Books(Vec<Book>),
}

/// Add a new book to the catalog
#[utoipa::path(
    post,
    path = "/book/add",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book added", body = Book),
        (status = 400, description = "Invalid payload or book already exists")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<Json<Book>> {
    let saved = state.services.library.add_book(book).await?;
    Ok(Json(saved))
}

/// Remove a book from the catalog
#[utoipa::path(
    delete,
    path = "/book/remove",
    tag = "books",
    params(
        ("isbn" = String, Query, description = "ISBN of the book to remove")
    ),
    responses(
        (status = 200, description = "Removed book", body = Book),
        (status = 400, description = "Book not found")
    )
)]
pub async fn remove_book(
    State(state): State<crate::AppState>,
    Query(query): Query<IsbnQuery>,
) -> AppResult<Json<Book>> {
    let removed = state.services.library.remove_book(&query.isbn).await?;
    Ok(Json(removed))
}

/// Find a book by isbn, or all books by an author.
///
/// An author lookup returning an empty list is a success, not an error.
#[utoipa::path(
    get,
    path = "/book/find",
    tag = "books",
    params(
        ("isbn" = Option<String>, Query, description = "ISBN to look up"),
        ("author" = Option<String>, Query, description = "Author to look up")
    ),
    responses(
        (status = 200, description = "Matching book or books", body = FindBookResponse),
        (status = 400, description = "Missing or conflicting parameters, or book not found")
    )
)]
pub async fn find_book(
    State(state): State<crate::AppState>,
    Query(query): Query<FindQuery>,
) -> AppResult<Json<FindBookResponse>> {
    match (query.isbn, query.author) {
        (None, None) => Err(AppError::BadRequest(
            "Either isbn or author should be provided.".to_string(),
        )),
        (Some(_), Some(_)) => Err(AppError::BadRequest(
            "You could only provide one. Not both.".to_string(),
        )),
        (Some(isbn), None) => {
            let book = state.services.library.find_book_by_isbn(&isbn).await?;
            Ok(Json(FindBookResponse::Book(book)))
        }
        (None, Some(author)) => {
            let books = state.services.library.find_books_by_author(&author).await;
            Ok(Json(FindBookResponse::Books(books)))
        }
    }
}

/// Borrow a book
#[utoipa::path(
    put,
    path = "/book/borrow",
    tag = "books",
    params(
        ("isbn" = String, Query, description = "ISBN of the book to borrow")
    ),
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Book not found"),
        (status = 422, description = "No available copies")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Query(query): Query<IsbnQuery>,
) -> AppResult<Json<Book>> {
    let book = state.services.library.borrow_book(&query.isbn).await?;
    Ok(Json(book))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/book/return",
    tag = "books",
    params(
        ("isbn" = String, Query, description = "ISBN of the book to return")
    ),
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Book not found")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Query(query): Query<IsbnQuery>,
) -> AppResult<Json<Book>> {
    let book = state.services.library.return_book(&query.isbn).await?;
    Ok(Json(book))
}
