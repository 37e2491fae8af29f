//! Library service: domain rules over the book repository
//!
//! This is the only place where identifier uniqueness and availability
//! semantics are checked. The service itself is stateless and holds no
//! lock; it only orchestrates repository calls.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
}

impl LibraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a new book to the catalog.
    ///
    /// Fails with `InvalidEntry` when a required field is empty or fewer
    /// than one copy is supplied, and with `AlreadyExists` when the isbn is
    /// already taken. Uniqueness is enforced by the repository's conditional
    /// insert, so two concurrent adds for the same isbn cannot both succeed.
    /// Re-stocking an existing isbn through add is rejected by design;
    /// merging copies on duplicate add is out of scope.
    pub async fn add_book(&self, book: Book) -> AppResult<Book> {
        if book.validate().is_err() {
            return Err(AppError::InvalidEntry(
                "Invalid book entry, please check the payload".to_string(),
            ));
        }

        match self.repository.books.add(book).await {
            Some(stored) => {
                tracing::info!("Added book isbn={}", stored.isbn);
                Ok(stored)
            }
            None => Err(AppError::AlreadyExists("Book already exists".to_string())),
        }
    }

    /// Remove a book from the catalog
    pub async fn remove_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .books
            .remove(isbn)
            .await
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Find a book by isbn
    pub async fn find_book_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .books
            .find_by_isbn(isbn)
            .await
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Find all books by an author; an empty list is a valid result
    pub async fn find_books_by_author(&self, author: &str) -> Vec<Book> {
        self.repository.books.find_by_author(author).await
    }

    /// Borrow a book: decrement its available copies.
    ///
    /// Fails with `NotAvailable` once the count has reached zero.
    pub async fn borrow_book(&self, isbn: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .find_by_isbn(isbn)
            .await
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if book.available_copies < 1 {
            return Err(AppError::NotAvailable("No available copies".to_string()));
        }

        let new_count = book.available_copies - 1;
        Ok(self
            .repository
            .books
            .update_available_copies(book, new_count)
            .await)
    }

    /// Return a book: increment its available copies.
    ///
    /// Accepted unconditionally; there is no upper bound on the count, so
    /// returning more copies than were ever borrowed goes through silently.
    pub async fn return_book(&self, isbn: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .find_by_isbn(isbn)
            .await
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        let new_count = book.available_copies + 1;
        Ok(self
            .repository
            .books
            .update_available_copies(book, new_count)
            .await)
    }
}
