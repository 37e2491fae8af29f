//! Books repository: concurrent in-memory storage
//!
//! Books are kept in two maps guarded by a single lock: a primary store
//! keyed by isbn and an author index mapping each author to the isbns of
//! their books in insertion order. Both maps are always updated under the
//! same write guard, so no reader ever observes one without the other being
//! consistent for the same book.
//!
//! This layer never raises domain errors; absence is expressed as `None` or
//! an empty vec. Domain decisions belong to the service layer.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Book;

#[derive(Default)]
struct Store {
    /// Primary store: isbn -> Book
    books: HashMap<String, Book>,
    /// Author index: author -> isbns of their books, in insertion order
    by_author: HashMap<String, Vec<String>>,
}

#[derive(Clone, Default)]
pub struct BooksRepository {
    store: Arc<RwLock<Store>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a book if its isbn is not already taken.
    ///
    /// Returns the stored book, or `None` when a book with the same isbn
    /// already exists, in which case neither map is touched. The insert and
    /// the author-index append happen under one write guard, so concurrent
    /// adds racing on the same isbn cannot both succeed and cannot leave the
    /// two maps disagreeing about membership.
    pub async fn add(&self, book: Book) -> Option<Book> {
        let mut store = self.store.write().await;
        if store.books.contains_key(&book.isbn) {
            return None;
        }
        store
            .by_author
            .entry(book.author.clone())
            .or_default()
            .push(book.isbn.clone());
        store.books.insert(book.isbn.clone(), book.clone());
        Some(book)
    }

    /// Remove a book by isbn.
    ///
    /// Returns the removed book if present, `None` if absent (absence is
    /// not an error here). Removal also deletes the isbn from its author's
    /// index list; the author entry is dropped entirely once its list is
    /// empty.
    pub async fn remove(&self, isbn: &str) -> Option<Book> {
        let mut store = self.store.write().await;
        let book = store.books.remove(isbn)?;
        if let Some(isbns) = store.by_author.get_mut(&book.author) {
            isbns.retain(|i| i != isbn);
            if isbns.is_empty() {
                store.by_author.remove(&book.author);
            }
        }
        Some(book)
    }

    /// Look up a book by isbn
    pub async fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.store.read().await.books.get(isbn).cloned()
    }

    /// List the books of an author, in the order they were added.
    ///
    /// Unknown authors yield an empty vec. An isbn present in the index but
    /// missing from the primary store is skipped rather than treated as a
    /// failure.
    pub async fn find_by_author(&self, author: &str) -> Vec<Book> {
        let store = self.store.read().await;
        let Some(isbns) = store.by_author.get(author) else {
            return Vec::new();
        };
        isbns
            .iter()
            .filter_map(|isbn| store.books.get(isbn).cloned())
            .collect()
    }

    /// Set a book's available copies and re-store it under its isbn.
    ///
    /// The caller guarantees `new_count >= 0`. This is an upsert with no
    /// existence check: a book that was removed between lookup and update is
    /// silently re-added (known simplification inherited from the original
    /// design). When that happens the book is re-indexed under its author so
    /// the two maps stay in lockstep.
    pub async fn update_available_copies(&self, mut book: Book, new_count: i32) -> Book {
        book.available_copies = new_count;
        let mut store = self.store.write().await;
        let previous = store.books.insert(book.isbn.clone(), book.clone());
        if previous.is_none() {
            store
                .by_author
                .entry(book.author.clone())
                .or_default()
                .push(book.isbn.clone());
        }
        book
    }
}
