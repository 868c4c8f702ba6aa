//! Repository layer for book listing storage

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Storage for book listings, keyed by caller-supplied isbn.
///
/// Isbn values are not unique. Every keyed operation acts on the earliest
/// inserted record carrying the isbn. Lookups that match nothing return
/// `AppError::NotFound`; backend faults surface as `AppError::Database` or
/// `AppError::StorageUnavailable` and are never retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Store a new record under a fresh internal id
    async fn insert(&self, data: CreateBook) -> AppResult<Book>;

    /// Every stored record, oldest first
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Book>;

    /// Replace the mutable fields of the matching record, returning the new state
    async fn update_by_isbn(&self, isbn: &str, data: UpdateBook) -> AppResult<Book>;

    /// Remove the matching record, returning what was removed
    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<Book>;

    /// Check that the backend answers
    async fn ping(&self) -> AppResult<()>;
}

fn not_found(isbn: &str) -> crate::error::AppError {
    crate::error::AppError::NotFound(format!("Book with isbn {} not found", isbn))
}
