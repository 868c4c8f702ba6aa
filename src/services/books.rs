//! Book listing service

use std::{future::Future, sync::Arc, time::Duration};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
    timeout: Duration,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Run a store call, giving up once the storage timeout elapses
    async fn bounded<T>(&self, call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                AppError::StorageUnavailable(format!(
                    "storage call timed out after {} ms",
                    self.timeout.as_millis()
                ))
            })?
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.bounded(self.store.insert(data)).await?;
        tracing::info!(id = %book.id, isbn = ?book.isbn, "Book listing created");
        Ok(book)
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.bounded(self.store.find_all()).await
    }

    pub async fn find_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.bounded(self.store.find_by_isbn(isbn)).await
    }

    pub async fn update(&self, isbn: &str, data: UpdateBook) -> AppResult<Book> {
        let book = self.bounded(self.store.update_by_isbn(isbn, data)).await?;
        tracing::info!(id = %book.id, isbn, "Book listing updated");
        Ok(book)
    }

    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        let book = self.bounded(self.store.delete_by_isbn(isbn)).await?;
        tracing::info!(id = %book.id, isbn, "Book listing deleted");
        Ok(())
    }

    /// Readiness probe against the backing store
    pub async fn ping(&self) -> AppResult<()> {
        self.bounded(self.store.ping()).await
    }
}
