//! In-process book store

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{not_found, BookStore};
use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

/// Book store kept in memory; contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryBookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(books: &[Book], isbn: &str) -> Option<usize> {
    books.iter().position(|b| b.isbn.as_deref() == Some(isbn))
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, data: CreateBook) -> AppResult<Book> {
        let book = Book::new(data);
        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        let books = self.books.read().await;
        position(&books, isbn)
            .map(|idx| books[idx].clone())
            .ok_or_else(|| not_found(isbn))
    }

    async fn update_by_isbn(&self, isbn: &str, data: UpdateBook) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let idx = position(&books, isbn).ok_or_else(|| not_found(isbn))?;
        books[idx].apply(data);
        Ok(books[idx].clone())
    }

    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let idx = position(&books, isbn).ok_or_else(|| not_found(isbn))?;
        Ok(books.remove(idx))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
