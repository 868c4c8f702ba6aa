//! PostgreSQL book store

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::{not_found, BookStore};
use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

const BOOK_COLUMNS: &str =
    "id, isbn, category, title, author, condition, price, description, created_at, updated_at";

/// Insertion order, so the earliest record carrying an isbn wins
const INSERTION_ORDER: &str = "ORDER BY seq";

/// Sub-select picking the record a keyed operation applies to
const FIRST_MATCH: &str = "SELECT id FROM books WHERE isbn = $1 ORDER BY seq LIMIT 1";

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, data: CreateBook) -> AppResult<Book> {
        let book = Book::new(data);

        let query = format!(
            r#"
            INSERT INTO books (
                id, isbn, category, title, author, condition, price, description,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );

        let row = sqlx::query_as::<_, Book>(&query)
            .bind(book.id)
            .bind(&book.isbn)
            .bind(&book.category)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.condition)
            .bind(book.price)
            .bind(&book.description)
            .bind(book.created_at)
            .bind(book.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let query = format!("SELECT {} FROM books {}", BOOK_COLUMNS, INSERTION_ORDER);

        let rows = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        let query = format!(
            "SELECT {} FROM books WHERE id = ({})",
            BOOK_COLUMNS, FIRST_MATCH
        );

        sqlx::query_as::<_, Book>(&query)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(isbn))
    }

    async fn update_by_isbn(&self, isbn: &str, data: UpdateBook) -> AppResult<Book> {
        // Omitted fields are bound as NULL: an update replaces, it does not merge.
        let query = format!(
            r#"
            UPDATE books SET
                category = $2,
                title = $3,
                author = $4,
                condition = $5,
                price = $6,
                description = $7,
                updated_at = $8
            WHERE id = ({})
            RETURNING {}
            "#,
            FIRST_MATCH, BOOK_COLUMNS
        );

        sqlx::query_as::<_, Book>(&query)
            .bind(isbn)
            .bind(&data.category)
            .bind(&data.title)
            .bind(&data.author)
            .bind(&data.condition)
            .bind(data.price)
            .bind(&data.description)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(isbn))
    }

    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        let query = format!(
            "DELETE FROM books WHERE id = ({}) RETURNING {}",
            FIRST_MATCH, BOOK_COLUMNS
        );

        sqlx::query_as::<_, Book>(&query)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(isbn))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
