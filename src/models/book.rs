//! Book listing model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Book listing record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Internal identifier assigned by the store
    pub id: Uuid,
    /// Caller-supplied ISBN, used as the lookup key
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Free-form condition label (e.g. "like new")
    pub condition: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book listing request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateBook {
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Update book listing request.
///
/// Every field replaces the stored value: a field left out of the request
/// clears the stored value instead of keeping it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub category: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl Book {
    /// Build a fresh record from a create request
    pub fn new(data: CreateBook) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            isbn: data.isbn,
            category: data.category,
            title: data.title,
            author: data.author,
            condition: data.condition,
            price: data.price,
            description: data.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields with the update request
    pub fn apply(&mut self, data: UpdateBook) {
        self.category = data.category;
        self.title = data.title;
        self.author = data.author;
        self.condition = data.condition;
        self.price = data.price;
        self.description = data.description;
        self.updated_at = Utc::now();
    }
}
