//! Data models for Bookmart

pub mod book;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
