//! Data models for Bookshelf

pub mod book;
pub mod enums;

// Re-export commonly used types
pub use book::{Book, BookCatalog};
pub use enums::Genre;
