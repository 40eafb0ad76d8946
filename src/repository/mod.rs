//! Repository layer for in-memory storage

pub mod books;

use crate::models::Book;

/// Main repository struct holding the stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository, optionally seeded with the sample books
    pub fn new(seed_samples: bool) -> Self {
        let books = if seed_samples {
            books::BooksRepository::with_books(Book::samples())
        } else {
            books::BooksRepository::default()
        };
        Self { books }
    }
}
