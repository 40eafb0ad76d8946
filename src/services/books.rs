//! Book catalog service

use crate::{
    config::{DuplicatePolicy, StoreConfig},
    error::{AppError, AppResult},
    models::{Book, BookCatalog},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    config: StoreConfig,
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book with ID {} not found", id))
}

impl BooksService {
    pub fn new(repository: Repository, config: StoreConfig) -> Self {
        Self { repository, config }
    }

    /// Store a new book, honoring the duplicate id policy
    pub fn create_book(&self, book: Book) -> AppResult<Book> {
        let id = book.id;
        match self.config.on_duplicate_create {
            DuplicatePolicy::Overwrite => {
                if self.repository.books.add(book.clone())?.is_some() {
                    tracing::info!("Book create: overwrote existing id={}", id);
                } else {
                    tracing::info!("Book create: id={}", id);
                }
            }
            DuplicatePolicy::Reject => {
                self.repository.books.try_add(book.clone()).map_err(|e| {
                    tracing::warn!("Book create: id={} rejected, already exists", id);
                    e
                })?;
                tracing::info!("Book create: id={}", id);
            }
        }
        Ok(book)
    }

    pub fn list_books(&self) -> AppResult<BookCatalog> {
        self.repository.books.get_all()
    }

    pub fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get(id)?.ok_or_else(|| not_found(id))
    }

    /// Replace the book at `id`. Unknown ids are a 404 unless upserts are enabled.
    pub fn update_book(&self, id: i64, book: Book) -> AppResult<Book> {
        if book.id != id {
            tracing::debug!("Book update: body id={} replaced by path id={}", book.id, id);
        }

        let updated = if self.config.upsert_on_update {
            self.repository.books.upsert(id, book)?
        } else {
            self.repository.books.update(id, book)?.ok_or_else(|| not_found(id))?
        };
        tracing::info!("Book update: id={}", id);
        Ok(updated)
    }

    pub fn count(&self) -> AppResult<usize> {
        self.repository.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    fn service(config: StoreConfig) -> BooksService {
        BooksService::new(Repository::new(true), config)
    }

    fn neuromancer(id: i64) -> Book {
        Book {
            id,
            title: "Neuromancer".to_string(),
            author: "William Gibson".to_string(),
            publication_year: 1984,
            genre: Genre::SciFi,
        }
    }

    #[test]
    fn test_get_missing_message() {
        let err = service(StoreConfig::default()).get_book(9999).unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Book with ID 9999 not found"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_create_overwrites_by_default() {
        let books = service(StoreConfig::default());
        books.create_book(neuromancer(1)).unwrap();
        assert_eq!(books.get_book(1).unwrap().title, "Neuromancer");
        assert_eq!(books.count().unwrap(), 3);
    }

    #[test]
    fn test_create_rejects_duplicates() {
        let books = service(StoreConfig {
            on_duplicate_create: DuplicatePolicy::Reject,
            ..StoreConfig::default()
        });
        assert!(matches!(
            books.create_book(neuromancer(1)),
            Err(AppError::Conflict(_))
        ));
        assert_eq!(books.get_book(1).unwrap().title, "The Hobbit");
        assert_eq!(books.create_book(neuromancer(4)).unwrap().id, 4);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let books = service(StoreConfig::default());
        assert!(matches!(
            books.update_book(42, neuromancer(42)),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(books.count().unwrap(), 3);
    }

    #[test]
    fn test_update_missing_upserts_when_enabled() {
        let books = service(StoreConfig {
            upsert_on_update: true,
            ..StoreConfig::default()
        });
        let stored = books.update_book(42, neuromancer(7)).unwrap();
        assert_eq!(stored.id, 42);
        assert_eq!(books.get_book(42).unwrap(), stored);
        assert_eq!(books.list_books().unwrap().ids().last(), Some(42));
    }
}
