//! Book store: an ordered, in-memory map from id to book

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookCatalog},
};

/// Shared handle on the book map. Clones point at the same data.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<IndexMap<i64, Book>>>,
}

impl BooksRepository {
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let map = books.into_iter().map(|b| (b.id, b)).collect();
        Self {
            books: Arc::new(RwLock::new(map)),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, IndexMap<i64, Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, IndexMap<i64, Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// Insert a book under its id, replacing any previous record.
    /// Returns the replaced record, if any.
    pub fn add(&self, book: Book) -> AppResult<Option<Book>> {
        Ok(self.write()?.insert(book.id, book))
    }

    /// Insert a book only if its id is free
    pub fn try_add(&self, book: Book) -> AppResult<()> {
        let mut books = self.write()?;
        if books.contains_key(&book.id) {
            return Err(AppError::Conflict(format!(
                "Book with ID {} already exists",
                book.id
            )));
        }
        books.insert(book.id, book);
        Ok(())
    }

    /// Snapshot of all books in insertion order
    pub fn get_all(&self) -> AppResult<BookCatalog> {
        Ok(BookCatalog(self.read()?.clone()))
    }

    /// Look up a book by id. A missing id is `Ok(None)`, not an error.
    pub fn get(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Replace the book stored at `id`. Returns `None` when there is none.
    pub fn update(&self, id: i64, mut book: Book) -> AppResult<Option<Book>> {
        let mut books = self.write()?;
        match books.get_mut(&id) {
            Some(slot) => {
                book.id = id;
                *slot = book.clone();
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Replace the book stored at `id`, inserting it if absent
    pub fn upsert(&self, id: i64, mut book: Book) -> AppResult<Book> {
        book.id = id;
        self.write()?.insert(id, book.clone());
        Ok(book)
    }

    /// Number of stored books
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether the store holds no books
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
