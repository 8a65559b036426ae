// Application state management
// Contains the book registry and the operations handlers run against it

use crate::state::seed;
use serde::{Deserialize, Serialize};

/// A single book record
///
/// The title doubles as the lookup key, compared case-insensitively.
/// Nothing enforces title uniqueness or non-empty fields; the registry
/// stores whatever the caller sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Title of the book (case-insensitive identity key)
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Category the book is shelved under
    pub category: String,
}

/// Case-folded string equality used for all title comparisons
fn casefold_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Main application state
///
/// Owns the registry: an ordered sequence of books where sequence order is
/// insertion order. Handlers share it behind `Arc<RwLock<AppState>>`; each
/// operation holds the lock for its full duration, so operations are atomic
/// with respect to each other.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The book registry, in insertion order
    pub books: Vec<Book>,
}

impl AppState {
    /// Create the application state with the registry seeded from the
    /// startup catalog
    pub fn with_seed() -> Self {
        Self {
            books: seed::seed_books(),
        }
    }

    /// Get all books in the registry, in current order
    pub fn books_list(&self) -> &[Book] {
        &self.books
    }

    /// Find the first book whose title matches case-insensitively
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| casefold_eq(&b.title, title))
    }

    /// Append a book to the registry
    ///
    /// No constraint checking: duplicate titles and empty fields are accepted.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Replace the first case-insensitive title match wholesale
    ///
    /// The stored record becomes exactly the given book; there is no
    /// field-by-field merge. Returns true if a replacement happened.
    pub fn replace_book(&mut self, book: Book) -> bool {
        match self
            .books
            .iter_mut()
            .find(|b| casefold_eq(&b.title, &book.title))
        {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    /// Remove the first case-insensitive title match
    ///
    /// Scans the full sequence and returns the removed book if one matched.
    /// Entries after the removed one shift up; their relative order is kept.
    pub fn remove_book(&mut self, title: &str) -> Option<Book> {
        let index = self
            .books
            .iter()
            .position(|b| casefold_eq(&b.title, title))?;
        Some(self.books.remove(index))
    }
}
