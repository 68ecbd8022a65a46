//! In-memory book store.
//!
//! Owner of the ordered record sequence and of everything the store assigns
//! itself: ids and timestamps. Records are kept in insertion order, which is
//! the default listing order. The `RwLock` makes each operation a single
//! atomic step; a read never observes a partially-applied write.

use std::sync::Arc;

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::RwLock;

use crate::models::{Book, BookFilter, BookId, BookSummary, NewBook};

/// Length of generated book ids
const ID_LENGTH: usize = 16;

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record, assigning id and timestamps.
    ///
    /// Returns `None` when the generated id collides with an existing record;
    /// the store is left unchanged in that case.
    pub async fn insert(&self, new: NewBook) -> Option<BookId> {
        let mut books = self.books.write().await;

        let id = generate_id();
        if books.iter().any(|b| b.id == id) {
            return None;
        }

        let now = Utc::now();
        books.push(Book {
            id: id.clone(),
            name: new.name,
            year: new.year,
            author: new.author,
            summary: new.summary,
            publisher: new.publisher,
            page_count: new.page_count,
            read_page: new.read_page,
            finished: new.finished,
            reading: new.reading,
            inserted_at: now,
            updated_at: now,
        });

        Some(id)
    }

    /// List records matching the filter, projected to the summary view
    pub async fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        let books = self.books.read().await;
        books
            .iter()
            .filter(|b| filter.matches(b))
            .map(BookSummary::from)
            .collect()
    }

    /// Get the full record by id
    pub async fn get(&self, id: &str) -> Option<Book> {
        let books = self.books.read().await;
        books.iter().find(|b| b.id == id).cloned()
    }

    /// Replace all mutable fields of the record with the given id, refreshing
    /// `updated_at` and preserving `id` and `inserted_at`.
    ///
    /// Returns false when no record has that id.
    pub async fn update(&self, id: &str, new: NewBook) -> bool {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.name = new.name;
                book.year = new.year;
                book.author = new.author;
                book.summary = new.summary;
                book.publisher = new.publisher;
                book.page_count = new.page_count;
                book.read_page = new.read_page;
                book.finished = new.finished;
                book.reading = new.reading;
                book.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Returns false when absent.
    pub async fn delete(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of stored records, total and by flag
    pub async fn counts(&self) -> (usize, usize, usize) {
        let books = self.books.read().await;
        let reading = books.iter().filter(|b| b.reading).count();
        let finished = books.iter().filter(|b| b.finished).count();
        (books.len(), reading, finished)
    }
}

/// Random 16-character alphanumeric id, collision-resistant within one
/// store's lifetime
fn generate_id() -> BookId {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}
