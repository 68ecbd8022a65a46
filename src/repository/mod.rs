//! Repository layer for the in-memory store

pub mod books;

/// Main repository struct holding the in-memory collections
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with an empty store
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
