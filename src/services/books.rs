//! Bookshelf management service
//!
//! Validation and `finished` derivation live here; the repository only sees
//! the validated write set.

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookFilter, BookId, BookPayload, BookSummary, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

/// Record counts reported by the stats endpoint
#[derive(Debug, Clone, Copy)]
pub struct BookCounts {
    pub total: usize,
    pub reading: usize,
    pub finished: usize,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and store a new book, returning the assigned id
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<BookId> {
        let new = validate(payload, "Failed to add book")?;
        match self.repository.books.insert(new).await {
            Some(id) => {
                tracing::debug!("Book added with id={}", id);
                Ok(id)
            }
            None => Err(AppError::InsertFailure("Failed to add book".to_string())),
        }
    }

    /// List books matching the filter, as summary projections
    pub async fn list_books(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.repository.books.list(filter).await
    }

    /// Get the full record by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Validate and replace all mutable fields of an existing book
    pub async fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        let new = validate(payload, "Failed to update book")?;
        if self.repository.books.update(id, new).await {
            Ok(())
        } else {
            Err(AppError::NotFound(
                "Failed to update book. Id not found".to_string(),
            ))
        }
    }

    /// Remove a book by id
    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        if self.repository.books.delete(id).await {
            Ok(())
        } else {
            Err(AppError::NotFound(
                "Failed to delete book. Id not found".to_string(),
            ))
        }
    }

    /// Record counts for the stats endpoint
    pub async fn stats(&self) -> BookCounts {
        let (total, reading, finished) = self.repository.books.counts().await;
        BookCounts {
            total,
            reading,
            finished,
        }
    }
}

/// Shared create/update validation.
///
/// `context` prefixes the failure messages so create and update report the
/// operation that was attempted. On success the derived `finished` flag is
/// fixed for this write.
fn validate(payload: BookPayload, context: &str) -> AppResult<NewBook> {
    let name = match payload.name {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::MissingName(format!(
                "{}. Please fill in the book name",
                context
            )))
        }
    };

    if payload.read_page > payload.page_count {
        return Err(AppError::ReadPageExceedsPageCount(format!(
            "{}. readPage must not be greater than pageCount",
            context
        )));
    }

    Ok(NewBook {
        name,
        year: payload.year,
        author: payload.author,
        summary: payload.summary,
        publisher: payload.publisher,
        page_count: payload.page_count,
        read_page: payload.read_page,
        finished: payload.read_page == payload.page_count,
        reading: payload.reading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, page_count: u32, read_page: u32) -> BookPayload {
        BookPayload {
            name: name.map(String::from),
            page_count,
            read_page,
            ..BookPayload::default()
        }
    }

    #[test]
    fn absent_name_is_rejected() {
        let err = validate(payload(None, 10, 0), "Failed to add book").unwrap_err();
        assert!(matches!(err, AppError::MissingName(_)));
        assert_eq!(
            err.to_string(),
            "Failed to add book. Please fill in the book name"
        );
    }

    #[test]
    fn empty_name_is_rejected_like_absent() {
        let err = validate(payload(Some(""), 10, 0), "Failed to update book").unwrap_err();
        assert!(matches!(err, AppError::MissingName(_)));
        assert!(err.to_string().starts_with("Failed to update book"));
    }

    #[test]
    fn read_page_beyond_page_count_is_rejected() {
        let err = validate(payload(Some("A"), 10, 11), "Failed to add book").unwrap_err();
        assert!(matches!(err, AppError::ReadPageExceedsPageCount(_)));
    }

    #[test]
    fn finished_is_derived_from_the_counters() {
        let done = validate(payload(Some("A"), 10, 10), "Failed to add book").unwrap();
        assert!(done.finished);

        let in_progress = validate(payload(Some("B"), 10, 9), "Failed to add book").unwrap();
        assert!(!in_progress.finished);
    }

    #[tokio::test]
    async fn update_unknown_id_reports_not_found() {
        let service = BooksService::new(Repository::new());
        let err = service
            .update_book("missing", payload(Some("A"), 10, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Failed to update book. Id not found");
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_not_found() {
        let service = BooksService::new(Repository::new());
        let err = service.delete_book("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete book. Id not found");
    }
}
