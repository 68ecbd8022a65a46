//! Book record model and related wire types.
//!
//! The wire format uses camelCase field names (`pageCount`, `insertedAt`, ...);
//! internal field names are snake_case with serde renames on the structs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Opaque unique book identifier, generated by the store at creation time
pub type BookId = String;

/// A stored book record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Derived: true iff `read_page == page_count` at the last write
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for create and update requests.
///
/// Every field is optional on the wire; `name` presence is enforced by the
/// service, the counters default to zero.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// Validated write set produced by the service, consumed by the repository.
///
/// Carries everything a record holds except what the store assigns itself
/// (`id`, `inserted_at`, `updated_at`).
#[derive(Debug, Clone)]
pub struct NewBook {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
}

/// Reduced projection returned by listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// List query filter.
///
/// `reading` and `finished` arrive as raw strings because only the literal
/// values "0" and "1" select by flag; anything else matches all records.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BookFilter {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl BookFilter {
    /// Whether a record passes the filter.
    ///
    /// At most one dimension applies per call, with short-circuit precedence
    /// name > reading > finished > none: a query supplying both `name` and
    /// `reading` filters by `name` alone. Empty-string values count as
    /// absent and fall through to the next dimension.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(name) = non_empty(&self.name) {
            return book.name.to_lowercase().contains(&name.to_lowercase());
        }

        if let Some(reading) = non_empty(&self.reading) {
            return match reading {
                "1" => book.reading,
                "0" => !book.reading,
                _ => true,
            };
        }

        if let Some(finished) = non_empty(&self.finished) {
            return match finished {
                "1" => book.finished,
                "0" => !book.finished,
                _ => true,
            };
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
