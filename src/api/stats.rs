//! Statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub books: BookStats,
}

#[derive(Serialize, ToSchema)]
pub struct BookStats {
    /// Total number of stored records
    pub total: usize,
    /// Records currently marked as being read
    pub reading: usize,
    /// Records whose readPage equals pageCount
    pub finished: usize,
}

/// Record counts for the whole store
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Store statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> Json<StatsResponse> {
    let counts = state.services.books.stats().await;

    Json(StatsResponse {
        books: BookStats {
            total: counts.total,
            reading: counts.reading,
            finished: counts.finished,
        },
    })
}
