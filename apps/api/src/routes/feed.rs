use axum::{
    extract::{Query, State},
    Json,
};

use tracing::debug;

use crate::errors::AppError;
use crate::feed::{build_feed, StoreFeed};
use crate::models::{FeedItem, RecordKind};
use crate::routes::PageQuery;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 20;

/// GET /feed?limit&offset
///
/// Transcripts and icebreakers merged newest first.
pub async fn handle_feed(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<Vec<FeedItem>>, AppError> {
    let items = build_feed(&StoreFeed(state.store.as_ref()), params.page(DEFAULT_LIMIT)).await?;
    let transcripts = items
        .iter()
        .filter(|i| i.kind() == RecordKind::Transcript)
        .count();
    debug!(
        "Feed window: {} transcripts, {} icebreakers",
        transcripts,
        items.len() - transcripts
    );
    Ok(Json(items))
}
