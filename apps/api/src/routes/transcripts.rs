use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::analysis::AnalysisRequest;
use crate::errors::AppError;
use crate::models::transcript::{CreateTranscriptRequest, NewTranscript};
use crate::models::FeedItem;
use crate::routes::PageQuery;
use crate::state::AppState;
use crate::validation::validate_transcript;

const DEFAULT_LIMIT: usize = 10;

/// POST /transcripts
///
/// Validates, analyzes, then persists. Analysis happens before the insert;
/// if the insert fails the analysis is discarded.
pub async fn handle_create_transcript(
    State(state): State<AppState>,
    Json(req): Json<CreateTranscriptRequest>,
) -> Result<Json<FeedItem>, AppError> {
    validate_transcript(&req)?;

    let insight = state
        .analysis
        .analyze(&AnalysisRequest::Transcript {
            transcript: &req.transcript,
            custom_prompt: req.custom_prompt.as_deref(),
        })
        .await;

    let stored = state
        .store
        .insert_transcript(&NewTranscript {
            company_name: &req.company_name,
            attendees: &req.attendees,
            date: req.date,
            transcript: &req.transcript,
            insight: &insight,
        })
        .await?;

    info!("Created transcript {} for {}", stored.id, stored.company_name);
    Ok(Json(stored.into()))
}

/// GET /transcripts?limit&offset
pub async fn handle_list_transcripts(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<Vec<FeedItem>>, AppError> {
    let rows = state
        .store
        .list_transcripts(params.page(DEFAULT_LIMIT))
        .await?;
    Ok(Json(rows.into_iter().map(FeedItem::from).collect()))
}

/// GET /transcripts/:id
pub async fn handle_get_transcript(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FeedItem>, AppError> {
    let row = state.store.get_transcript(id).await?;
    Ok(Json(row.into()))
}

/// DELETE /transcripts/:id
///
/// Reports success whether or not a record existed.
pub async fn handle_delete_transcript(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state.store.delete_transcript(id).await?;
    info!("Deleted transcript {id}");
    Ok(Json(json!({ "message": "Transcript deleted successfully" })))
}
