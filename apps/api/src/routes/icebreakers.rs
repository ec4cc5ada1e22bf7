use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::analysis::{AnalysisRequest, ProfileInput};
use crate::errors::AppError;
use crate::models::icebreaker::{CreateIcebreakerRequest, NewIcebreaker};
use crate::models::FeedItem;
use crate::routes::PageQuery;
use crate::state::AppState;
use crate::validation::validate_icebreaker;

const DEFAULT_LIMIT: usize = 10;

/// POST /linkedin-icebreakers
pub async fn handle_create_icebreaker(
    State(state): State<AppState>,
    Json(req): Json<CreateIcebreakerRequest>,
) -> Result<Json<FeedItem>, AppError> {
    validate_icebreaker(&req)?;

    let analysis = state
        .analysis
        .analyze(&AnalysisRequest::Profile(ProfileInput {
            prospect_name: &req.prospect_name,
            company_name: &req.company_name,
            linkedin_bio: &req.linkedin_bio,
            pitch_deck: &req.pitch_deck,
            role_level: &req.role_level,
            custom_prompt: req.custom_prompt.as_deref(),
        }))
        .await;

    let stored = state
        .store
        .insert_icebreaker(&NewIcebreaker {
            prospect_name: &req.prospect_name,
            company_name: &req.company_name,
            linkedin_bio: &req.linkedin_bio,
            pitch_deck: &req.pitch_deck,
            role_level: &req.role_level,
            icebreaker_analysis: &analysis,
        })
        .await?;

    info!(
        "Created icebreaker {} for {} at {}",
        stored.id, stored.prospect_name, stored.company_name
    );
    Ok(Json(stored.into()))
}

/// GET /linkedin-icebreakers?limit&offset
pub async fn handle_list_icebreakers(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<Vec<FeedItem>>, AppError> {
    let rows = state
        .store
        .list_icebreakers(params.page(DEFAULT_LIMIT))
        .await?;
    Ok(Json(rows.into_iter().map(FeedItem::from).collect()))
}

/// GET /linkedin-icebreakers/:id
pub async fn handle_get_icebreaker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FeedItem>, AppError> {
    let row = state.store.get_icebreaker(id).await?;
    Ok(Json(row.into()))
}

/// DELETE /linkedin-icebreakers/:id
pub async fn handle_delete_icebreaker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state.store.delete_icebreaker(id).await?;
    info!("Deleted icebreaker {id}");
    Ok(Json(
        json!({ "message": "LinkedIn icebreaker deleted successfully" }),
    ))
}
