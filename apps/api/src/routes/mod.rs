pub mod feed;
pub mod health;
pub mod icebreakers;
pub mod transcripts;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::state::AppState;
use crate::store::Page;

/// `?limit&offset` query. Defaults differ per endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl PageQuery {
    pub fn page(&self, default_limit: usize) -> Page {
        Page::new(
            self.limit.unwrap_or(default_limit),
            self.offset.unwrap_or(0),
        )
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/transcripts",
            get(transcripts::handle_list_transcripts).post(transcripts::handle_create_transcript),
        )
        .route(
            "/transcripts/:id",
            get(transcripts::handle_get_transcript).delete(transcripts::handle_delete_transcript),
        )
        .route(
            "/linkedin-icebreakers",
            get(icebreakers::handle_list_icebreakers).post(icebreakers::handle_create_icebreaker),
        )
        .route(
            "/linkedin-icebreakers/:id",
            get(icebreakers::handle_get_icebreaker).delete(icebreakers::handle_delete_icebreaker),
        )
        .route("/feed", get(feed::handle_feed))
        .with_state(state)
}

/// Credentialed CORS for a fixed origin allow-list; methods and headers are
/// mirrored from the request.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
