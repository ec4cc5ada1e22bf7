//! Record store adapter: a thin pass-through to the hosted database for the
//! two record kinds.
//!
//! `AppState` holds an `Arc<dyn RecordStore>`, picked at startup from config:
//! `PgRecordStore` when a connection string is available, `RestRecordStore`
//! when only the project's REST endpoint and key are.

#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod rest;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::db::create_pool;
use crate::models::icebreaker::{LinkedInIcebreaker, NewIcebreaker};
use crate::models::transcript::{NewTranscript, Transcript};
use crate::models::RecordKind;

pub use self::postgres::PgRecordStore;
pub use self::rest::RestRecordStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write record: {0}")]
    Write(String),

    #[error("Failed to read records: {0}")]
    Read(String),

    #[error("Failed to delete record: {0}")]
    Delete(String),

    #[error("{kind} not found")]
    NotFound { kind: RecordKind, id: i64 },
}

/// Offset/limit window applied to a newest-first listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

/// Per-kind insert / list / fetch-all / get / delete.
///
/// Listings are newest `created_at` first. Deletes succeed whether or not a
/// row matched.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_transcript(&self, new: &NewTranscript<'_>) -> Result<Transcript, StoreError>;
    async fn list_transcripts(&self, page: Page) -> Result<Vec<Transcript>, StoreError>;
    async fn all_transcripts(&self) -> Result<Vec<Transcript>, StoreError>;
    async fn get_transcript(&self, id: i64) -> Result<Transcript, StoreError>;
    async fn delete_transcript(&self, id: i64) -> Result<(), StoreError>;

    async fn insert_icebreaker(
        &self,
        new: &NewIcebreaker<'_>,
    ) -> Result<LinkedInIcebreaker, StoreError>;
    async fn list_icebreakers(&self, page: Page) -> Result<Vec<LinkedInIcebreaker>, StoreError>;
    async fn all_icebreakers(&self) -> Result<Vec<LinkedInIcebreaker>, StoreError>;
    async fn get_icebreaker(&self, id: i64) -> Result<LinkedInIcebreaker, StoreError>;
    async fn delete_icebreaker(&self, id: i64) -> Result<(), StoreError>;
}

/// Builds the configured store backend.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn RecordStore>> {
    Ok(match config {
        StoreConfig::Postgres { database_url } => {
            Arc::new(PgRecordStore::new(create_pool(database_url).await?))
        }
        StoreConfig::Rest {
            project_url,
            api_key,
        } => Arc::new(RestRecordStore::new(project_url, api_key.clone())?),
    })
}
