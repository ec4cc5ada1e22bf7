use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::icebreaker::{LinkedInIcebreaker, NewIcebreaker};
use crate::models::transcript::{NewTranscript, Transcript};
use crate::models::RecordKind;
use crate::store::{Page, RecordStore, StoreError};

/// Record store backed by the hosted project's PostgREST endpoint
/// (`{project_url}/rest/v1/{table}`).
#[derive(Clone)]
pub struct RestRecordStore {
    client: Client,
    project_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

impl RestRecordStore {
    pub fn new(project_url: &str, api_key: String) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .context("Failed to build HTTP client for record store")?,
            project_url: project_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn request(&self, method: Method, kind: RecordKind) -> RequestBuilder {
        self.client
            .request(
                method,
                format!("{}/rest/v1/{}", self.project_url, kind.table()),
            )
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn insert<T, R>(&self, kind: RecordKind, row: &T) -> Result<R, StoreError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, kind)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        let response = check_status(response).await.map_err(StoreError::Write)?;

        let mut rows: Vec<R> = response
            .json()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        if rows.is_empty() {
            return Err(StoreError::Write(format!(
                "insert into {} returned no rows",
                kind.table()
            )));
        }
        Ok(rows.swap_remove(0))
    }

    async fn select<R: DeserializeOwned>(
        &self,
        kind: RecordKind,
        query: &[(&str, String)],
    ) -> Result<Vec<R>, StoreError> {
        let response = self
            .request(Method::GET, kind)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;
        let response = check_status(response).await.map_err(StoreError::Read)?;

        response
            .json()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    async fn list<R: DeserializeOwned>(
        &self,
        kind: RecordKind,
        page: Page,
    ) -> Result<Vec<R>, StoreError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        self.select(
            kind,
            &[
                ("order", "created_at.desc".to_string()),
                ("offset", page.offset.to_string()),
                ("limit", page.limit.to_string()),
            ],
        )
        .await
    }

    async fn all<R: DeserializeOwned>(&self, kind: RecordKind) -> Result<Vec<R>, StoreError> {
        self.select(kind, &[("order", "created_at.desc".to_string())])
            .await
    }

    async fn get<R: DeserializeOwned>(&self, kind: RecordKind, id: i64) -> Result<R, StoreError> {
        self.select(kind, &[("id", format!("eq.{id}"))])
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound { kind, id })
    }

    async fn delete(&self, kind: RecordKind, id: i64) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, kind)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| StoreError::Delete(e.to_string()))?;
        check_status(response).await.map_err(StoreError::Delete)?;

        debug!("Delete issued on {} for id {id}", kind.table());
        Ok(())
    }
}

/// Passes successful responses through; otherwise returns the PostgREST
/// `message` if the body carries one, else the raw body.
async fn check_status(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<PostgrestError>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    Err(format!("status {}: {}", status.as_u16(), message))
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn insert_transcript(&self, new: &NewTranscript<'_>) -> Result<Transcript, StoreError> {
        self.insert(RecordKind::Transcript, new).await
    }

    async fn list_transcripts(&self, page: Page) -> Result<Vec<Transcript>, StoreError> {
        self.list(RecordKind::Transcript, page).await
    }

    async fn all_transcripts(&self) -> Result<Vec<Transcript>, StoreError> {
        self.all(RecordKind::Transcript).await
    }

    async fn get_transcript(&self, id: i64) -> Result<Transcript, StoreError> {
        self.get(RecordKind::Transcript, id).await
    }

    async fn delete_transcript(&self, id: i64) -> Result<(), StoreError> {
        self.delete(RecordKind::Transcript, id).await
    }

    async fn insert_icebreaker(
        &self,
        new: &NewIcebreaker<'_>,
    ) -> Result<LinkedInIcebreaker, StoreError> {
        self.insert(RecordKind::LinkedInIcebreaker, new).await
    }

    async fn list_icebreakers(&self, page: Page) -> Result<Vec<LinkedInIcebreaker>, StoreError> {
        self.list(RecordKind::LinkedInIcebreaker, page).await
    }

    async fn all_icebreakers(&self) -> Result<Vec<LinkedInIcebreaker>, StoreError> {
        self.all(RecordKind::LinkedInIcebreaker).await
    }

    async fn get_icebreaker(&self, id: i64) -> Result<LinkedInIcebreaker, StoreError> {
        self.get(RecordKind::LinkedInIcebreaker, id).await
    }

    async fn delete_icebreaker(&self, id: i64) -> Result<(), StoreError> {
        self.delete(RecordKind::LinkedInIcebreaker, id).await
    }
}
