use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored sales-call transcript and the analysis generated for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transcript {
    pub id: i64,
    pub company_name: String,
    pub attendees: String,
    pub date: NaiveDate,
    pub transcript: String,
    pub insight: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /transcripts.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTranscriptRequest {
    pub company_name: String,
    pub attendees: String,
    pub date: NaiveDate,
    pub transcript: String,
    pub custom_prompt: Option<String>,
}

/// Insert payload. `insight` must already be computed.
#[derive(Debug, Clone, Serialize)]
pub struct NewTranscript<'a> {
    pub company_name: &'a str,
    pub attendees: &'a str,
    pub date: NaiveDate,
    pub transcript: &'a str,
    pub insight: &'a str,
}
