use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::icebreaker::{LinkedInIcebreaker, NewIcebreaker};
use crate::models::transcript::{NewTranscript, Transcript};
use crate::models::RecordKind;
use crate::store::{Page, RecordStore, StoreError};

/// Direct SQL access to the hosted Postgres database.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_by_id(&self, kind: RecordKind, id: i64) -> Result<(), StoreError> {
        // Table names come from RecordKind, never from user input.
        let sql = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Delete(e.to_string()))?;

        debug!(
            "Deleted {} row(s) from {} for id {id}",
            result.rows_affected(),
            kind.table()
        );
        Ok(())
    }
}

/// LIMIT/OFFSET bind value; saturates instead of wrapping negative.
fn sql_bound(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn read_err(e: sqlx::Error) -> StoreError {
    StoreError::Read(e.to_string())
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_transcript(&self, new: &NewTranscript<'_>) -> Result<Transcript, StoreError> {
        sqlx::query_as::<_, Transcript>(
            r#"
            INSERT INTO transcripts (company_name, attendees, date, transcript, insight)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.company_name)
        .bind(new.attendees)
        .bind(new.date)
        .bind(new.transcript)
        .bind(new.insight)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn list_transcripts(&self, page: Page) -> Result<Vec<Transcript>, StoreError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Transcript>(
            "SELECT * FROM transcripts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(sql_bound(page.limit))
        .bind(sql_bound(page.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    async fn all_transcripts(&self) -> Result<Vec<Transcript>, StoreError> {
        sqlx::query_as::<_, Transcript>("SELECT * FROM transcripts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(read_err)
    }

    async fn get_transcript(&self, id: i64) -> Result<Transcript, StoreError> {
        sqlx::query_as::<_, Transcript>("SELECT * FROM transcripts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_err)?
            .ok_or(StoreError::NotFound {
                kind: RecordKind::Transcript,
                id,
            })
    }

    async fn delete_transcript(&self, id: i64) -> Result<(), StoreError> {
        self.delete_by_id(RecordKind::Transcript, id).await
    }

    async fn insert_icebreaker(
        &self,
        new: &NewIcebreaker<'_>,
    ) -> Result<LinkedInIcebreaker, StoreError> {
        sqlx::query_as::<_, LinkedInIcebreaker>(
            r#"
            INSERT INTO linkedin_icebreakers
                (prospect_name, company_name, linkedin_bio, pitch_deck, role_level, icebreaker_analysis)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.prospect_name)
        .bind(new.company_name)
        .bind(new.linkedin_bio)
        .bind(new.pitch_deck)
        .bind(new.role_level)
        .bind(new.icebreaker_analysis)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn list_icebreakers(&self, page: Page) -> Result<Vec<LinkedInIcebreaker>, StoreError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, LinkedInIcebreaker>(
            "SELECT * FROM linkedin_icebreakers ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(sql_bound(page.limit))
        .bind(sql_bound(page.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    async fn all_icebreakers(&self) -> Result<Vec<LinkedInIcebreaker>, StoreError> {
        sqlx::query_as::<_, LinkedInIcebreaker>(
            "SELECT * FROM linkedin_icebreakers ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    async fn get_icebreaker(&self, id: i64) -> Result<LinkedInIcebreaker, StoreError> {
        sqlx::query_as::<_, LinkedInIcebreaker>("SELECT * FROM linkedin_icebreakers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_err)?
            .ok_or(StoreError::NotFound {
                kind: RecordKind::LinkedInIcebreaker,
                id,
            })
    }

    async fn delete_icebreaker(&self, id: i64) -> Result<(), StoreError> {
        self.delete_by_id(RecordKind::LinkedInIcebreaker, id).await
    }
}
