//! In-process `RecordStore` used by handler and feed tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::icebreaker::{LinkedInIcebreaker, NewIcebreaker};
use crate::models::transcript::{NewTranscript, Transcript};
use crate::models::RecordKind;
use crate::store::{Page, RecordStore, StoreError};

#[derive(Default)]
struct Tables {
    transcripts: Vec<Transcript>,
    icebreakers: Vec<LinkedInIcebreaker>,
    next_transcript_id: i64,
    next_icebreaker_id: i64,
    ticks: i64,
}

impl Tables {
    /// One minute per insert from a fixed epoch, so ordering is deterministic.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(self.ticks)
    }
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            unavailable: false,
        }
    }

    /// A store whose every operation fails as if the database were unreachable.
    pub fn unavailable() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            unavailable: true,
        }
    }

    pub fn transcript_count(&self) -> usize {
        self.tables.lock().unwrap().transcripts.len()
    }

    pub fn icebreaker_count(&self) -> usize {
        self.tables.lock().unwrap().icebreakers.len()
    }

    fn check(&self, err: fn(String) -> StoreError) -> Result<(), StoreError> {
        if self.unavailable {
            Err(err("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn newest_first<T: Clone>(rows: &[T], created_at: fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut rows = rows.to_vec();
    rows.sort_by_key(|r| std::cmp::Reverse(created_at(r)));
    rows
}

fn window<T>(rows: Vec<T>, page: Page) -> Vec<T> {
    rows.into_iter().skip(page.offset).take(page.limit).collect()
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_transcript(&self, new: &NewTranscript<'_>) -> Result<Transcript, StoreError> {
        self.check(StoreError::Write)?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_transcript_id += 1;
        let row = Transcript {
            id: tables.next_transcript_id,
            company_name: new.company_name.to_string(),
            attendees: new.attendees.to_string(),
            date: new.date,
            transcript: new.transcript.to_string(),
            insight: new.insight.to_string(),
            created_at: tables.next_timestamp(),
        };
        tables.transcripts.push(row.clone());
        Ok(row)
    }

    async fn list_transcripts(&self, page: Page) -> Result<Vec<Transcript>, StoreError> {
        self.check(StoreError::Read)?;
        let tables = self.tables.lock().unwrap();
        Ok(window(newest_first(&tables.transcripts, |t| t.created_at), page))
    }

    async fn all_transcripts(&self) -> Result<Vec<Transcript>, StoreError> {
        self.check(StoreError::Read)?;
        let tables = self.tables.lock().unwrap();
        Ok(newest_first(&tables.transcripts, |t| t.created_at))
    }

    async fn get_transcript(&self, id: i64) -> Result<Transcript, StoreError> {
        self.check(StoreError::Read)?;
        let tables = self.tables.lock().unwrap();
        tables
            .transcripts
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: RecordKind::Transcript,
                id,
            })
    }

    async fn delete_transcript(&self, id: i64) -> Result<(), StoreError> {
        self.check(StoreError::Delete)?;
        self.tables.lock().unwrap().transcripts.retain(|t| t.id != id);
        Ok(())
    }

    async fn insert_icebreaker(
        &self,
        new: &NewIcebreaker<'_>,
    ) -> Result<LinkedInIcebreaker, StoreError> {
        self.check(StoreError::Write)?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_icebreaker_id += 1;
        let row = LinkedInIcebreaker {
            id: tables.next_icebreaker_id,
            prospect_name: new.prospect_name.to_string(),
            company_name: new.company_name.to_string(),
            linkedin_bio: new.linkedin_bio.to_string(),
            pitch_deck: new.pitch_deck.to_string(),
            role_level: new.role_level.to_string(),
            icebreaker_analysis: new.icebreaker_analysis.to_string(),
            created_at: tables.next_timestamp(),
        };
        tables.icebreakers.push(row.clone());
        Ok(row)
    }

    async fn list_icebreakers(&self, page: Page) -> Result<Vec<LinkedInIcebreaker>, StoreError> {
        self.check(StoreError::Read)?;
        let tables = self.tables.lock().unwrap();
        Ok(window(newest_first(&tables.icebreakers, |i| i.created_at), page))
    }

    async fn all_icebreakers(&self) -> Result<Vec<LinkedInIcebreaker>, StoreError> {
        self.check(StoreError::Read)?;
        let tables = self.tables.lock().unwrap();
        Ok(newest_first(&tables.icebreakers, |i| i.created_at))
    }

    async fn get_icebreaker(&self, id: i64) -> Result<LinkedInIcebreaker, StoreError> {
        self.check(StoreError::Read)?;
        let tables = self.tables.lock().unwrap();
        tables
            .icebreakers
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: RecordKind::LinkedInIcebreaker,
                id,
            })
    }

    async fn delete_icebreaker(&self, id: i64) -> Result<(), StoreError> {
        self.check(StoreError::Delete)?;
        self.tables.lock().unwrap().icebreakers.retain(|i| i.id != id);
        Ok(())
    }
}
