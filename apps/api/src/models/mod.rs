pub mod icebreaker;
pub mod transcript;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use self::icebreaker::LinkedInIcebreaker;
use self::transcript::Transcript;

/// The two independent record kinds the service stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Transcript,
    LinkedInIcebreaker,
}

impl RecordKind {
    pub fn table(self) -> &'static str {
        match self {
            RecordKind::Transcript => "transcripts",
            RecordKind::LinkedInIcebreaker => "linkedin_icebreakers",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Transcript => write!(f, "Transcript"),
            RecordKind::LinkedInIcebreaker => write!(f, "LinkedIn icebreaker"),
        }
    }
}

/// A record tagged with its `content_type` discriminator.
///
/// Every read endpoint returns records in this shape, so the tag is always
/// computed at read time and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum FeedItem {
    Transcript(Transcript),
    LinkedinIcebreaker(LinkedInIcebreaker),
}

impl FeedItem {
    pub fn kind(&self) -> RecordKind {
        match self {
            FeedItem::Transcript(_) => RecordKind::Transcript,
            FeedItem::LinkedinIcebreaker(_) => RecordKind::LinkedInIcebreaker,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            FeedItem::Transcript(t) => t.created_at,
            FeedItem::LinkedinIcebreaker(i) => i.created_at,
        }
    }
}

impl From<Transcript> for FeedItem {
    fn from(t: Transcript) -> Self {
        FeedItem::Transcript(t)
    }
}

impl From<LinkedInIcebreaker> for FeedItem {
    fn from(i: LinkedInIcebreaker) -> Self {
        FeedItem::LinkedinIcebreaker(i)
    }
}
