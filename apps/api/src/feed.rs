//! Feed Merger: one newest-first stream over both record kinds.
//!
//! Both kinds are fetched in full, tagged, concatenated (transcripts first),
//! stable-sorted by `created_at` descending and then windowed in memory. The
//! store cannot paginate the two tables jointly, so the window is always
//! applied after the merge.

use async_trait::async_trait;

use crate::models::{FeedItem, RecordKind};
use crate::store::{Page, RecordStore, StoreError};

/// Anything that can hand over every record of a kind, newest first.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_all(&self, kind: RecordKind) -> Result<Vec<FeedItem>, StoreError>;
}

/// Feeds straight from a `RecordStore`.
pub struct StoreFeed<'a>(pub &'a dyn RecordStore);

#[async_trait]
impl FeedSource for StoreFeed<'_> {
    async fn fetch_all(&self, kind: RecordKind) -> Result<Vec<FeedItem>, StoreError> {
        Ok(match kind {
            RecordKind::Transcript => self
                .0
                .all_transcripts()
                .await?
                .into_iter()
                .map(FeedItem::from)
                .collect(),
            RecordKind::LinkedInIcebreaker => self
                .0
                .all_icebreakers()
                .await?
                .into_iter()
                .map(FeedItem::from)
                .collect(),
        })
    }
}

/// Fetches both kinds from `source` and returns the requested window.
pub async fn build_feed<S: FeedSource + ?Sized>(
    source: &S,
    page: Page,
) -> Result<Vec<FeedItem>, StoreError> {
    let transcripts = source.fetch_all(RecordKind::Transcript).await?;
    let icebreakers = source.fetch_all(RecordKind::LinkedInIcebreaker).await?;
    Ok(merge_feed(transcripts, icebreakers, page))
}

/// Concatenates, sorts newest first (ties keep input order) and slices.
pub fn merge_feed(
    transcripts: Vec<FeedItem>,
    icebreakers: Vec<FeedItem>,
    page: Page,
) -> Vec<FeedItem> {
    let mut combined = transcripts;
    combined.extend(icebreakers);
    // sort_by is stable
    combined.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    combined
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect()
}
