//! Session store for drafts created from ideas

use super::models::Draft;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

pub struct DraftStore {
    drafts: RwLock<BTreeMap<i64, Draft>>,
    last_id: AtomicI64,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStore {
    pub fn new() -> Self {
        Self {
            drafts: RwLock::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
        }
    }

    /// Millisecond timestamp of `now`, bumped past the last issued id
    pub fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis();
        let previous = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(millis.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        millis.max(previous + 1)
    }

    pub async fn insert(&self, draft: Draft) {
        self.drafts.write().await.insert(draft.id, draft);
    }

    /// Apply `f` to a stored draft, returning the updated copy
    pub async fn modify<F>(&self, id: i64, f: F) -> Option<Draft>
    where
        F: FnOnce(&mut Draft),
    {
        let mut drafts = self.drafts.write().await;
        let draft = drafts.get_mut(&id)?;
        f(draft);
        Some(draft.clone())
    }

    pub async fn remove(&self, id: i64) -> Option<Draft> {
        self.drafts.write().await.remove(&id)
    }
}
