//! In-memory memo of classifier answers.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::analysis::SentimentLabel;

#[derive(Debug, Clone, Copy)]
struct CachedLabel {
    label: SentimentLabel,
    cached_at: DateTime<Utc>,
}

/// Caches labels per text for a fixed time-to-live.
///
/// Lives only as long as the dashboard that owns it; nothing is persisted.
#[derive(Debug)]
pub struct ClassificationCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedLabel>>,
}

impl ClassificationCache {
    /// Create a cache whose entries expire after `ttl_hours`.
    #[must_use]
    pub fn new(ttl_hours: u64) -> Self {
        let hours = i64::try_from(ttl_hours).unwrap_or(i64::MAX);
        Self {
            ttl: Duration::try_hours(hours).unwrap_or(Duration::MAX),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached label for `text`, if present and not expired.
    pub fn get(&self, text: &str) -> Option<SentimentLabel> {
        self.get_at(text, Utc::now())
    }

    /// Remember the label for `text`.
    pub fn insert(&self, text: &str, label: SentimentLabel) {
        self.insert_at(text, label, Utc::now());
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, cached| !self.is_expired(cached, now));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, "Purged expired classification cache entries");
        }
        removed
    }

    fn get_at(&self, text: &str, now: DateTime<Utc>) -> Option<SentimentLabel> {
        let entries = self.lock();
        let cached = entries.get(text)?;
        if self.is_expired(cached, now) {
            tracing::debug!("Classification cache entry expired");
            return None;
        }
        Some(cached.label)
    }

    fn insert_at(&self, text: &str, label: SentimentLabel, now: DateTime<Utc>) {
        self.lock().insert(
            text.to_string(),
            CachedLabel {
                label,
                cached_at: now,
            },
        );
    }

    fn is_expired(&self, cached: &CachedLabel, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(cached.cached_at) >= self.ttl
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CachedLabel>> {
        // a poisoned map is still a valid map
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_and_miss() {
        let cache = ClassificationCache::new(24);
        assert!(cache.is_empty());
        assert_eq!(cache.get("post"), None);

        cache.insert("post", SentimentLabel::Negative);
        assert_eq!(cache.get("post"), Some(SentimentLabel::Negative));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_entries_expire() {
        let cache = ClassificationCache::new(1);
        let then = Utc::now() - Duration::hours(2);
        cache.insert_at("old post", SentimentLabel::Positive, then);

        assert_eq!(cache.get_at("old post", then), Some(SentimentLabel::Positive));
        assert_eq!(cache.get("old post"), None);
        assert_eq!(cache.purge_expired(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache = ClassificationCache::new(0);
        cache.insert("post", SentimentLabel::Positive);
        assert_eq!(cache.get("post"), None);
    }
}
