//! Aggregations over a batch of post records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::HashMap;

use super::labels::SentimentLabel;
use super::records::PostRecord;

/// Default number of hashtags returned by [`top_hashtags`].
pub const DEFAULT_TOP_HASHTAGS: usize = 10;

/// Raw POSITIVE/NEGATIVE counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SentimentCounts {
    /// Number of POSITIVE labels.
    pub positive: usize,
    /// Number of NEGATIVE labels.
    pub negative: usize,
}

impl SentimentCounts {
    /// Count one occurrence of `label`.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    /// Count for a single label.
    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Share of each label in a batch, as percentages rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SentimentDistribution {
    /// Percentage of POSITIVE labels (0-100).
    pub positive: f64,
    /// Percentage of NEGATIVE labels (0-100).
    pub negative: f64,
}

impl SentimentDistribution {
    /// Percentage for a single label.
    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
        }
    }
}

/// Per-hashtag sentiment counts, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashtagSentimentTally {
    order: Vec<String>,
    counts: HashMap<String, SentimentCounts>,
}

impl HashtagSentimentTally {
    /// Counts for a hashtag, if it was observed.
    #[must_use]
    pub fn get(&self, hashtag: &str) -> Option<&SentimentCounts> {
        self.counts.get(hashtag)
    }

    /// Iterate over `(hashtag, counts)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SentimentCounts)> {
        self.order
            .iter()
            .filter_map(|tag| self.counts.get(tag).map(|c| (tag.as_str(), c)))
    }

    /// Number of distinct hashtags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no hashtag was observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn record(&mut self, hashtag: &str, label: SentimentLabel) {
        if !self.counts.contains_key(hashtag) {
            self.order.push(hashtag.to_string());
        }
        self.counts
            .entry(hashtag.to_string())
            .or_default()
            .record(label);
    }
}

impl Serialize for HashtagSentimentTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (tag, counts) in self.iter() {
            map.serialize_entry(tag, counts)?;
        }
        map.end()
    }
}

/// Most frequent hashtags across all records, at most `n` of them.
///
/// Every occurrence counts, including repeats within one post. Ties keep the
/// order in which the hashtags were first seen.
pub fn top_hashtags(records: &[PostRecord], n: usize) -> Vec<(String, usize)> {
    let mut counted: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in records.iter().flat_map(PostRecord::hashtags) {
        match index.get(tag.as_str()) {
            Some(&i) => counted[i].1 += 1,
            None => {
                index.insert(tag.as_str(), counted.len());
                counted.push((tag.clone(), 1));
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(n);
    counted
}

/// POSITIVE/NEGATIVE counts for every hashtag occurrence in the batch.
pub fn sentiment_by_hashtag(records: &[PostRecord]) -> HashtagSentimentTally {
    let mut tally = HashtagSentimentTally::default();
    for record in records {
        for tag in record.hashtags() {
            tally.record(tag, record.sentiment);
        }
    }
    tally
}

/// Raw label counts.
pub fn sentiment_counts(labels: &[SentimentLabel]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for &label in labels {
        counts.record(label);
    }
    counts
}

/// Percentage of each label, rounded to two decimals.
///
/// An empty batch yields 0.0 for both labels.
pub fn sentiment_distribution(labels: &[SentimentLabel]) -> SentimentDistribution {
    let total = labels.len();
    if total == 0 {
        return SentimentDistribution::default();
    }

    let counts = sentiment_counts(labels);
    SentimentDistribution {
        positive: percentage(counts.positive, total),
        negative: percentage(counts.negative, total),
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    let pct = count as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}
