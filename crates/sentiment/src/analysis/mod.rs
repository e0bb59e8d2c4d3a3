//! Batch analysis module.
//!
//! Pairs posts with classifier labels and aggregates the resulting batch.

mod aggregate;
mod labels;
mod records;

pub use aggregate::{
    sentiment_by_hashtag, sentiment_counts, sentiment_distribution, top_hashtags,
    HashtagSentimentTally, SentimentCounts, SentimentDistribution, DEFAULT_TOP_HASHTAGS,
};
pub use labels::SentimentLabel;
pub use records::{build_records, Post, PostRecord};
