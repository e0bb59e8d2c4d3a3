//! Sentiment dashboard crate for short social media posts.
//!
//! This crate provides:
//! - Post cleaning (URL/mention stripping, whitespace collapsing) and hashtag extraction
//! - Batch records pairing posts with externally produced sentiment labels
//! - Aggregations: top hashtags, per-hashtag sentiment, label counts and percentages
//! - A dashboard pipeline driven by an injected classifier and explicit configuration
//! - Terminal rendering of the batch as a table and a bar chart

pub mod analysis;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod text;

// Re-export main types
pub use analysis::{
    build_records, sentiment_by_hashtag, sentiment_counts, sentiment_distribution, top_hashtags,
    HashtagSentimentTally, Post, PostRecord, SentimentCounts, SentimentDistribution,
    SentimentLabel,
};
pub use classify::{ClassificationCache, Classifier, LookupClassifier};
pub use config::{DashboardConfig, Environment};
pub use dashboard::{Dashboard, DashboardReport};
pub use error::{AnalyticsError, Result};
pub use text::{clean, extract_hashtags, is_valid, preprocess};
