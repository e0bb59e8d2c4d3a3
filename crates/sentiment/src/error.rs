//! Error types for post cleaning and sentiment aggregation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while building or aggregating a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Texts and labels were not paired one-to-one
    #[error("Post and label lists must be equal length (posts: {texts}, labels: {labels})")]
    LengthMismatch { texts: usize, labels: usize },

    /// A label outside POSITIVE/NEGATIVE was supplied
    #[error("Unrecognized sentiment label: {label:?} (expected POSITIVE or NEGATIVE)")]
    UnrecognizedLabel { label: String },

    /// The injected classifier could not label a post
    #[error("Classifier failed: {0}")]
    Classifier(String),
}
