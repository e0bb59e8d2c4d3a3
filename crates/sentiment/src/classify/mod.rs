//! Classifier capability module.
//!
//! The sentiment model itself lives outside this crate. Callers inject it as a
//! [`Classifier`] so the dashboard can run against a real model or a stub.

mod cache;
mod lookup;

pub use cache::ClassificationCache;
pub use lookup::LookupClassifier;

use crate::analysis::SentimentLabel;
use crate::error::Result;

/// Maps a piece of text to a sentiment label.
pub trait Classifier: Send + Sync {
    /// Classify already-preprocessed post text.
    fn classify(&self, text: &str) -> Result<SentimentLabel>;

    /// Name of the model behind this classifier.
    fn model_name(&self) -> &str;
}
