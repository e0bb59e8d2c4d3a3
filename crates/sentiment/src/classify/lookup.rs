//! Classifier backed by labels produced elsewhere.

use std::collections::HashMap;

use super::Classifier;
use crate::analysis::SentimentLabel;
use crate::error::{AnalyticsError, Result};
use crate::text;

/// Answers from a precomputed text -> label table.
///
/// Keys are normalized with [`text::preprocess`], so the table can be built from
/// raw posts and queried with the text the dashboard actually classifies.
#[derive(Debug, Clone)]
pub struct LookupClassifier {
    model: String,
    labels: HashMap<String, SentimentLabel>,
}

impl LookupClassifier {
    /// Create an empty lookup classifier reporting `model` as its model name.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            labels: HashMap::new(),
        }
    }

    /// Add a labelled post.
    #[must_use]
    pub fn with_label(mut self, post: &str, label: SentimentLabel) -> Self {
        self.insert(post, label);
        self
    }

    /// Add a labelled post in place.
    pub fn insert(&mut self, post: &str, label: SentimentLabel) {
        self.labels.insert(text::preprocess(post), label);
    }

    /// Number of known posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no post is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Classifier for LookupClassifier {
    fn classify(&self, post: &str) -> Result<SentimentLabel> {
        self.labels
            .get(post)
            .or_else(|| self.labels.get(text::preprocess(post).as_str()))
            .copied()
            .ok_or_else(|| {
                AnalyticsError::Classifier(format!("no label known for post: {post:?}"))
            })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_preprocessed_text() {
        let classifier = LookupClassifier::new("fixture")
            .with_label("Loving #Rust @ferris", SentimentLabel::Positive);

        assert_eq!(classifier.len(), 1);
        assert_eq!(
            classifier.classify("Loving Rust").unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            classifier.classify("Loving #Rust").unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(classifier.model_name(), "fixture");
    }

    #[test]
    fn test_lookup_unknown_text_is_error() {
        let classifier = LookupClassifier::new("fixture");
        assert!(classifier.is_empty());
        assert!(matches!(
            classifier.classify("anything"),
            Err(AnalyticsError::Classifier(_))
        ));
    }
}
