//! Sentiment labels produced by a classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AnalyticsError, Result};

/// Sentiment assigned to a post by an external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    /// Positive sentiment.
    Positive,
    /// Negative sentiment.
    Negative,
}

impl SentimentLabel {
    /// Get all labels.
    #[must_use]
    pub fn all() -> &'static [SentimentLabel] {
        &[SentimentLabel::Positive, SentimentLabel::Negative]
    }

    /// Label as emitted by classifiers (`POSITIVE` / `NEGATIVE`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
        }
    }

    /// Parse every label of a batch, failing on the first unrecognized one.
    pub fn parse_all<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Self>> {
        labels.iter().map(|l| l.as_ref().parse()).collect()
    }
}

impl FromStr for SentimentLabel {
    type Err = AnalyticsError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "POSITIVE" => Ok(SentimentLabel::Positive),
            "NEGATIVE" => Ok(SentimentLabel::Negative),
            _ => Err(AnalyticsError::UnrecognizedLabel {
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        assert_eq!("POSITIVE".parse::<SentimentLabel>(), Ok(SentimentLabel::Positive));
        assert_eq!(" negative ".parse::<SentimentLabel>(), Ok(SentimentLabel::Negative));
        assert_eq!(
            "NEUTRAL".parse::<SentimentLabel>(),
            Err(AnalyticsError::UnrecognizedLabel {
                label: "NEUTRAL".to_string()
            })
        );
    }

    #[test]
    fn test_parse_all_rejects_stray_label() {
        let err = SentimentLabel::parse_all(&["POSITIVE", "LABEL_1"]).unwrap_err();
        assert!(matches!(err, AnalyticsError::UnrecognizedLabel { label } if label == "LABEL_1"));
    }

    #[test]
    fn test_label_serde_uses_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"NEGATIVE\"");
        let parsed: SentimentLabel = serde_json::from_str("\"POSITIVE\"").unwrap();
        assert_eq!(parsed, SentimentLabel::Positive);
    }
}
