//! Posts and the records pairing them with labels.

use serde::{Deserialize, Serialize};

use super::labels::SentimentLabel;
use crate::error::{AnalyticsError, Result};
use crate::text;

/// A single short-text post with its derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Raw post text.
    pub text: String,
    /// Text with URLs, mentions and extra whitespace removed.
    pub cleaned: String,
    /// Hashtags in order of appearance in the raw text.
    pub hashtags: Vec<String>,
}

impl Post {
    /// Create a post, deriving its cleaned text and hashtags.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let raw: String = text.into();
        Self {
            cleaned: text::clean(&raw),
            hashtags: text::extract_hashtags(&raw),
            text: raw,
        }
    }
}

/// A post paired with the sentiment label a classifier assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// The post.
    #[serde(flatten)]
    pub post: Post,
    /// Assigned sentiment.
    pub sentiment: SentimentLabel,
}

impl PostRecord {
    /// Create a record from raw text and a label.
    #[must_use]
    pub fn new(text: impl Into<String>, sentiment: SentimentLabel) -> Self {
        Self {
            post: Post::new(text),
            sentiment,
        }
    }

    /// Hashtags of the underlying post.
    #[must_use]
    pub fn hashtags(&self) -> &[String] {
        &self.post.hashtags
    }
}

/// Build one record per post from parallel text and label sequences.
///
/// Fails with [`AnalyticsError::LengthMismatch`] when the sequences differ in
/// length and with [`AnalyticsError::UnrecognizedLabel`] for labels other than
/// POSITIVE/NEGATIVE. No partial batch is returned.
pub fn build_records<T, L>(texts: &[T], labels: &[L]) -> Result<Vec<PostRecord>>
where
    T: AsRef<str>,
    L: AsRef<str>,
{
    if texts.len() != labels.len() {
        return Err(AnalyticsError::LengthMismatch {
            texts: texts.len(),
            labels: labels.len(),
        });
    }

    let labels = SentimentLabel::parse_all(labels)?;
    Ok(texts
        .iter()
        .zip(labels)
        .map(|(text, label)| PostRecord::new(text.as_ref(), label))
        .collect())
}
