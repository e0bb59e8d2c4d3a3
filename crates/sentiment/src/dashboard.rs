//! Dashboard pipeline - orchestrates the validate-classify-aggregate flow.

use serde::Serialize;
use std::sync::Arc;

use crate::analysis::{
    sentiment_by_hashtag, sentiment_counts, sentiment_distribution, top_hashtags,
    HashtagSentimentTally, PostRecord, SentimentCounts, SentimentDistribution, SentimentLabel,
    DEFAULT_TOP_HASHTAGS,
};
use crate::classify::{ClassificationCache, Classifier};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::text;

/// Built-in sample batch used by the demo dashboard.
#[must_use]
pub fn sample_posts() -> Vec<String> {
    [
        "AI is changing society!",
        "Worried about ethics in AI.",
        "Great progress, but risks remain.",
        "AI is changing society! #AIethics",
        "Worried about ethics in AI. #AIethics #risk",
        "Loving how @openlab shares models openly https://example.com/models #OpenSource #AIethics",
        "ok #AI",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Everything the dashboard displays for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Dashboard title.
    pub title: String,
    /// Dashboard description.
    pub description: String,
    /// Model that produced the labels.
    pub model: String,
    /// One record per analyzed post, in input order.
    pub records: Vec<PostRecord>,
    /// Raw label counts.
    pub counts: SentimentCounts,
    /// Label percentages.
    pub distribution: SentimentDistribution,
    /// Most frequent hashtags.
    pub top_hashtags: Vec<(String, usize)>,
    /// Sentiment per hashtag.
    pub hashtag_sentiment: HashtagSentimentTally,
    /// Posts dropped for failing the minimum length check.
    pub skipped: usize,
}

impl DashboardReport {
    /// Aggregate an already-built batch of records.
    #[must_use]
    pub fn from_records(
        config: &DashboardConfig,
        model: &str,
        records: Vec<PostRecord>,
        top_n: usize,
    ) -> Self {
        let labels: Vec<SentimentLabel> = records.iter().map(|r| r.sentiment).collect();
        Self {
            title: config.app_title.clone(),
            description: config.app_description.clone(),
            model: model.to_string(),
            counts: sentiment_counts(&labels),
            distribution: sentiment_distribution(&labels),
            top_hashtags: top_hashtags(&records, top_n),
            hashtag_sentiment: sentiment_by_hashtag(&records),
            records,
            skipped: 0,
        }
    }
}

/// Sentiment dashboard orchestrator.
pub struct Dashboard {
    config: DashboardConfig,
    classifier: Arc<dyn Classifier>,
    cache: Option<ClassificationCache>,
}

impl Dashboard {
    /// Create a new dashboard.
    #[must_use]
    pub fn new(config: DashboardConfig, classifier: Arc<dyn Classifier>) -> Self {
        let cache = config
            .enable_cache
            .then(|| ClassificationCache::new(config.cache_expiry_hours));
        Self {
            config,
            classifier,
            cache,
        }
    }

    /// Dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Analyze a batch of raw posts.
    pub fn analyze<S: AsRef<str>>(&self, posts: &[S]) -> Result<DashboardReport> {
        tracing::info!(posts = posts.len(), "Starting dashboard analysis");

        let (kept, skipped) = self.select_posts(posts);
        if skipped > 0 {
            tracing::debug!(skipped, "Dropped posts below minimum length");
        }

        let mut labels = Vec::with_capacity(kept.len());
        for post in &kept {
            labels.push(self.classify(post)?);
        }

        let records: Vec<PostRecord> = kept
            .iter()
            .zip(labels)
            .map(|(post, label)| PostRecord::new(*post, label))
            .collect();
        let mut report = DashboardReport::from_records(
            &self.config,
            self.classifier.model_name(),
            records,
            DEFAULT_TOP_HASHTAGS,
        );
        report.skipped = skipped;

        tracing::info!(
            analyzed = report.records.len(),
            skipped,
            positive = report.counts.positive,
            negative = report.counts.negative,
            "Dashboard analysis complete"
        );
        Ok(report)
    }

    /// Keep valid posts in input order, capped at `max_posts`.
    fn select_posts<'a, S: AsRef<str>>(&self, posts: &'a [S]) -> (Vec<&'a str>, usize) {
        let mut skipped = 0;
        let mut over_cap = 0;
        let mut kept = Vec::new();
        for post in posts {
            let post = post.as_ref();
            if !text::is_valid(post, self.config.min_post_length) {
                skipped += 1;
            } else if kept.len() < self.config.max_posts {
                kept.push(post);
            } else {
                over_cap += 1;
            }
        }
        if over_cap > 0 {
            tracing::debug!(
                max_posts = self.config.max_posts,
                over_cap,
                "Batch capped at max posts"
            );
        }
        (kept, skipped)
    }

    fn classify(&self, post: &str) -> Result<SentimentLabel> {
        let input = text::preprocess(post);

        if let Some(label) = self.cache.as_ref().and_then(|c| c.get(&input)) {
            tracing::debug!(%label, "Classification cache hit");
            return Ok(label);
        }

        let label = self.classifier.classify(&input)?;
        if let Some(cache) = &self.cache {
            cache.insert(&input, label);
        }
        Ok(label)
    }
}
