//! Configuration for the sentiment dashboard.
//!
//! Settings are read once into a [`DashboardConfig`] and handed to the
//! components that need them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::text::DEFAULT_MIN_LENGTH;

/// Default sentiment model name.
pub const DEFAULT_MODEL_NAME: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Default inference device.
pub const DEFAULT_DEVICE: &str = "cpu";

/// Dashboard title.
pub const APP_TITLE: &str = "Sentiment Analysis Dashboard for Social Media Trends";

/// Dashboard description.
pub const APP_DESCRIPTION: &str =
    "An advanced NLP dashboard for analyzing real-time public sentiment.";

/// Dashboard version.
pub const APP_VERSION: &str = "1.0.0";

/// Default maximum number of posts analyzed per batch.
pub const DEFAULT_MAX_POSTS: usize = 100;

/// Default classification cache lifetime.
pub const DEFAULT_CACHE_EXPIRY_HOURS: u64 = 24;

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (debug on).
    #[default]
    Development,
    /// Production.
    Production,
    /// Test runs.
    Testing,
}

impl Environment {
    /// Parse an environment name, falling back to development for unknown names.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|()| {
            tracing::warn!(environment = s, "Unknown environment, using development");
            Environment::Development
        })
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "testing" | "test" => Ok(Environment::Testing),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

/// Configuration for the dashboard and its pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
    /// Active environment.
    pub environment: Environment,
    /// Verbose diagnostics.
    pub debug: bool,
    /// Running under tests.
    pub testing: bool,
    /// Sentiment model identifier.
    pub model_name: String,
    /// Inference device (cpu, cuda, ...).
    pub device: String,
    /// Dashboard title.
    pub app_title: String,
    /// Dashboard description.
    pub app_description: String,
    /// Dashboard version.
    pub app_version: String,
    /// Maximum posts analyzed per batch.
    pub max_posts: usize,
    /// Minimum cleaned length of an analyzable post.
    pub min_post_length: usize,
    /// Memoize classifier answers.
    pub enable_cache: bool,
    /// Lifetime of cached classifier answers.
    pub cache_expiry_hours: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}

impl DashboardConfig {
    /// Default settings for an environment.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            debug: environment == Environment::Development,
            testing: environment == Environment::Testing,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            device: DEFAULT_DEVICE.to_string(),
            app_title: APP_TITLE.to_string(),
            app_description: APP_DESCRIPTION.to_string(),
            app_version: APP_VERSION.to_string(),
            max_posts: DEFAULT_MAX_POSTS,
            min_post_length: DEFAULT_MIN_LENGTH,
            enable_cache: true,
            cache_expiry_hours: DEFAULT_CACHE_EXPIRY_HOURS,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Optional Environment Variables
    /// - `ENVIRONMENT`: development | production | testing (default: development)
    /// - `MODEL_NAME`: Sentiment model (default: distilbert-base-uncased-finetuned-sst-2-english)
    /// - `DEVICE`: Inference device (default: cpu)
    /// - `MAX_TWEETS_TO_FETCH`: Max posts per batch (default: 100)
    /// - `MIN_TWEET_LENGTH`: Minimum cleaned post length (default: 10)
    /// - `ENABLE_CACHE`: `true` enables the classification cache (default: true)
    /// - `CACHE_EXPIRY_HOURS`: Cache lifetime (default: 24)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|v| Environment::parse_or_default(&v))
            .unwrap_or_default();

        let mut config = Self::for_environment(environment);

        if let Some(model) = lookup("MODEL_NAME") {
            config.model_name = model;
        }
        if let Some(device) = lookup("DEVICE") {
            config.device = device;
        }
        if let Some(v) = lookup("MAX_TWEETS_TO_FETCH") {
            config.max_posts = parse_number("MAX_TWEETS_TO_FETCH", &v)?;
        }
        if let Some(v) = lookup("MIN_TWEET_LENGTH") {
            config.min_post_length = parse_number("MIN_TWEET_LENGTH", &v)?;
        }
        if let Some(v) = lookup("ENABLE_CACHE") {
            config.enable_cache = v.trim().eq_ignore_ascii_case("true");
        }
        if let Some(v) = lookup("CACHE_EXPIRY_HOURS") {
            config.cache_expiry_hours = parse_number("CACHE_EXPIRY_HOURS", &v)?;
        }

        tracing::debug!(
            environment = %config.environment,
            model = %config.model_name,
            max_posts = config.max_posts,
            min_post_length = config.min_post_length,
            enable_cache = config.enable_cache,
            "Loaded dashboard configuration"
        );

        Ok(config)
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a non-negative integer, got {value:?}"))
}
