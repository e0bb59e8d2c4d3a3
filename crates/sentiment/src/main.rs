//! Sentiment CLI - social media sentiment dashboard.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sentiment::analysis::{build_records, DEFAULT_TOP_HASHTAGS};
use sentiment::dashboard::{sample_posts, Dashboard, DashboardReport};
use sentiment::render::{render_bar_chart, render_hashtag_sentiment, render_table};
use sentiment::text::{clean, extract_hashtags, is_valid, preprocess};
use sentiment::{DashboardConfig, LookupClassifier, SentimentLabel};

/// Sentiment CLI - Clean posts and summarize classifier sentiment.
#[derive(Parser)]
#[command(name = "sentiment")]
#[command(about = "Social media sentiment dashboard")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how a single post is cleaned
    Clean {
        /// Raw post text
        text: String,
    },

    /// Summarize a file of already-labelled posts
    Report {
        /// JSON array of {"text": ..., "label": ...} objects
        #[arg(long)]
        input: PathBuf,

        /// Number of top hashtags to show
        #[arg(long, default_value_t = DEFAULT_TOP_HASHTAGS)]
        top: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the dashboard over the built-in sample posts
    Demo {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One labelled post in a report input file.
#[derive(Debug, Deserialize)]
struct LabelledPost {
    text: String,
    label: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("sentiment=debug,info")
    } else {
        EnvFilter::new("sentiment=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }
    let config = DashboardConfig::from_env()?;

    match cli.command {
        Commands::Clean { text } => run_clean(&text, &config),
        Commands::Report { input, top, json } => {
            tracing::info!(input = %input.display(), top, "Building report");
            run_report(&input, top, json, &config)
        }
        Commands::Demo { json } => run_demo(json, config),
    }
}

fn run_clean(text: &str, config: &DashboardConfig) -> Result<()> {
    println!("Cleaned:      {}", clean(text));
    println!("Preprocessed: {}", preprocess(text));
    println!("Hashtags:     {}", extract_hashtags(text).join(", "));
    println!(
        "Valid:        {} (min length {})",
        is_valid(text, config.min_post_length),
        config.min_post_length
    );
    Ok(())
}

fn load_labelled(path: &Path) -> Result<Vec<LabelledPost>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn run_report(input: &Path, top: usize, json: bool, config: &DashboardConfig) -> Result<()> {
    let posts = load_labelled(input)?;
    let texts: Vec<&str> = posts.iter().map(|p| p.text.as_str()).collect();
    let labels: Vec<&str> = posts.iter().map(|p| p.label.as_str()).collect();

    let records = build_records(&texts, &labels)?;
    let report = DashboardReport::from_records(config, &config.model_name, records, top);
    print_report(&report, json)
}

fn run_demo(json: bool, config: DashboardConfig) -> Result<()> {
    let posts = sample_posts();

    // Fixed labels for the sample posts
    let classifier = posts
        .iter()
        .fold(LookupClassifier::new(config.model_name.clone()), |c, post| {
            let label = if post.contains("Worried") {
                SentimentLabel::Negative
            } else {
                SentimentLabel::Positive
            };
            c.with_label(post, label)
        });

    let dashboard = Dashboard::new(config, Arc::new(classifier));
    let report = dashboard.analyze(posts.as_slice())?;
    print_report(&report, json)
}

fn print_report(report: &DashboardReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{}", report.title);
    println!("{}\n", report.description);
    println!("Model: {}\n", report.model);

    print!("{}", render_table(&report.records));

    println!("\nSentiment");
    print!("{}", render_bar_chart(&report.counts));
    println!(
        "POSITIVE {:.2}% | NEGATIVE {:.2}%",
        report.distribution.positive, report.distribution.negative
    );

    if !report.top_hashtags.is_empty() {
        println!("\nTop hashtags");
        for (tag, count) in &report.top_hashtags {
            println!("  {tag} ({count})");
        }
        println!("\nSentiment by hashtag");
        print!("{}", render_hashtag_sentiment(&report.hashtag_sentiment));
    }

    if report.skipped > 0 {
        println!("\nSkipped {} post(s) below minimum length", report.skipped);
    }
    println!("\nBias metrics are covered in the README notes.");

    Ok(())
}
