//! End-to-end tests for building and aggregating a labelled batch.

use std::sync::Arc;

use sentiment::dashboard::sample_posts;
use sentiment::{
    build_records, clean, extract_hashtags, is_valid, sentiment_by_hashtag, sentiment_counts,
    sentiment_distribution, top_hashtags, AnalyticsError, Dashboard, DashboardConfig,
    LookupClassifier, SentimentCounts, SentimentLabel,
};

const TEXTS: [&str; 3] = [
    "AI is changing society! #AIethics",
    "Worried about ethics in AI. #AIethics #risk",
    "Great progress, but risks remain.",
];

const LABELS: [&str; 3] = ["POSITIVE", "NEGATIVE", "POSITIVE"];

#[test]
fn test_batch_aggregation() {
    let records = build_records(&TEXTS, &LABELS).unwrap();

    assert_eq!(
        top_hashtags(&records, 10),
        vec![("#AIethics".to_string(), 2), ("#risk".to_string(), 1)]
    );
    assert_eq!(top_hashtags(&records, 1), vec![("#AIethics".to_string(), 2)]);

    let tally = sentiment_by_hashtag(&records);
    assert_eq!(
        tally.get("#AIethics"),
        Some(&SentimentCounts {
            positive: 1,
            negative: 1
        })
    );

    let labels: Vec<SentimentLabel> = records.iter().map(|r| r.sentiment).collect();
    let counts = sentiment_counts(&labels);
    assert_eq!(counts.positive, 2);
    assert_eq!(counts.negative, 1);

    let dist = sentiment_distribution(&labels);
    assert!((dist.positive - 66.67).abs() < 1e-9);
    assert!((dist.negative - 33.33).abs() < 1e-9);
}

#[test]
fn test_documented_examples() {
    assert_eq!(
        extract_hashtags("Great #AI news #ai2024 about #AI"),
        vec!["#AI", "#ai2024", "#AI"]
    );
    assert!(!is_valid("hi", 10));
    assert!(is_valid("This is a sufficiently long post", 10));
    assert!(matches!(
        build_records(&["a", "b"], &["POSITIVE"]),
        Err(AnalyticsError::LengthMismatch { texts: 2, labels: 1 })
    ));

    let empty = sentiment_distribution(&[]);
    assert!(empty.positive.abs() < f64::EPSILON && empty.negative.abs() < f64::EPSILON);

    let labels = SentimentLabel::parse_all(&["POSITIVE", "POSITIVE", "NEGATIVE", "NEGATIVE"])
        .unwrap();
    let even = sentiment_distribution(&labels);
    assert!((even.positive - 50.0).abs() < f64::EPSILON);
    assert!((even.negative - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_stray_labels_are_rejected() {
    let err = SentimentLabel::parse_all(&["POSITIVE", "NEUTRAL"]).unwrap_err();
    assert_eq!(
        err,
        AnalyticsError::UnrecognizedLabel {
            label: "NEUTRAL".to_string()
        }
    );
}

#[test]
fn test_dashboard_with_lookup_classifier() {
    let classifier = TEXTS
        .iter()
        .zip(LABELS)
        .fold(LookupClassifier::new("fixture"), |c, (text, label)| {
            c.with_label(text, label.parse().unwrap())
        });

    let mut posts: Vec<&str> = TEXTS.to_vec();
    posts.push("@someone https://example.com");

    let dashboard = Dashboard::new(DashboardConfig::default(), Arc::new(classifier));
    let report = dashboard.analyze(posts.as_slice()).unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records[1].post.cleaned, clean(TEXTS[1]));
    assert_eq!(report.counts.positive, 2);
    assert_eq!(report.top_hashtags[0], ("#AIethics".to_string(), 2));
    assert_eq!(report.model, "fixture");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["hashtag_sentiment"]["#AIethics"]["NEGATIVE"], 1);
    assert_eq!(json["distribution"]["POSITIVE"], 66.67);
}

#[test]
fn test_dashboard_unknown_post_fails_whole_batch() {
    let classifier = LookupClassifier::new("fixture")
        .with_label(TEXTS[0], SentimentLabel::Positive);
    let dashboard = Dashboard::new(DashboardConfig::default(), Arc::new(classifier));

    let err = dashboard.analyze(&TEXTS).unwrap_err();
    assert!(matches!(err, AnalyticsError::Classifier(_)));
}

#[test]
fn test_sample_posts_run_through_dashboard() {
    let posts = sample_posts();
    let classifier = posts
        .iter()
        .fold(LookupClassifier::new("fixture"), |c, post| {
            c.with_label(post, SentimentLabel::Positive)
        });
    let dashboard = Dashboard::new(DashboardConfig::default(), Arc::new(classifier));
    let report = dashboard.analyze(posts.as_slice()).unwrap();

    assert_eq!(report.records.len() + report.skipped, posts.len());
    assert!((report.distribution.positive - 100.0).abs() < f64::EPSILON);
}
