use x_pulse::metrics::{resolve, MetricKey};
use x_pulse::{MetricsBundle, Post};

fn bundle(impressions: Option<u64>, likes: Option<u64>) -> MetricsBundle {
    MetricsBundle {
        impression_count: impressions,
        like_count: likes,
        ..MetricsBundle::default()
    }
}

#[test]
fn non_public_bundle_wins_even_at_zero() {
    let post = Post {
        non_public_metrics: Some(bundle(Some(0), None)),
        public_metrics: Some(bundle(Some(500), None)),
        ..Post::default()
    };

    assert_eq!(resolve(&post, MetricKey::Impressions), 0);
}

#[test]
fn falls_through_to_public_when_key_missing() {
    let post = Post {
        non_public_metrics: Some(bundle(Some(1_200), None)),
        public_metrics: Some(bundle(None, Some(42))),
        ..Post::default()
    };

    assert_eq!(resolve(&post, MetricKey::Likes), 42);
}

#[test]
fn falls_through_to_organic_last() {
    let post = Post {
        public_metrics: Some(bundle(None, None)),
        organic_metrics: Some(bundle(Some(77), None)),
        ..Post::default()
    };

    assert_eq!(resolve(&post, MetricKey::Impressions), 77);
}

#[test]
fn absent_everywhere_resolves_to_zero() {
    let post = Post {
        public_metrics: Some(bundle(None, Some(10))),
        ..Post::default()
    };

    assert_eq!(resolve(&post, MetricKey::Retweets), 0);
}

#[test]
fn post_without_bundles_resolves_to_zero() {
    let post = Post::default();

    assert_eq!(resolve(&post, MetricKey::Impressions), 0);
    assert_eq!(resolve(&post, MetricKey::Likes), 0);
}

#[test]
fn metric_key_parses_api_field_names() {
    assert_eq!(
        MetricKey::from_str("impression_count"),
        Some(MetricKey::Impressions)
    );
    assert_eq!(MetricKey::from_str("like_count"), Some(MetricKey::Likes));
    assert_eq!(MetricKey::from_str("bookmark_count"), None);
    assert_eq!(MetricKey::Retweets.field_name(), "retweet_count");
}
