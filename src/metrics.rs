use crate::{MetricsBundle, Post};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKey {
    Impressions,
    Likes,
    Retweets,
    Replies,
    Quotes,
    LinkClicks,
}

impl MetricKey {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "impression_count" => Some(MetricKey::Impressions),
            "like_count" => Some(MetricKey::Likes),
            "retweet_count" => Some(MetricKey::Retweets),
            "reply_count" => Some(MetricKey::Replies),
            "quote_count" => Some(MetricKey::Quotes),
            "url_link_clicks" => Some(MetricKey::LinkClicks),
            _ => None,
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            MetricKey::Impressions => "impression_count",
            MetricKey::Likes => "like_count",
            MetricKey::Retweets => "retweet_count",
            MetricKey::Replies => "reply_count",
            MetricKey::Quotes => "quote_count",
            MetricKey::LinkClicks => "url_link_clicks",
        }
    }
}

// Bundle precedence: non_public (owner analytics) > public > organic.
// A key present with value 0 is a hit, not a fallthrough.
pub fn resolve(post: &Post, key: MetricKey) -> u64 {
    let bundles = [
        post.non_public_metrics.as_ref(),
        post.public_metrics.as_ref(),
        post.organic_metrics.as_ref(),
    ];

    for bundle in bundles.into_iter().flatten() {
        if let Some(value) = bundle_value(bundle, key) {
            return value;
        }
    }

    0
}

fn bundle_value(bundle: &MetricsBundle, key: MetricKey) -> Option<u64> {
    match key {
        MetricKey::Impressions => bundle.impression_count,
        MetricKey::Likes => bundle.like_count,
        MetricKey::Retweets => bundle.retweet_count,
        MetricKey::Replies => bundle.reply_count,
        MetricKey::Quotes => bundle.quote_count,
        MetricKey::LinkClicks => bundle.url_link_clicks,
    }
}
