pub mod config;
pub mod metrics;
pub mod ranking;
pub mod series;
pub mod text;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<MetricsBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_public_metrics: Option<MetricsBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic_metrics: Option<MetricsBundle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweet_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impression_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_link_clicks: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSnapshot {
    pub date: String,
    pub followers: u64,
}

pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format_scaled(value as f64 / 1_000_000.0, "M")
    } else if value >= 1_000 {
        format_scaled(value as f64 / 1_000.0, "K")
    } else {
        value.to_string()
    }
}

fn format_scaled(scaled: f64, suffix: &str) -> String {
    let rounded = (scaled * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", rounded.trunc() as u64, suffix)
    } else {
        format!("{:.1}{}", rounded, suffix)
    }
}
