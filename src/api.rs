use serde::{Deserialize, Serialize};

use x_pulse::metrics::{self, MetricKey};
use x_pulse::ranking::{RankedPost, RankingCriterion};
use x_pulse::text;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub sort: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub criterion: String,
    pub posts: Vec<FeedItem>,
}

#[derive(Debug, Serialize)]
pub struct FeedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    pub html: String,
    pub created_at: String,
    pub impressions: u64,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_rank: Option<usize>,
}

impl FeedItem {
    pub fn from_ranked(ranked: RankedPost) -> Self {
        let post = &ranked.post;
        Self {
            id: post.id.clone(),
            html: text::annotate(&post.text),
            text: post.text.clone(),
            created_at: post.created_at.clone(),
            impressions: metrics::resolve(post, MetricKey::Impressions),
            likes: metrics::resolve(post, MetricKey::Likes),
            retweets: metrics::resolve(post, MetricKey::Retweets),
            replies: metrics::resolve(post, MetricKey::Replies),
            position: ranked.position,
            top_rank: ranked.top_rank,
        }
    }
}

impl FeedResponse {
    pub fn new(criterion: RankingCriterion, ranked: Vec<RankedPost>) -> Self {
        Self {
            criterion: criterion.label().to_string(),
            posts: ranked.into_iter().map(FeedItem::from_ranked).collect(),
        }
    }
}
