use std::fmt;

use serde::Serialize;

use crate::metrics::{self, MetricKey};
use crate::Post;

pub const DEFAULT_TOP_PERFORMERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingCriterion {
    Latest,
    Impressions,
    Likes,
    Retweets,
}

impl RankingCriterion {
    pub fn from_str(value: &str) -> Result<Self, InvalidCriterion> {
        match value.to_lowercase().as_str() {
            "latest" => Ok(RankingCriterion::Latest),
            "impressions" => Ok(RankingCriterion::Impressions),
            "likes" => Ok(RankingCriterion::Likes),
            "retweets" => Ok(RankingCriterion::Retweets),
            other => Err(InvalidCriterion(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankingCriterion::Latest => "latest",
            RankingCriterion::Impressions => "impressions",
            RankingCriterion::Likes => "likes",
            RankingCriterion::Retweets => "retweets",
        }
    }

    fn metric_key(self) -> Option<MetricKey> {
        match self {
            RankingCriterion::Latest => None,
            RankingCriterion::Impressions => Some(MetricKey::Impressions),
            RankingCriterion::Likes => Some(MetricKey::Likes),
            RankingCriterion::Retweets => Some(MetricKey::Retweets),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCriterion(pub String);

impl fmt::Display for InvalidCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid ranking criterion: {} (expected latest, impressions, likes or retweets)",
            self.0
        )
    }
}

impl std::error::Error for InvalidCriterion {}

#[derive(Debug, Clone, Serialize)]
pub struct RankedPost {
    #[serde(flatten)]
    pub post: Post,
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_rank: Option<usize>,
}

pub fn rank(posts: &[Post], criterion: RankingCriterion) -> Vec<RankedPost> {
    rank_with_top_n(posts, criterion, DEFAULT_TOP_PERFORMERS)
}

pub fn rank_with_top_n(
    posts: &[Post],
    criterion: RankingCriterion,
    top_n: usize,
) -> Vec<RankedPost> {
    let mut ordered: Vec<&Post> = posts.iter().collect();

    // Vec::sort_by is stable, so ties keep their original input order.
    match criterion.metric_key() {
        None => {
            // RFC 3339 timestamps in UTC compare correctly as strings.
            ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Some(key) => {
            ordered.sort_by(|a, b| metrics::resolve(b, key).cmp(&metrics::resolve(a, key)));
        }
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(position, post)| {
            let top_rank = if criterion != RankingCriterion::Latest && position < top_n {
                Some(position + 1)
            } else {
                None
            };
            RankedPost {
                post: post.clone(),
                position,
                top_rank,
            }
        })
        .collect()
}
