use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use x_pulse::config::ApiConfig;
use x_pulse::Post;

const USER_FIELDS: &str = "profile_image_url,description,public_metrics,created_at";
const TWEET_FIELDS: &str = "created_at,public_metrics,non_public_metrics,organic_metrics";

#[derive(Clone)]
pub struct XApiClient {
    client: reqwest::Client,
    api_base: String,
    bearer_token: String,
}

impl XApiClient {
    pub fn from_env(config: &ApiConfig) -> Option<Self> {
        let bearer_token = env::var("X_API_BEARER_TOKEN").ok()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .ok()?;
        Some(Self {
            client,
            api_base: config.base.clone(),
            bearer_token: decode_bearer(bearer_token),
        })
    }

    pub async fn fetch_me(&self) -> Result<AccountProfile, String> {
        let url = format!("{}/users/me", self.api_base.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .query(&[("user.fields", USER_FIELDS)])
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .send()
            .await
            .map_err(|err| format!("X API request failed: {}", err))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| String::new());
            let detail = error_body.trim();
            if detail.is_empty() {
                return Err(format!("X API error: {}", status));
            }
            return Err(format!("X API error: {} {}", status, detail));
        }

        let body: XUserResponse = response
            .json()
            .await
            .map_err(|err| format!("X API response parse failed: {}", err))?;

        let user = body
            .data
            .ok_or_else(|| "X API response missing user data".to_string())?;

        tracing::debug!(user_id = %user.id, "fetched profile");
        Ok(AccountProfile::from(user))
    }

    // non_public_metrics and organic_metrics require user-context auth; the
    // API drops those fields silently for app-only tokens and Post tolerates
    // their absence.
    pub async fn fetch_tweets(&self, user_id: &str, limit: usize) -> Result<Vec<Post>, String> {
        let max_results = limit.clamp(5, 100);
        let url = format!(
            "{}/users/{}/tweets",
            self.api_base.trim_end_matches('/'),
            user_id
        );
        let response = self
            .client
            .get(url)
            .query(&[
                ("max_results", max_results.to_string().as_str()),
                ("tweet.fields", TWEET_FIELDS),
            ])
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .send()
            .await
            .map_err(|err| format!("X API request failed: {}", err))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| String::new());
            let detail = error_body.trim();
            if detail.is_empty() {
                return Err(format!("X API error: {}", status));
            }
            return Err(format!("X API error: {} {}", status, detail));
        }

        let body: XTweetsResponse = response
            .json()
            .await
            .map_err(|err| format!("X API response parse failed: {}", err))?;

        let tweets = body.data.unwrap_or_default();
        tracing::debug!(count = tweets.len(), "fetched tweets");
        Ok(tweets)
    }
}

fn decode_bearer(value: String) -> String {
    if value.contains('%') {
        match urlencoding::decode(&value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value,
        }
    } else {
        value
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountProfile {
    pub id: String,
    pub username: String,
    pub name: String,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub tweet_count: u64,
    pub listed_count: u64,
}

impl From<XUser> for AccountProfile {
    fn from(user: XUser) -> Self {
        let metrics = user.public_metrics.unwrap_or_default();
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            description: user.description.unwrap_or_default(),
            profile_image_url: user.profile_image_url,
            created_at: user.created_at,
            followers: metrics.followers_count,
            following: metrics.following_count,
            tweet_count: metrics.tweet_count,
            listed_count: metrics.listed_count,
        }
    }
}

#[derive(Deserialize)]
struct XUserResponse {
    data: Option<XUser>,
}

#[derive(Deserialize)]
struct XUser {
    id: String,
    username: String,
    name: String,
    description: Option<String>,
    profile_image_url: Option<String>,
    created_at: Option<String>,
    public_metrics: Option<XUserMetrics>,
}

#[derive(Default, Deserialize)]
struct XUserMetrics {
    #[serde(default)]
    followers_count: u64,
    #[serde(default)]
    following_count: u64,
    #[serde(default)]
    tweet_count: u64,
    #[serde(default)]
    listed_count: u64,
}

#[derive(Deserialize)]
struct XTweetsResponse {
    data: Option<Vec<Post>>,
}
