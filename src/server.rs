use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{FeedQuery, FeedResponse};
use crate::history::{HistoryEntry, HistoryStore};
use crate::mock;
use crate::x_api::{AccountProfile, XApiClient};
use x_pulse::config::DashboardConfig;
use x_pulse::ranking::{self, RankingCriterion};
use x_pulse::{series, Post};

#[derive(Clone)]
struct AppState {
    client: Option<XApiClient>,
    history: Arc<HistoryStore>,
    config: Arc<DashboardConfig>,
}

pub async fn serve(args: crate::ServeArgs, config: DashboardConfig) -> Result<(), String> {
    let client = XApiClient::from_env(&config.api);
    if client.is_none() {
        tracing::warn!("X_API_BEARER_TOKEN not set; serving demo data");
    }

    let history = HistoryStore::load(args.history.into()).await?;
    let state = AppState {
        client,
        history: Arc::new(history),
        config: Arc::new(config),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/me", get(me_handler))
        .route("/api/history", get(history_handler))
        .route("/api/feed", get(feed_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "dashboard listening");
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn me_handler(State(state): State<AppState>) -> Json<AccountProfile> {
    let profile = match &state.client {
        Some(client) => match client.fetch_me().await {
            Ok(profile) => {
                if let Err(err) = record_snapshot(&state, &profile).await {
                    tracing::warn!(error = %err, "failed to record follower snapshot");
                }
                profile
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed; serving demo profile");
                mock::demo_profile()
            }
        },
        None => mock::demo_profile(),
    };

    Json(profile)
}

// Demo snapshots never enter the store; only real fetches are recorded.
async fn record_snapshot(state: &AppState, profile: &AccountProfile) -> Result<(), String> {
    let now = Utc::now();
    state
        .history
        .append(HistoryEntry {
            date: now.format("%Y-%m-%d").to_string(),
            timestamp: now.to_rfc3339(),
            followers: profile.followers,
            following: profile.following,
            tweets: profile.tweet_count,
            listed: profile.listed_count,
        })
        .await
}

async fn history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut snapshots = state.history.snapshots().await;
    if snapshots.is_empty() && state.client.is_none() {
        snapshots = mock::demo_history();
    }

    match series::build_with_max_points(&snapshots, state.config.series.max_points) {
        Some(series) => Json(series).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn feed_handler(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, (StatusCode, String)> {
    let criterion = match query.sort.as_deref() {
        Some(token) => RankingCriterion::from_str(token)
            .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?,
        None => RankingCriterion::Latest,
    };

    let limit = query
        .limit
        .unwrap_or(state.config.feed.fetch_limit)
        .min(state.config.feed.fetch_limit);
    let posts = load_posts(&state, limit).await;

    let ranked = ranking::rank_with_top_n(&posts, criterion, state.config.feed.top_performers);
    Ok(Json(FeedResponse::new(criterion, ranked)))
}

async fn load_posts(state: &AppState, limit: usize) -> Vec<Post> {
    let Some(client) = &state.client else {
        return mock::demo_posts();
    };

    let fetched = match client.fetch_me().await {
        Ok(profile) => client.fetch_tweets(&profile.id, limit).await,
        Err(err) => Err(err),
    };

    match fetched {
        Ok(posts) => posts,
        Err(err) => {
            tracing::warn!(error = %err, "tweet fetch failed; serving demo posts");
            mock::demo_posts()
        }
    }
}
