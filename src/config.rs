use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::ranking::DEFAULT_TOP_PERFORMERS;
use crate::series::DEFAULT_MAX_POINTS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub max_points: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub top_performers: usize,
    pub fetch_limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            top_performers: DEFAULT_TOP_PERFORMERS,
            fetch_limit: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: "https://api.twitter.com/2".to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub series: SeriesConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl DashboardConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                DashboardConfig::default()
            }
        } else {
            DashboardConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(max_points) = env::var("SERIES_MAX_POINTS") {
            if let Ok(value) = max_points.parse::<usize>() {
                self.series.max_points = value;
            }
        }
        if let Ok(top_performers) = env::var("FEED_TOP_PERFORMERS") {
            if let Ok(value) = top_performers.parse::<usize>() {
                self.feed.top_performers = value;
            }
        }
        if let Ok(fetch_limit) = env::var("FEED_FETCH_LIMIT") {
            if let Ok(value) = fetch_limit.parse::<usize>() {
                self.feed.fetch_limit = value;
            }
        }
        if let Ok(base) = env::var("X_API_BASE") {
            if !base.trim().is_empty() {
                self.api.base = base;
            }
        }
        if let Ok(timeout) = env::var("X_API_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.api.timeout_ms = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("DASHBOARD_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/dashboard.toml")))
}
