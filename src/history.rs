use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use x_pulse::GrowthSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub timestamp: String,
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub tweets: u64,
    #[serde(default)]
    pub listed: u64,
}

impl HistoryEntry {
    pub fn snapshot(&self) -> GrowthSnapshot {
        GrowthSnapshot {
            date: self.date.clone(),
            followers: self.followers,
        }
    }
}

pub struct HistoryStore {
    path: PathBuf,
    entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryStore {
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        let entries = if path.exists() {
            let data = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| format!("failed to read history: {}", err))?;
            if data.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&data)
                    .map_err(|err| format!("failed to parse history: {}", err))?
            }
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub async fn snapshots(&self) -> Vec<GrowthSnapshot> {
        let guard = self.entries.lock().await;
        guard.iter().map(HistoryEntry::snapshot).collect()
    }

    pub async fn append(&self, entry: HistoryEntry) -> Result<(), String> {
        let mut guard = self.entries.lock().await;
        guard.push(entry);
        self.persist(&guard).await
    }

    async fn persist(&self, entries: &[HistoryEntry]) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).await?;
        }
        let payload = serde_json::to_string_pretty(entries)
            .map_err(|err| format!("failed to serialize history: {}", err))?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|err| format!("failed to write history: {}", err))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| format!("failed to finalize history: {}", err))?;
        Ok(())
    }
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create history dir: {}", err))
}
