use chrono::{Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::x_api::AccountProfile;
use x_pulse::{GrowthSnapshot, MetricsBundle, Post};

const DEMO_HISTORY_DAYS: usize = 45;
const DEMO_SEED: u64 = 42;

pub fn demo_profile() -> AccountProfile {
    AccountProfile {
        id: "demo".to_string(),
        username: "demo_user".to_string(),
        name: "Demo User".to_string(),
        description: "Running without X API credentials; showing demo data.".to_string(),
        profile_image_url: None,
        created_at: Some("2020-03-14T00:00:00.000Z".to_string()),
        followers: 12_480,
        following: 310,
        tweet_count: 1_842,
        listed_count: 27,
    }
}

pub fn demo_posts() -> Vec<Post> {
    let samples: [(&str, &str, u64, u64, u64, u64, Option<u64>); 4] = [
        (
            "Shipping day! The new dashboard is live \u{1f680} #buildinpublic",
            "2026-01-07T10:00:00Z",
            120,
            45,
            500,
            20,
            Some(15_000),
        ),
        (
            "Thread: everything I learned about growth this year \u{1f9f5} https://example.com/post#growth",
            "2026-01-05T12:00:00Z",
            50,
            10,
            200,
            5,
            Some(5_000),
        ),
        (
            "Just a normal update, thanks @friend for the nudge.",
            "2026-01-06T09:00:00Z",
            2,
            1,
            15,
            0,
            Some(300),
        ),
        (
            "Older post from before impressions were tracked.",
            "2025-12-20T18:30:00Z",
            8,
            3,
            40,
            1,
            None,
        ),
    ];

    samples
        .iter()
        .map(|(text, created_at, retweets, replies, likes, quotes, impressions)| Post {
            id: Some(format!("demo_{:x}", stable_hash64(text))),
            text: (*text).to_string(),
            created_at: (*created_at).to_string(),
            public_metrics: Some(MetricsBundle {
                retweet_count: Some(*retweets),
                reply_count: Some(*replies),
                like_count: Some(*likes),
                quote_count: Some(*quotes),
                impression_count: None,
                url_link_clicks: None,
            }),
            non_public_metrics: impressions.map(|count| MetricsBundle {
                impression_count: Some(count),
                url_link_clicks: Some(count / 50),
                ..MetricsBundle::default()
            }),
            organic_metrics: None,
        })
        .collect()
}

// Seeded random walk so the demo chart is stable across restarts.
pub fn demo_history() -> Vec<GrowthSnapshot> {
    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    let today = Utc::now().date_naive();
    let mut followers = 11_800i64;

    let mut snapshots = Vec::with_capacity(DEMO_HISTORY_DAYS);
    for offset in (0..DEMO_HISTORY_DAYS).rev() {
        let date = today - Duration::days(offset as i64);
        followers += rng.gen_range(-20..60);
        snapshots.push(GrowthSnapshot {
            date: date.format("%Y-%m-%d").to_string(),
            followers: followers.max(0) as u64,
        });
    }

    snapshots
}

fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
