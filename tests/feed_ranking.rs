use x_pulse::ranking::{rank, rank_with_top_n, InvalidCriterion, RankingCriterion};
use x_pulse::{MetricsBundle, Post};

fn post(id: &str, created_at: &str) -> Post {
    Post {
        id: Some(id.to_string()),
        text: format!("post {}", id),
        created_at: created_at.to_string(),
        ..Post::default()
    }
}

fn with_impressions(mut post: Post, count: u64) -> Post {
    post.non_public_metrics = Some(MetricsBundle {
        impression_count: Some(count),
        ..MetricsBundle::default()
    });
    post
}

fn with_likes(mut post: Post, count: u64) -> Post {
    post.public_metrics = Some(MetricsBundle {
        like_count: Some(count),
        ..MetricsBundle::default()
    });
    post
}

fn ids(ranked: &[x_pulse::ranking::RankedPost]) -> Vec<String> {
    ranked
        .iter()
        .map(|item| item.post.id.clone().unwrap_or_default())
        .collect()
}

#[test]
fn latest_orders_most_recent_first() {
    let posts = vec![
        post("old", "2026-01-05T12:00:00Z"),
        post("new", "2026-01-07T10:00:00Z"),
        post("mid", "2026-01-06T09:00:00Z"),
    ];

    let ranked = rank(&posts, RankingCriterion::Latest);

    assert_eq!(ids(&ranked), vec!["new", "mid", "old"]);
}

#[test]
fn latest_ties_keep_input_order() {
    let posts = vec![
        post("first", "2026-01-06T09:00:00Z"),
        post("second", "2026-01-06T09:00:00Z"),
        post("third", "2026-01-06T09:00:00Z"),
    ];

    let ranked = rank(&posts, RankingCriterion::Latest);

    assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
}

#[test]
fn latest_is_idempotent() {
    let posts = vec![
        post("b", "2026-01-06T09:00:00Z"),
        post("a", "2026-01-07T10:00:00Z"),
    ];

    let once = rank(&posts, RankingCriterion::Latest);
    let reordered: Vec<Post> = once.iter().map(|item| item.post.clone()).collect();
    let twice = rank(&reordered, RankingCriterion::Latest);

    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn impressions_orders_descending_with_stable_ties() {
    let posts = vec![
        with_impressions(post("a", "2026-01-01T00:00:00Z"), 10),
        with_impressions(post("b", "2026-01-02T00:00:00Z"), 50),
        post("c", "2026-01-03T00:00:00Z"),
    ];

    let ranked = rank(&posts, RankingCriterion::Impressions);

    assert_eq!(ids(&ranked), vec!["b", "a", "c"]);
}

#[test]
fn present_zero_outranks_nothing_but_still_sorts() {
    // non_public impression_count of 0 resolves to 0 despite the public 500.
    let mut shadowed = post("shadowed", "2026-01-01T00:00:00Z");
    shadowed.non_public_metrics = Some(MetricsBundle {
        impression_count: Some(0),
        ..MetricsBundle::default()
    });
    shadowed.public_metrics = Some(MetricsBundle {
        impression_count: Some(500),
        ..MetricsBundle::default()
    });

    let posts = vec![
        shadowed,
        with_impressions(post("small", "2026-01-02T00:00:00Z"), 1),
    ];

    let ranked = rank(&posts, RankingCriterion::Impressions);

    assert_eq!(ids(&ranked), vec!["small", "shadowed"]);
}

#[test]
fn empty_input_is_empty_for_every_criterion() {
    let criteria = [
        RankingCriterion::Latest,
        RankingCriterion::Impressions,
        RankingCriterion::Likes,
        RankingCriterion::Retweets,
    ];

    for criterion in criteria {
        assert!(rank(&[], criterion).is_empty());
    }
}

#[test]
fn unknown_token_is_rejected() {
    let err = RankingCriterion::from_str("bogus").unwrap_err();
    assert_eq!(err, InvalidCriterion("bogus".to_string()));
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn known_tokens_parse_case_insensitively() {
    assert_eq!(
        RankingCriterion::from_str("Likes").unwrap(),
        RankingCriterion::Likes
    );
    assert_eq!(
        RankingCriterion::from_str("latest").unwrap(),
        RankingCriterion::Latest
    );
}

#[test]
fn top_three_flagged_under_engagement_criterion() {
    let posts: Vec<Post> = (0..5)
        .map(|idx| {
            with_likes(
                post(&format!("p{}", idx), "2026-01-01T00:00:00Z"),
                100 - idx as u64,
            )
        })
        .collect();

    let ranked = rank(&posts, RankingCriterion::Likes);

    assert_eq!(ranked[0].top_rank, Some(1));
    assert_eq!(ranked[1].top_rank, Some(2));
    assert_eq!(ranked[2].top_rank, Some(3));
    assert_eq!(ranked[3].top_rank, None);
    assert_eq!(ranked[4].top_rank, None);
}

#[test]
fn latest_never_flags_top_performers() {
    let posts = vec![
        post("a", "2026-01-07T10:00:00Z"),
        post("b", "2026-01-06T09:00:00Z"),
    ];

    let ranked = rank(&posts, RankingCriterion::Latest);

    assert!(ranked.iter().all(|item| item.top_rank.is_none()));
}

#[test]
fn top_n_is_adjustable() {
    let posts: Vec<Post> = (0..4)
        .map(|idx| {
            with_likes(
                post(&format!("p{}", idx), "2026-01-01T00:00:00Z"),
                10 - idx as u64,
            )
        })
        .collect();

    let ranked = rank_with_top_n(&posts, RankingCriterion::Likes, 1);

    assert_eq!(ranked[0].top_rank, Some(1));
    assert!(ranked[1..].iter().all(|item| item.top_rank.is_none()));
}

#[test]
fn positions_are_zero_based_and_sequential() {
    let posts = vec![
        post("a", "2026-01-07T10:00:00Z"),
        post("b", "2026-01-06T09:00:00Z"),
        post("c", "2026-01-05T12:00:00Z"),
    ];

    let ranked = rank(&posts, RankingCriterion::Latest);

    let positions: Vec<usize> = ranked.iter().map(|item| item.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn input_collection_is_untouched() {
    let posts = vec![
        post("b", "2026-01-06T09:00:00Z"),
        post("a", "2026-01-07T10:00:00Z"),
    ];

    let _ = rank(&posts, RankingCriterion::Latest);

    assert_eq!(posts[0].id.as_deref(), Some("b"));
    assert_eq!(posts[1].id.as_deref(), Some("a"));
}
