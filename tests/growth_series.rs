use x_pulse::series::{build, build_with_max_points, DEFAULT_MAX_POINTS};
use x_pulse::GrowthSnapshot;

fn snapshot(date: &str, followers: u64) -> GrowthSnapshot {
    GrowthSnapshot {
        date: date.to_string(),
        followers,
    }
}

#[test]
fn empty_history_yields_no_series() {
    assert!(build(&[]).is_none());
}

#[test]
fn single_point_is_a_valid_series() {
    let series = build(&[snapshot("2026-08-01", 120)]).unwrap();

    assert_eq!(series.labels, vec!["2026-08-01"]);
    assert_eq!(series.values, vec![120]);
}

#[test]
fn unsorted_history_comes_out_chronological() {
    let history = vec![
        snapshot("2026-08-03", 130),
        snapshot("2026-08-01", 100),
        snapshot("2026-08-02", 115),
    ];

    let series = build(&history).unwrap();

    assert_eq!(series.labels, vec!["2026-08-01", "2026-08-02", "2026-08-03"]);
    assert_eq!(series.values, vec![100, 115, 130]);
}

#[test]
fn caps_at_thirty_most_recent_points() {
    let start = chrono::NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    let history: Vec<GrowthSnapshot> = (0..35)
        .map(|offset| {
            let date = start + chrono::Duration::days(offset);
            snapshot(&date.format("%Y-%m-%d").to_string(), 1_000 + offset as u64)
        })
        .collect();

    let series = build(&history).unwrap();

    assert_eq!(series.len(), DEFAULT_MAX_POINTS);
    assert_eq!(series.labels.first().map(String::as_str), Some("2026-07-06"));
    assert_eq!(series.labels.last().map(String::as_str), Some("2026-08-04"));
    assert_eq!(series.values.first(), Some(&1_005));
}

#[test]
fn duplicate_dates_are_kept_in_input_order() {
    let history = vec![
        snapshot("2026-08-01", 100),
        snapshot("2026-08-01", 105),
        snapshot("2026-08-02", 110),
    ];

    let series = build(&history).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.values, vec![100, 105, 110]);
}

#[test]
fn labels_and_values_stay_aligned() {
    let history: Vec<GrowthSnapshot> = (1..=10)
        .map(|day| snapshot(&format!("2026-08-{:02}", day), day as u64 * 10))
        .collect();

    let series = build(&history).unwrap();

    assert_eq!(series.labels.len(), series.values.len());
    for (label, value) in series.labels.iter().zip(series.values.iter()) {
        let day: u64 = label[8..].parse().unwrap();
        assert_eq!(*value, day * 10);
    }
}

#[test]
fn custom_cap_truncates_from_the_front() {
    let history = vec![
        snapshot("2026-08-01", 100),
        snapshot("2026-08-02", 110),
        snapshot("2026-08-03", 120),
    ];

    let series = build_with_max_points(&history, 2).unwrap();

    assert_eq!(series.labels, vec!["2026-08-02", "2026-08-03"]);
    assert_eq!(series.values, vec![110, 120]);
}
