use serde::Serialize;

use crate::GrowthSnapshot;

pub const DEFAULT_MAX_POINTS: usize = 30;

#[derive(Debug, Clone, Serialize)]
pub struct GrowthSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl GrowthSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn build(snapshots: &[GrowthSnapshot]) -> Option<GrowthSeries> {
    build_with_max_points(snapshots, DEFAULT_MAX_POINTS)
}

pub fn build_with_max_points(
    snapshots: &[GrowthSnapshot],
    max_points: usize,
) -> Option<GrowthSeries> {
    if snapshots.is_empty() {
        return None;
    }

    let mut ordered: Vec<&GrowthSnapshot> = snapshots.iter().collect();
    // Stable sort: duplicate dates keep their original relative order.
    ordered.sort_by(|a, b| a.date.cmp(&b.date));

    // Cap is a plot-density bound, not retention; the caller keeps full history.
    let start = ordered.len().saturating_sub(max_points);
    let recent = &ordered[start..];

    Some(GrowthSeries {
        labels: recent.iter().map(|snapshot| snapshot.date.clone()).collect(),
        values: recent.iter().map(|snapshot| snapshot.followers).collect(),
    })
}
