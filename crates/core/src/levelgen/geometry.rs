//! Grid-space overlap and distance tests shared by placement and sampling.

use crate::types::GridPos;

use super::model::Platform;

/// Half-open spans `[a_start, a_start + a_len)` and `[b_start, b_start + b_len)`
/// share at least one cell.
pub(super) fn spans_overlap(a_start: i32, a_len: i32, b_start: i32, b_len: i32) -> bool {
    a_start < b_start + b_len && b_start < a_start + a_len
}

/// True when a candidate run would sit too close above or below `existing`.
pub(super) fn conflicts_with(
    existing: &Platform,
    x: i32,
    y: i32,
    length: i32,
    min_spacing: i32,
) -> bool {
    spans_overlap(existing.origin_x(), existing.length(), x, length)
        && existing.origin_y().abs_diff(y) < min_spacing.unsigned_abs()
}

/// Empty cells between the end of `left` and the start of `right`. Negative
/// when the spans overlap.
pub(super) fn horizontal_gap(left: &Platform, right: &Platform) -> i32 {
    right.origin_x() - left.end_x()
}

pub(super) fn vertical_gap(a: &Platform, b: &Platform) -> i32 {
    (b.origin_y() - a.origin_y()).abs()
}

pub(super) fn distance(a: GridPos, b: GridPos) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    dx.hypot(dy)
}

pub(super) fn is_far_from_all(candidate: GridPos, accepted: &[GridPos], min_distance: f32) -> bool {
    accepted.iter().all(|&other| distance(candidate, other) >= min_distance)
}

pub(super) fn span_within(start: i32, length: i32, low: i32, high: i32) -> bool {
    start >= low && start + length <= high
}
