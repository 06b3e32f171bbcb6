//! Axis-aligned collision predicates.
//!
//! Rows grow downward, columns rightward. Every extent is half-open
//! (`[start, start + len)`), so rectangles that merely touch along an edge do
//! not collide, and degenerate sizes collide with nothing.

use crate::entities::Obstacle;

/// True iff rectangle A (`a_row, a_column, a_height, a_width`) intersects
/// rectangle B. Symmetric in its arguments.
pub fn overlaps(
    a_row: f64,
    a_column: f64,
    a_height: f64,
    a_width: f64,
    b_row: f64,
    b_column: f64,
    b_height: f64,
    b_width: f64,
) -> bool {
    spans_overlap(a_row, a_height, b_row, b_height)
        && spans_overlap(a_column, a_width, b_column, b_width)
}

fn spans_overlap(a_start: f64, a_len: f64, b_start: f64, b_len: f64) -> bool {
    if a_len <= 0.0 || b_len <= 0.0 {
        return false;
    }
    a_start < b_start + b_len && b_start < a_start + a_len
}

/// Point probe: does a single-cell rectangle at (`row`, `column`) fall inside
/// the obstacle? Used for projectile hits.
pub fn obstacle_hits_point(obstacle: &Obstacle, row: f64, column: f64) -> bool {
    overlaps(
        obstacle.row,
        f64::from(obstacle.column),
        f64::from(obstacle.height),
        f64::from(obstacle.width),
        row,
        column,
        1.0,
        1.0,
    )
}

/// Rectangle probe: does a frame anchored at (`row`, `column`) with the given
/// extents intersect the obstacle? Used for craft hits.
pub fn obstacle_hits_frame(
    obstacle: &Obstacle,
    row: f64,
    column: f64,
    height: u16,
    width: u16,
) -> bool {
    overlaps(
        obstacle.row,
        f64::from(obstacle.column),
        f64::from(obstacle.height),
        f64::from(obstacle.width),
        row,
        column,
        f64::from(height),
        f64::from(width),
    )
}
