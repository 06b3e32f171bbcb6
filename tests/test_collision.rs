use orbit_patrol::collision::{obstacle_hits_frame, obstacle_hits_point, overlaps};
use orbit_patrol::entities::Obstacle;

fn obstacle(row: f64, column: i32, height: u16, width: u16) -> Obstacle {
    Obstacle { row, column, height, width }
}

// ── Rectangle overlap ─────────────────────────────────────────────────────────

#[test]
fn overlapping_rectangles_collide() {
    assert!(overlaps(0.0, 0.0, 4.0, 4.0, 2.0, 2.0, 4.0, 4.0));
}

#[test]
fn disjoint_rectangles_do_not_collide() {
    assert!(!overlaps(0.0, 0.0, 2.0, 2.0, 10.0, 10.0, 2.0, 2.0));
}

#[test]
fn contained_rectangle_collides() {
    assert!(overlaps(0.0, 0.0, 10.0, 10.0, 4.0, 4.0, 1.0, 1.0));
}

#[test]
fn touching_row_edges_do_not_collide() {
    // rows 0..2 against rows 2..4, same columns
    assert!(!overlaps(0.0, 0.0, 2.0, 5.0, 2.0, 0.0, 2.0, 5.0));
}

#[test]
fn touching_column_edges_do_not_collide() {
    // columns 0..3 against columns 3..6, same rows
    assert!(!overlaps(0.0, 0.0, 5.0, 3.0, 0.0, 3.0, 5.0, 3.0));
}

#[test]
fn overlap_is_symmetric() {
    let rectangles = [
        (0.0, 0.0, 4.0, 4.0),
        (2.0, 2.0, 4.0, 4.0),
        (2.0, 0.0, 2.0, 5.0),
        (10.0, 10.0, 1.0, 1.0),
        (0.0, 4.0, 3.0, 3.0),
        (-2.0, -2.0, 3.0, 3.0),
    ];
    for &(a_row, a_col, a_h, a_w) in &rectangles {
        for &(b_row, b_col, b_h, b_w) in &rectangles {
            assert_eq!(
                overlaps(a_row, a_col, a_h, a_w, b_row, b_col, b_h, b_w),
                overlaps(b_row, b_col, b_h, b_w, a_row, a_col, a_h, a_w),
                "asymmetric for {:?} vs {:?}",
                (a_row, a_col, a_h, a_w),
                (b_row, b_col, b_h, b_w),
            );
        }
    }
}

#[test]
fn degenerate_sizes_never_collide() {
    // Zero and negative extents are zero-area, even at the same spot
    assert!(!overlaps(5.0, 5.0, 0.0, 3.0, 5.0, 5.0, 3.0, 3.0));
    assert!(!overlaps(5.0, 5.0, 3.0, 0.0, 5.0, 5.0, 3.0, 3.0));
    assert!(!overlaps(5.0, 5.0, -1.0, 3.0, 5.0, 5.0, 3.0, 3.0));
    assert!(!overlaps(5.0, 5.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0));
}

// ── Point probe (projectile vs obstacle) ─────────────────────────────────────

#[test]
fn point_inside_obstacle_hits() {
    let o = obstacle(0.0, 10, 3, 4);
    assert!(obstacle_hits_point(&o, 0.0, 10.0));
    assert!(obstacle_hits_point(&o, 2.0, 13.0));
    assert!(obstacle_hits_point(&o, 1.5, 11.5));
}

#[test]
fn point_past_bottom_edge_misses() {
    // Height 3 covers rows [0, 3); row 3 is one past the bottom edge
    let o = obstacle(0.0, 10, 3, 4);
    assert!(!obstacle_hits_point(&o, 3.0, 10.0));
}

#[test]
fn point_past_right_edge_misses() {
    let o = obstacle(0.0, 10, 3, 4);
    assert!(!obstacle_hits_point(&o, 0.0, 14.0));
    assert!(!obstacle_hits_point(&o, 0.0, 9.0));
}

// ── Frame probe (craft vs obstacle) ──────────────────────────────────────────

#[test]
fn frame_overlapping_obstacle_hits() {
    let o = obstacle(5.0, 20, 4, 6);
    // Craft frame anchored so its bottom-right corner dips into the obstacle
    assert!(obstacle_hits_frame(&o, 3.0, 18.0, 3, 3));
}

#[test]
fn frame_touching_obstacle_misses() {
    let o = obstacle(5.0, 20, 4, 6);
    // Frame rows 2..5 end exactly where the obstacle begins
    assert!(!obstacle_hits_frame(&o, 2.0, 20.0, 3, 3));
}

#[test]
fn frame_far_from_obstacle_misses() {
    let o = obstacle(5.0, 20, 4, 6);
    assert!(!obstacle_hits_frame(&o, 15.0, 60.0, 9, 5));
}
