//! Craft velocity integration: inertia with per-tick damping.

/// Fraction of the speed lost to drag every tick.
const FRICTION: f64 = 0.5;

/// Speeds below this magnitude snap to exactly zero, so the craft comes to a
/// full stop instead of decaying asymptotically.
const SPEED_EPSILON: f64 = 0.01;

/// Advance the craft's speed pair by one tick of directional input.
///
/// A non-zero direction is applied as an instantaneous acceleration, then
/// drag pulls the result toward zero whether or not a key was held.
pub fn update_speed(
    rows_speed: f64,
    columns_speed: f64,
    rows_direction: i8,
    columns_direction: i8,
) -> (f64, f64) {
    (
        integrate(rows_speed, rows_direction),
        integrate(columns_speed, columns_direction),
    )
}

fn integrate(speed: f64, direction: i8) -> f64 {
    let damped = (speed + f64::from(direction)) * (1.0 - FRICTION);
    if damped.abs() < SPEED_EPSILON {
        0.0
    } else {
        damped
    }
}
