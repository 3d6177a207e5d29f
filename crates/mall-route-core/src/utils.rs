use crate::models::Point;

/// Straight-line distance in grid units.
#[inline(always)]
pub fn calculate_distance(from: &Point, to: &Point) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (dx * dx + dy * dy).sqrt()
}
