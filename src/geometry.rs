//! Plank-space geometry: rotation about the pivot, hit testing and mapping
//! pointer positions into the canvas' intrinsic coordinates.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{PIVOT_X, PIVOT_Y, PLANK_HALF_LENGTH, PLANK_HALF_WIDTH};

/// A point in the plank's unrotated frame, origin at the pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

/// Where an element is drawn on the page, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotate `(x, y)` about the origin by `degrees` (canvas orientation, y down).
pub fn rotate(x: f64, y: f64, degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

/// Undo the plank's rotation for a canvas-space click.
pub fn to_local_plank_space(click_x: f64, click_y: f64, current_angle: f64) -> LocalPoint {
    let (x, y) = rotate(click_x - PIVOT_X, click_y - PIVOT_Y, -current_angle);
    LocalPoint { x, y }
}

/// Inclusive box test; the corners count as on the plank.
pub fn is_on_plank(local: LocalPoint) -> bool {
    local.x.abs() <= PLANK_HALF_LENGTH && local.y.abs() <= PLANK_HALF_WIDTH
}

pub fn click_to_distance(local_x: f64) -> f64 {
    local_x.clamp(-PLANK_HALF_LENGTH, PLANK_HALF_LENGTH)
}

/// Canvas position of a weight `distance` along the plank tilted by `angle`.
pub fn object_position(distance: f64, angle: f64) -> (f64, f64) {
    let (dx, dy) = rotate(distance, 0.0, angle);
    (PIVOT_X + dx, PIVOT_Y + dy)
}

/// Scale a viewport pointer position into intrinsic canvas coordinates.
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    rect: DisplayRect,
    intrinsic_width: f64,
    intrinsic_height: f64,
) -> (f64, f64) {
    let scale = |intrinsic: f64, displayed: f64| {
        if displayed > 0.0 { intrinsic / displayed } else { 1.0 }
    };
    (
        (client_x - rect.left) * scale(intrinsic_width, rect.width),
        (client_y - rect.top) * scale(intrinsic_height, rect.height),
    )
}
