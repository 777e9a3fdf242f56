//! Fixed dimensions and tuning values for the seesaw scene.
//!
//! All geometry is expressed in the canvas' intrinsic coordinate space.

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const PIVOT_X: f64 = CANVAS_WIDTH / 2.0;
pub const PIVOT_Y: f64 = CANVAS_HEIGHT / 2.0;

pub const PLANK_LENGTH: f64 = 400.0;
pub const PLANK_WIDTH: f64 = 20.0;
pub const PLANK_HALF_LENGTH: f64 = PLANK_LENGTH / 2.0;
pub const PLANK_HALF_WIDTH: f64 = PLANK_WIDTH / 2.0;
pub const PIVOT_RADIUS: f64 = 15.0;

/// Tilt limit in degrees, both directions.
pub const MAX_ANGLE: f64 = 30.0;
/// Torque difference per degree of tilt.
pub const ANGLE_DIVISOR: f64 = 10.0;
/// Fraction of the remaining gap closed per frame.
pub const ANIMATION_SPEED: f64 = 0.1;
/// Below this gap (degrees) the displayed angle snaps to the target.
pub const SNAP_THRESHOLD: f64 = 0.1;

pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 10;

/// localStorage slot holding the serialized simulation.
pub const STORAGE_KEY: &str = "seesawState";

// Scene styling
pub const PLANK_FILL: &str = "#8B4513";
pub const PLANK_STROKE: &str = "#654321";
pub const GRID_STROKE: &str = "#ccc";
pub const GRID_DASH: [f64; 2] = [5.0, 5.0];
/// Ticks on each side of the pivot.
pub const GRID_TICKS_PER_SIDE: i32 = 4;
pub const GRID_OVERHANG: f64 = 10.0;
pub const PIVOT_FILL: &str = "#333";
pub const PIVOT_STROKE: &str = "#000";
pub const STAND_FILL: &str = "#555";
pub const STAND_WIDTH: f64 = 10.0;
pub const STAND_HEIGHT: f64 = 50.0;
pub const LABEL_FONT: &str = "bold 11px Arial";
pub const LABEL_BACKING: &str = "rgba(255, 255, 255, 0.9)";
pub const LABEL_TEXT: &str = "#000";
pub const MARKER_OUTLINE_WIDTH: f64 = 1.5;
