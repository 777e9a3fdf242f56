// Displayed vs. target tilt, eased once per frame
use crate::consts::{ANIMATION_SPEED, SNAP_THRESHOLD};

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Angle currently drawn, degrees.
    pub current: f64,
    /// Angle implied by the placed weights, degrees.
    pub target: f64,
}

impl AnimationState {
    /// Both angles at `angle`; used on restore so the plank does not swing.
    pub fn snapped(angle: f64) -> Self {
        Self {
            current: angle,
            target: angle,
        }
    }

    pub fn snap_to(&mut self, angle: f64) {
        *self = Self::snapped(angle);
    }

    #[cfg(test)]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one frame and return the angle to draw.
    pub fn step(&mut self) -> f64 {
        if (self.current - self.target).abs() > SNAP_THRESHOLD {
            self.current += (self.target - self.current) * ANIMATION_SPEED;
        } else {
            self.current = self.target;
        }
        self.current
    }
}
