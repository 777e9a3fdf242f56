//! The seesaw controller: owns the placed weights, the angle pair and the
//! store they are written back to after every change.

#[cfg(test)]
#[path = "seesaw_test.rs"]
mod seesaw_test;

use super::AnimationState;
use crate::geometry::{click_to_distance, is_on_plank, to_local_plank_space};
use crate::model::{
    PlacedObject, SimulationState, WeightTotals, compute_target_angle, next_object_id,
    weight_from_roll, weight_totals,
};
use crate::persist::StateStore;
use crate::util::clog;

pub struct Seesaw {
    state: SimulationState,
    anim: AnimationState,
    store: Box<dyn StateStore>,
    /// Uniform source in `[0, 1)` for new weights.
    roll: fn() -> f64,
}

impl Seesaw {
    /// Load the last saved layout; the plank starts at its saved tilt.
    pub fn restore(store: Box<dyn StateStore>, roll: fn() -> f64) -> Self {
        let state = store.load();
        let anim = AnimationState::snapped(state.angle);
        clog(&format!(
            "restored {} weights, angle {:.2}",
            state.objects.len(),
            state.angle
        ));
        Self {
            state,
            anim,
            store,
            roll,
        }
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.state.objects
    }

    pub fn current_angle(&self) -> f64 {
        self.anim.current
    }

    pub fn target_angle(&self) -> f64 {
        self.anim.target
    }

    pub fn weight_totals(&self) -> WeightTotals {
        weight_totals(&self.state.objects)
    }

    /// Drop a weight if the canvas point lies on the plank as currently drawn.
    /// Returns the new object, or `None` for a miss.
    pub fn click(&mut self, canvas_x: f64, canvas_y: f64) -> Option<PlacedObject> {
        let local = to_local_plank_space(canvas_x, canvas_y, self.anim.current);
        if !is_on_plank(local) {
            return None;
        }
        Some(self.add_object(canvas_x, canvas_y))
    }

    /// Place a random weight under a canvas point. Callers check the hit first;
    /// the point is projected with the displayed (possibly mid-swing) angle.
    pub fn add_object(&mut self, canvas_x: f64, canvas_y: f64) -> PlacedObject {
        let local = to_local_plank_space(canvas_x, canvas_y, self.anim.current);
        let obj = PlacedObject {
            distance: click_to_distance(local.x),
            weight: weight_from_roll((self.roll)()),
            id: next_object_id(&self.state.objects),
        };
        self.state.objects.push(obj.clone());
        self.retarget();
        clog(&format!(
            "dropped {}kg at {:.1}, target {:.2}",
            obj.weight,
            obj.distance,
            self.target_angle()
        ));
        self.store.save(&self.state);
        obj
    }

    /// Clear the plank and level it immediately.
    pub fn reset(&mut self) {
        self.state = SimulationState::default();
        self.anim.snap_to(0.0);
        self.store.save(&self.state);
        clog("seesaw reset");
    }

    /// One animation frame; returns the angle to draw.
    pub fn tick(&mut self) -> f64 {
        self.anim.step()
    }

    fn retarget(&mut self) {
        let angle = compute_target_angle(&self.state.objects);
        self.state.angle = angle;
        self.anim.target = angle;
    }
}
