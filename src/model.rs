//! Core data models for the seesaw.
//! Placed weights, the persisted simulation snapshot and the torque heuristic
//! that turns a set of weights into a tilt angle.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::consts::{ANGLE_DIVISOR, MAX_ANGLE, MAX_WEIGHT, MIN_WEIGHT};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Signed offset from the pivot along the plank; negative is the left side.
    pub distance: f64,
    pub weight: u32,
    pub id: f64,
}

impl PlacedObject {
    pub fn is_left(&self) -> bool {
        self.distance < 0.0
    }
}

/// What gets written to storage. `angle` is the last target angle and always
/// agrees with `compute_target_angle(&objects)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    #[serde(default, deserialize_with = "lenient")]
    pub objects: Vec<PlacedObject>,
    #[serde(default, deserialize_with = "lenient")]
    pub angle: f64,
}

/// Falsy (`null`, `false`, `0`, `""`) or unparseable fields fall back to
/// their default without affecting the other fields.
fn lenient<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(de)?;
    let falsy = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };
    if falsy {
        return Ok(T::default());
    }
    Ok(T::deserialize(value).unwrap_or_default())
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Torques {
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeightTotals {
    pub left: u32,
    pub right: u32,
}

/// Sum `weight * |distance|` per side. Zero distance counts as right.
pub fn compute_torques(objects: &[PlacedObject]) -> Torques {
    objects.iter().fold(Torques::default(), |mut t, obj| {
        let torque = (f64::from(obj.weight) * obj.distance).abs();
        if obj.is_left() {
            t.left += torque;
        } else {
            t.right += torque;
        }
        t
    })
}

/// Tilt in degrees: torque difference over 10, clamped to ±30.
pub fn compute_target_angle(objects: &[PlacedObject]) -> f64 {
    let t = compute_torques(objects);
    ((t.right - t.left) / ANGLE_DIVISOR).clamp(-MAX_ANGLE, MAX_ANGLE)
}

pub fn weight_totals(objects: &[PlacedObject]) -> WeightTotals {
    objects.iter().fold(WeightTotals::default(), |mut w, obj| {
        if obj.is_left() {
            w.left = w.left.saturating_add(obj.weight);
        } else {
            w.right = w.right.saturating_add(obj.weight);
        }
        w
    })
}

/// Map a uniform roll in `[0, 1)` onto an integer weight in 1..=10.
pub fn weight_from_roll(roll: f64) -> u32 {
    let w = (roll * f64::from(MAX_WEIGHT)).floor() as i64 + 1;
    w.clamp(i64::from(MIN_WEIGHT), i64::from(MAX_WEIGHT)) as u32
}

/// Next id: one above the largest id in use, so it never collides.
pub fn next_object_id(objects: &[PlacedObject]) -> f64 {
    let max = objects.iter().map(|o| o.id).fold(0.0_f64, f64::max);
    max.floor() + 1.0
}
