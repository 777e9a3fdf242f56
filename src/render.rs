//! Rendering: draws the seesaw scene onto a 2D surface.
//!
//! `draw` only reads the angle and the placed weights; it never touches
//! simulation state. The browser surface is `CanvasRenderingContext2d`, whose
//! fallible calls are ignored the same way a frame would be skipped.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::geometry::object_position;
use crate::model::PlacedObject;

/// The subset of a 2D canvas the scene needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str, width: f64);
    fn set_line_dash(&mut self, segments: &[f64]);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Full circle added to the current path.
    fn circle(&mut self, x: f64, y: f64, radius: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    /// Font plus centred/top text placement.
    fn set_font(&mut self, font: &str);
    fn measure_text(&mut self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }
    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }
    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }
    fn translate(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::translate(self, x, y).ok();
    }
    fn rotate(&mut self, radians: f64) {
        CanvasRenderingContext2d::rotate(self, radians).ok();
    }
    fn set_fill(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }
    fn set_stroke(&mut self, color: &str, width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
    }
    fn set_line_dash(&mut self, segments: &[f64]) {
        let arr = js_sys::Array::new();
        for s in segments {
            arr.push(&JsValue::from_f64(*s));
        }
        CanvasRenderingContext2d::set_line_dash(self, &arr).ok();
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
    }
    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }
    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.arc(x, y, radius, 0.0, PI * 2.0).ok();
    }
    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }
    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
        self.set_text_align("center");
        self.set_text_baseline("top");
    }
    fn measure_text(&mut self, text: &str) -> f64 {
        CanvasRenderingContext2d::measure_text(self, text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }
}

/// Marker radius grows with weight.
pub fn marker_radius(weight: u32) -> f64 {
    10.0 + f64::from(weight) * 2.0
}

/// Heavier weights are redder.
pub fn marker_color(weight: u32) -> String {
    format!("rgb({}, 100, 150)", 100 + weight * 15)
}

pub fn weight_label(weight: u32) -> String {
    format!("{}kg", weight)
}

/// Draw the full scene for a plank tilted `angle` degrees.
pub fn draw<S: Surface + ?Sized>(s: &mut S, angle: f64, objects: &[PlacedObject]) {
    s.clear(CANVAS_WIDTH, CANVAS_HEIGHT);
    draw_plank(s, angle);
    draw_pivot(s);
    for obj in objects {
        draw_object(s, angle, obj);
    }
}

fn draw_plank<S: Surface + ?Sized>(s: &mut S, angle: f64) {
    s.save();
    s.translate(PIVOT_X, PIVOT_Y);
    s.rotate(angle.to_radians());

    let (x, y) = (-PLANK_HALF_LENGTH, -PLANK_HALF_WIDTH);
    s.set_fill(PLANK_FILL);
    s.fill_rect(x, y, PLANK_LENGTH, PLANK_WIDTH);
    s.set_stroke(PLANK_STROKE, 2.0);
    s.stroke_rect(x, y, PLANK_LENGTH, PLANK_WIDTH);

    // Distance ticks, none at the pivot
    s.set_stroke(GRID_STROKE, 1.0);
    s.set_line_dash(&GRID_DASH);
    let spacing = PLANK_LENGTH / f64::from(GRID_TICKS_PER_SIDE * 2);
    for i in -GRID_TICKS_PER_SIDE..=GRID_TICKS_PER_SIDE {
        if i == 0 {
            continue;
        }
        let gx = spacing * f64::from(i);
        s.begin_path();
        s.move_to(gx, -PLANK_HALF_WIDTH - GRID_OVERHANG);
        s.line_to(gx, PLANK_HALF_WIDTH + GRID_OVERHANG);
        s.stroke();
    }
    s.set_line_dash(&[]);

    s.restore();
}

fn draw_pivot<S: Surface + ?Sized>(s: &mut S) {
    s.set_fill(PIVOT_FILL);
    s.begin_path();
    s.circle(PIVOT_X, PIVOT_Y, PIVOT_RADIUS);
    s.fill();
    s.set_stroke(PIVOT_STROKE, 2.0);
    s.stroke();

    s.set_fill(STAND_FILL);
    s.fill_rect(
        PIVOT_X - STAND_WIDTH / 2.0,
        PIVOT_Y + PIVOT_RADIUS,
        STAND_WIDTH,
        STAND_HEIGHT,
    );
}

fn draw_object<S: Surface + ?Sized>(s: &mut S, angle: f64, obj: &PlacedObject) {
    let (x, y) = object_position(obj.distance, angle);
    let radius = marker_radius(obj.weight);

    s.set_fill(&marker_color(obj.weight));
    s.begin_path();
    s.circle(x, y, radius);
    s.fill();

    let text = weight_label(obj.weight);
    s.set_font(LABEL_FONT);
    let text_w = s.measure_text(&text);
    s.set_fill(LABEL_BACKING);
    s.fill_rect(x - text_w / 2.0 - 3.0, y + radius + 8.0, text_w + 6.0, 14.0);
    s.set_fill(LABEL_TEXT);
    s.fill_text(&text, x, y + radius + 10.0);

    // Outlines the marker circle, still the current path
    s.set_stroke(PIVOT_STROKE, MARKER_OUTLINE_WIDTH);
    s.stroke();
}
