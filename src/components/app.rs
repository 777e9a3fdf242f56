use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use super::weight_panel::WeightPanel;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::frame::{RafScheduler, animate};
use crate::geometry::{DisplayRect, client_to_canvas};
use crate::persist::open_store;
use crate::render;
use crate::state::Seesaw;
use crate::util::cwarn;

#[function_component(App)]
pub fn app() -> Html {
    let canvas_ref = use_node_ref();
    let seesaw = use_mut_ref(|| Seesaw::restore(open_store(), js_sys::Math::random));
    // Labels only change on drop/reset, never per frame.
    let totals = use_state(|| seesaw.borrow().weight_totals());
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Mount: size the canvas, build the draw closure, start the RAF loop
    {
        let canvas_ref = canvas_ref.clone();
        let seesaw = seesaw.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with((), move |_| {
            let raf = match (web_sys::window(), canvas_ref.cast::<HtmlCanvasElement>()) {
                (Some(window), Some(canvas)) => {
                    canvas.set_width(CANVAS_WIDTH as u32);
                    canvas.set_height(CANVAS_HEIGHT as u32);
                    let draw: Rc<dyn Fn()> = {
                        let seesaw = seesaw.clone();
                        Rc::new(move || {
                            let Some(mut ctx) = canvas
                                .get_context("2d")
                                .ok()
                                .flatten()
                                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                            else {
                                return;
                            };
                            let s = seesaw.borrow();
                            render::draw(&mut ctx, s.current_angle(), s.objects());
                        })
                    };
                    *draw_ref.borrow_mut() = Some(draw.clone());
                    draw();
                    Some(animate(&RafScheduler::new(window), seesaw, draw))
                }
                _ => {
                    cwarn("no canvas to draw on; seesaw is not animated");
                    None
                }
            };
            move || drop(raf)
        });
    }

    let on_click = {
        let canvas_ref = canvas_ref.clone();
        let seesaw = seesaw.clone();
        let totals = totals.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let r = canvas.get_bounding_client_rect();
            let rect = DisplayRect {
                left: r.left(),
                top: r.top(),
                width: r.width(),
                height: r.height(),
            };
            let (x, y) = client_to_canvas(
                e.client_x() as f64,
                e.client_y() as f64,
                rect,
                canvas.width() as f64,
                canvas.height() as f64,
            );
            let mut s = seesaw.borrow_mut();
            if s.click(x, y).is_some() {
                totals.set(s.weight_totals());
            }
        })
    };

    let on_reset = {
        let seesaw = seesaw.clone();
        let totals = totals.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |()| {
            seesaw.borrow_mut().reset();
            totals.set(seesaw.borrow().weight_totals());
            // Redraw now rather than on the next frame
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:8px; padding:16px; font-family:sans-serif;">
            <h1 style="margin:0; font-size:22px;">{"Seesaw"}</h1>
            <canvas ref={canvas_ref} id="seesaw-canvas" onclick={on_click}
                style="display:block; max-width:100%; border:1px solid #ccc; background:#fafafa; cursor:pointer;"></canvas>
            <WeightPanel totals={*totals} on_reset={on_reset} />
        </div>
    }
}
