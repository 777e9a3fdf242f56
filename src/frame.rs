//! Per-frame tick sources. The browser drives ticks with
//! `requestAnimationFrame`; tests step them by hand.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::state::Seesaw;

pub trait FrameScheduler {
    /// Keeps the loop alive; dropping it stops further ticks.
    type Handle;

    /// Call `tick` once per displayed frame until the handle is dropped.
    fn on_tick(&self, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Ease the seesaw one step per frame, then redraw.
pub fn animate<S: FrameScheduler>(
    scheduler: &S,
    seesaw: Rc<RefCell<Seesaw>>,
    redraw: Rc<dyn Fn()>,
) -> S::Handle {
    scheduler.on_tick(Box::new(move || {
        seesaw.borrow_mut().tick();
        redraw();
    }))
}

pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running RAF loop; cancels the pending frame on drop.
pub struct RafLoop {
    window: Window,
    raf_id: Rc<RefCell<Option<i32>>>,
    _closure: FrameClosure,
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

fn request(window: &Window, cell: &FrameClosure) -> Option<i32> {
    let cell = cell.borrow();
    let closure = cell.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl FrameScheduler for RafScheduler {
    type Handle = RafLoop;

    fn on_tick(&self, mut tick: Box<dyn FnMut()>) -> RafLoop {
        let raf_id = Rc::new(RefCell::new(None));
        let closure_cell: FrameClosure = Rc::new(RefCell::new(None));
        {
            let raf_id_loop = raf_id.clone();
            let window_loop = self.window.clone();
            // Weak so the closure does not keep its own cell alive.
            let cell_loop = Rc::downgrade(&closure_cell);
            *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                tick();
                if let Some(cell) = cell_loop.upgrade() {
                    *raf_id_loop.borrow_mut() = request(&window_loop, &cell);
                }
            }) as Box<dyn FnMut()>));
        }
        *raf_id.borrow_mut() = request(&self.window, &closure_cell);
        RafLoop {
            window: self.window.clone(),
            raf_id,
            _closure: closure_cell,
        }
    }
}
