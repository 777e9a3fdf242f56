use std::cell::Cell;

use super::*;
use crate::consts::{PIVOT_X, PIVOT_Y};
use crate::persist::MemoryStore;

/// Ticks only when the test says so.
#[derive(Default)]
struct ManualScheduler {
    ticks: RefCell<Vec<Box<dyn FnMut()>>>,
}

impl ManualScheduler {
    fn step(&self) {
        for tick in self.ticks.borrow_mut().iter_mut() {
            tick();
        }
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = ();

    fn on_tick(&self, tick: Box<dyn FnMut()>) {
        self.ticks.borrow_mut().push(tick);
    }
}

fn roll_max() -> f64 {
    0.99
}

#[test]
fn each_frame_eases_then_redraws() {
    let scheduler = ManualScheduler::default();
    let seesaw = Rc::new(RefCell::new(Seesaw::restore(
        Box::new(MemoryStore::default()),
        roll_max,
    )));
    let frames = Rc::new(Cell::new(0));
    let redraw: Rc<dyn Fn()> = {
        let frames = frames.clone();
        Rc::new(move || frames.set(frames.get() + 1))
    };
    animate(&scheduler, seesaw.clone(), redraw);

    scheduler.step();
    assert_eq!(frames.get(), 1);
    assert_eq!(seesaw.borrow().current_angle(), 0.0);

    seesaw.borrow_mut().click(PIVOT_X + 200.0, PIVOT_Y).unwrap();
    scheduler.step();
    assert_eq!(frames.get(), 2);
    assert!((seesaw.borrow().current_angle() - 3.0).abs() < 1e-12);

    let mut last_gap = f64::INFINITY;
    while seesaw.borrow().current_angle() != 30.0 {
        scheduler.step();
        let gap = 30.0 - seesaw.borrow().current_angle();
        assert!(gap < last_gap);
        last_gap = gap;
    }
    scheduler.step();
    assert_eq!(seesaw.borrow().current_angle(), 30.0);
}
