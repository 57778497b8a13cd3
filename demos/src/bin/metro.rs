use std::ops::ControlFlow::Continue;

use minifb::Key;

use mr::prelude::*;
use mr::scene;

use mr_front::{dims::STAGE_1000_600, minifb::Window};

/// Fixed simulation step, matching the 60 fps frame cap.
const DT: f32 = 0.016;

fn main() {
    let mut win = Window::builder()
        .title("metrorail//station")
        .dims(STAGE_1000_600)
        .build()
        .expect("should create window");

    let mut sim = Simulation::new(Params::default());
    let mut night = false;

    win.run(|frame| {
        if frame.win.imp.is_key_down(Key::N) {
            night = true;
        }
        if frame.win.imp.is_key_down(Key::D) {
            night = false;
        }

        sim.advance(DT);
        frame.stats.ticks += 1;
        frame.stats.points += scene::draw(&sim, night, frame.buf);

        Continue(())
    });
}
