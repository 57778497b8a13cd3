//! Writes day and night snapshots of the scene as PPM images.

use mr::prelude::*;
use mr::{scene, util::pnm::save_ppm};

const DT: f32 = 0.016;

fn main() {
    let mut sim = Simulation::new(Params::default());

    // Run to the middle of boarding: doors open, passengers walking
    while sim.phase() != Phase::Boarding {
        sim.advance(DT);
    }
    for _ in 0..20 {
        sim.advance(DT);
    }

    let mut buf = Buf2::new((1000, 600));

    scene::draw(&sim, false, &mut buf);
    save_ppm("station-day.ppm", &buf).unwrap();

    scene::draw(&sim, true, &mut buf);
    save_ppm("station-night.ppm", &buf).unwrap();

    println!("wrote station-day.ppm and station-night.ppm");
}
