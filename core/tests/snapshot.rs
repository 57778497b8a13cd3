#![cfg(feature = "std")]

use metrorail_core::{
    prelude::*,
    scene,
    util::pnm::write_ppm,
};

const DT: f32 = 0.016;

#[test]
fn frame_to_ppm() {
    let mut sim = Simulation::new(Params::default());
    while sim.phase() != Phase::Boarding {
        sim.advance(DT);
    }

    let mut buf = Buf2::new((1000, 600));
    let points = scene::draw(&sim, false, &mut buf);
    assert!(points > 0);

    let mut out = Vec::new();
    write_ppm(&mut out, &buf).expect("write to a Vec should not fail");

    let header = b"P6\n1000 600\n255\n";
    assert_eq!(&out[..header.len()], header);
    assert_eq!(out.len(), header.len() + 1000 * 600 * 3);
}

#[test]
fn day_and_night_frames_differ() {
    let sim = Simulation::new(Params::default());

    let mut day = Buf2::new((1000, 600));
    let mut night = Buf2::new((1000, 600));
    scene::draw(&sim, false, &mut day);
    scene::draw(&sim, true, &mut night);

    assert_ne!(day.data(), night.data());
}
