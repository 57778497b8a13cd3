//! The station-cycle animation state machine.
//!
//! A [`Simulation`] owns all animated state of the scene: the train's
//! longitudinal position and wheel angle, the sliding-door aperture, two
//! platform passengers, three drifting clouds, and a cycle counter. The
//! whole thing advances one fixed time step at a time through
//! [`advance`][Simulation::advance]; a renderer reads the state between
//! steps through the accessor methods.
//!
//! The cycle is a strict loop of eight [phases](Phase): the train rolls in
//! from the left, halts at the platform, opens its doors, waits for both
//! passengers to walk aboard, closes up, gets a green signal, and rolls off
//! to the right, at which point everything except the cycle counter resets.

use crate::math::{
    angle::{Angle, degs},
    vec::{Point2, pt2},
};

//
// Constants
//

// Phase pause durations, in seconds of simulation time.
const ARRIVE_PAUSE: f32 = 0.35;
const HALT_PAUSE: f32 = 0.6;
const DOOR_SETTLE: f32 = 0.2;
const BOARD_LINGER: f32 = 0.4;
const DEPART_DELAY: f32 = 0.5;

/// How far past the right stage edge the train travels before resetting.
const EXIT_MARGIN: f32 = 50.0;
/// Clouds wrap from `width + CLOUD_MARGIN` back to `-CLOUD_MARGIN`.
const CLOUD_MARGIN: f32 = 60.0;
/// Gait phase advance per second of walking.
const GAIT_RATE: f32 = 8.0;

//
// Types
//

/// One phase of the station cycle.
///
/// Exactly one phase is active at a time, and the transitions form a strict
/// cycle in declaration order, wrapping from the last variant to the first.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Rolling rightward toward the platform stop target.
    MovingToStation,
    /// Came to a halt; brief pause before the signal drops.
    Arriving,
    /// Standing at the platform under a red signal.
    Stopped,
    /// Door panels sliding open.
    DoorsOpening,
    /// Passengers walking to the door and slipping aboard.
    Boarding,
    /// Door panels sliding shut.
    DoorsClosing,
    /// Doors shut, signal green again; about to depart.
    ReadyToDepart,
    /// Rolling rightward off the stage.
    MovingAway,
}

/// Tunable parameters of the simulation.
///
/// The defaults reproduce the canonical scene; everything is in world units
/// (one unit per stage pixel) and seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Stage width.
    pub width: f32,
    /// Train speed while moving.
    pub train_speed: f32,
    /// Wheel revolutions per second while the train moves.
    pub wheel_factor: f32,
    /// Door aperture change per second while opening or closing.
    pub door_rate: f32,
    /// Train position at which it halts at the platform.
    pub stop_x: f32,
    /// Off-screen position each cycle starts from.
    pub start_x: f32,
    /// Offset of the boarding door from the train origin. The door target
    /// follows the train even though the train stands still while boarding.
    pub door_offset: f32,
    /// A passenger boards within this distance of the door target.
    pub board_dist: f32,
    /// Minimum door aperture for a passenger to slip through.
    pub board_door_min: f32,
}

/// A platform passenger.
///
/// Two passengers exist per cycle. Each is reset to its seed position when
/// the cycle restarts and deactivated when it boards the train; an inactive
/// passenger stays inactive until the next respawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Passenger {
    pub active: bool,
    pub pos: Point2,
    /// Walking speed toward the door.
    pub speed: f32,
    /// Unbounded leg-swing phase accumulator, in radians.
    pub gait: f32,
}

/// A background cloud drifting rightward across the stage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cloud {
    pub pos: Point2,
    pub scale: f32,
    pub speed: f32,
}

/// All animated state of the scene. See the [module docs](self).
#[derive(Clone, Debug)]
pub struct Simulation {
    pub params: Params,
    phase: Phase,
    phase_time: f32,
    train_x: f32,
    wheel: Angle,
    door: f32,
    passengers: [Passenger; 2],
    clouds: [Cloud; 3],
    cycle: u32,
}

//
// Inherent impls
//

impl Params {
    /// Returns the x coordinate past which a departing train has fully
    /// left the stage and the cycle resets.
    pub fn exit_x(&self) -> f32 {
        self.width + EXIT_MARGIN
    }
}

impl Simulation {
    /// Returns a simulation at the start of its first cycle.
    pub fn new(params: Params) -> Self {
        Self {
            phase: Phase::MovingToStation,
            phase_time: 0.0,
            train_x: params.start_x,
            wheel: Angle::ZERO,
            door: 0.0,
            passengers: spawned(),
            clouds: drifting(),
            cycle: 0,
            params,
        }
    }

    /// The current phase of the cycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Simulation time elapsed since the current phase was entered.
    pub fn phase_time(&self) -> f32 {
        self.phase_time
    }
    /// The train's longitudinal position.
    pub fn train_x(&self) -> f32 {
        self.train_x
    }
    /// The wheel rotation angle, kept within ±360°.
    pub fn wheel_angle(&self) -> Angle {
        self.wheel
    }
    /// The door aperture: 0 fully closed, 1 fully open.
    pub fn door(&self) -> f32 {
        self.door
    }
    /// The world x coordinate a boarding passenger walks toward.
    pub fn door_x(&self) -> f32 {
        self.train_x + self.params.door_offset
    }
    /// Whether the platform signal shows green. Derived from the phase:
    /// green whenever the train is moving or cleared to move.
    pub fn signal_green(&self) -> bool {
        use Phase::*;
        matches!(
            self.phase,
            MovingToStation | Arriving | ReadyToDepart | MovingAway
        )
    }
    /// The two platform passengers.
    pub fn passengers(&self) -> &[Passenger; 2] {
        &self.passengers
    }
    /// The three background clouds.
    pub fn clouds(&self) -> &[Cloud; 3] {
        &self.clouds
    }
    /// Number of completed cycles (departures) so far.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Advances all animated state by the time step `dt`.
    ///
    /// This is the single transition function of the state machine; call it
    /// at a steady rate with a fixed `dt` for correct apparent speed. Timer
    /// guards compare with `>=`, so a delta exactly equal to a phase
    /// duration completes that phase.
    pub fn advance(&mut self, dt: f32) {
        use Phase::*;

        self.phase_time += dt;

        match self.phase {
            MovingToStation => {
                self.door = 0.0;
                self.train_x += self.params.train_speed * dt;
                self.roll_wheels(dt);
                if self.train_x >= self.params.stop_x {
                    self.train_x = self.params.stop_x;
                    self.enter(Arriving);
                }
            }
            Arriving => {
                if self.phase_time >= ARRIVE_PAUSE {
                    self.enter(Stopped);
                }
            }
            Stopped => {
                if self.phase_time >= HALT_PAUSE {
                    self.enter(DoorsOpening);
                }
            }
            DoorsOpening => {
                self.door =
                    (self.door + self.params.door_rate * dt).min(1.0);
                if self.door >= 1.0 && self.phase_time >= DOOR_SETTLE {
                    self.enter(Boarding);
                }
            }
            Boarding => {
                let target = self.door_x();
                let door = self.door;
                let Params { board_dist, board_door_min, .. } = self.params;

                for p in &mut self.passengers {
                    if !p.active {
                        continue;
                    }
                    let dx = target - p.pos.x();
                    let step = p.speed * dt;
                    // Clamp so a passenger can't overshoot within one tick
                    p.pos.0[0] = if dx.abs() <= step {
                        target
                    } else if dx > 0.0 {
                        p.pos.x() + step
                    } else {
                        p.pos.x() - step
                    };
                    p.gait += GAIT_RATE * dt;

                    if (p.pos.x() - target).abs() < board_dist
                        && door > board_door_min
                    {
                        p.active = false;
                    }
                }

                if self.passengers.iter().all(|p| !p.active)
                    && self.phase_time >= BOARD_LINGER
                {
                    self.enter(DoorsClosing);
                }
            }
            DoorsClosing => {
                self.door =
                    (self.door - self.params.door_rate * dt).max(0.0);
                if self.door <= 0.0 {
                    self.enter(ReadyToDepart);
                }
            }
            ReadyToDepart => {
                if self.phase_time >= DEPART_DELAY {
                    self.enter(MovingAway);
                }
            }
            MovingAway => {
                self.train_x += self.params.train_speed * dt;
                self.roll_wheels(dt);
                if self.train_x > self.params.exit_x() {
                    self.train_x = self.params.start_x;
                    self.door = 0.0;
                    self.cycle += 1;
                    self.passengers = spawned();
                    self.enter(MovingToStation);
                }
            }
        }

        self.drift_clouds(dt);
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_time = 0.0;
    }

    fn roll_wheels(&mut self, dt: f32) {
        // Negative for forward rotation
        self.wheel -= degs(360.0) * (self.params.wheel_factor * dt);
        if self.wheel < -Angle::FULL {
            self.wheel += Angle::FULL;
        }
    }

    fn drift_clouds(&mut self, dt: f32) {
        let wrap = self.params.width + CLOUD_MARGIN;
        for c in &mut self.clouds {
            c.pos.0[0] += c.speed * dt;
            if c.pos.x() > wrap {
                c.pos.0[0] = -CLOUD_MARGIN;
            }
        }
    }
}

//
// Free fns
//

/// The passenger lineup at the start of each cycle.
fn spawned() -> [Passenger; 2] {
    let spawn = |x, speed, gait| Passenger {
        active: true,
        pos: pt2(x, 170.0),
        speed,
        gait,
    };
    [spawn(760.0, 90.0, 0.0), spawn(820.0, 80.0, 1.2)]
}

/// The cloud lineup at startup.
fn drifting() -> [Cloud; 3] {
    let drift = |x, y, scale, speed| Cloud { pos: pt2(x, y), scale, speed };
    [
        drift(120.0, 520.0, 1.0, 25.0),
        drift(520.0, 480.0, 1.1, 20.0),
        drift(860.0, 540.0, 0.9, 27.5),
    ]
}

//
// Foreign trait impls
//

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 1000.0,
            train_speed: 220.0,
            wheel_factor: 1.2,
            door_rate: 1.3,
            stop_x: 420.0,
            start_x: -520.0,
            door_offset: 305.0,
            board_dist: 2.0,
            board_door_min: 0.95,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase::*, *};

    const DT: f32 = 0.016;

    /// Ticks `sim` until it enters `phase`, returning the number of ticks.
    fn tick_until(sim: &mut Simulation, phase: Phase) -> u32 {
        for n in 1..=4000 {
            sim.advance(DT);
            if sim.phase() == phase {
                return n;
            }
        }
        panic!("{phase:?} not reached in 4000 ticks");
    }

    #[test]
    fn reaches_stop_target_exactly() {
        let mut sim = Simulation::default();
        // ceil((420 − (−520)) / 220 / 0.016) ticks to cover the approach
        assert_eq!(tick_until(&mut sim, Arriving), 268);
        assert_eq!(sim.train_x(), 420.0);
    }

    #[test]
    fn signal_green_iff_moving_or_cleared() {
        let mut sim = Simulation::default();
        for _ in 0..2000 {
            sim.advance(DT);
            let expect = matches!(
                sim.phase(),
                MovingToStation | Arriving | ReadyToDepart | MovingAway
            );
            assert_eq!(sim.signal_green(), expect, "in {:?}", sim.phase());
            if sim.cycle() > 0 {
                return;
            }
        }
        panic!("cycle did not complete");
    }

    #[test]
    fn door_bounded_and_monotonic() {
        let mut sim = Simulation::default();
        tick_until(&mut sim, DoorsOpening);
        let mut prev = sim.door();
        while sim.phase() == DoorsOpening {
            sim.advance(DT);
            assert!((0.0..=1.0).contains(&sim.door()));
            assert!(sim.door() >= prev, "aperture regressed while opening");
            prev = sim.door();
        }
        tick_until(&mut sim, DoorsClosing);
        let mut prev = sim.door();
        while sim.phase() == DoorsClosing {
            sim.advance(DT);
            assert!((0.0..=1.0).contains(&sim.door()));
            assert!(sim.door() <= prev, "aperture rose while closing");
            prev = sim.door();
        }
        assert_eq!(sim.door(), 0.0);
    }

    #[test]
    fn door_closed_outside_door_phases() {
        let mut sim = Simulation::default();
        for _ in 0..2000 {
            sim.advance(DT);
            match sim.phase() {
                DoorsOpening | Boarding | DoorsClosing => {}
                _ => assert_eq!(sim.door(), 0.0, "in {:?}", sim.phase()),
            }
            if sim.cycle() > 0 {
                return;
            }
        }
        panic!("cycle did not complete");
    }

    #[test]
    fn exact_duration_delta_completes_phase() {
        let mut sim = Simulation::default();
        tick_until(&mut sim, Stopped);
        sim.advance(0.6);
        assert_eq!(sim.phase(), DoorsOpening);
        assert_eq!(sim.door(), 0.0);
        sim.advance(DT);
        assert!(sim.door() > 0.0, "aperture should rise from 0");
    }

    #[test]
    fn passengers_board_before_doors_close() {
        let mut sim = Simulation::default();
        tick_until(&mut sim, Boarding);
        assert!(sim.passengers().iter().all(|p| p.active));

        tick_until(&mut sim, DoorsClosing);
        assert!(sim.passengers().iter().all(|p| !p.active));
    }

    #[test]
    fn deactivated_passenger_stays_inactive() {
        let mut sim = Simulation::default();
        tick_until(&mut sim, Boarding);
        // The nearer passenger boards first; the other keeps walking
        while sim.passengers()[1].active {
            sim.advance(DT);
            if !sim.passengers()[0].active {
                break;
            }
        }
        while sim.phase() == Boarding {
            assert!(!sim.passengers()[0].active);
            sim.advance(DT);
        }
    }

    #[test]
    fn passengers_never_overshoot_door() {
        let mut sim = Simulation::default();
        tick_until(&mut sim, Boarding);
        let target = sim.door_x();
        while sim.phase() == Boarding {
            sim.advance(DT);
            for p in sim.passengers() {
                assert!(p.pos.x() >= target, "walked past the door");
            }
        }
    }

    #[test]
    fn full_cycle_resets_all_but_counter() {
        let mut sim = Simulation::default();
        let fresh = sim.clone();
        tick_until(&mut sim, MovingAway);
        // Keep ticking until the off-stage reset fires
        while sim.cycle() == 0 {
            sim.advance(DT);
        }
        assert_eq!(sim.cycle(), 1);
        assert_eq!(sim.phase(), MovingToStation);
        assert_eq!(sim.door(), 0.0);
        assert_eq!(sim.train_x(), sim.params.start_x);
        assert_eq!(sim.passengers(), fresh.passengers());

        // The second cycle behaves like the first
        assert_eq!(tick_until(&mut sim, Arriving), 268);
        assert_eq!(sim.train_x(), 420.0);
    }

    #[test]
    fn wheel_angle_stays_bounded() {
        let mut sim = Simulation::default();
        for _ in 0..2000 {
            sim.advance(DT);
            let degs = sim.wheel_angle().to_degs();
            // Small slack for the radians-to-degrees conversion
            assert!((-360.001..=0.0).contains(&degs), "wheel at {degs}°");
            if sim.cycle() > 0 {
                return;
            }
        }
        panic!("cycle did not complete");
    }

    #[test]
    fn door_target_follows_train() {
        let mut sim = Simulation::default();
        assert_eq!(sim.door_x(), sim.train_x() + 305.0);
        sim.advance(DT);
        assert_eq!(sim.door_x(), sim.train_x() + 305.0);
    }

    #[test]
    fn clouds_drift_and_wrap() {
        let mut sim = Simulation::default();
        let mut wrapped = false;
        let mut prev = [0.0f32; 3];
        for _ in 0..3000 {
            for (p, c) in prev.iter_mut().zip(sim.clouds()) {
                *p = c.pos.x();
            }
            sim.advance(DT);
            for (p, c) in prev.iter().zip(sim.clouds()) {
                assert!(c.pos.x() <= sim.params.width + CLOUD_MARGIN + 1.0);
                assert!(c.pos.x() >= -CLOUD_MARGIN);
                wrapped |= c.pos.x() < *p;
            }
        }
        assert!(wrapped, "no cloud wrapped in 48 seconds");
    }

    #[test]
    fn default_params() {
        let p = Params::default();
        assert_eq!(p.train_speed, 220.0);
        assert_eq!(p.stop_x, 420.0);
        assert_eq!(p.start_x, -520.0);
        assert_eq!(p.board_dist, 2.0);
        assert_eq!(p.board_door_min, 0.95);
        assert_eq!(p.exit_x(), 1050.0);
    }
}
