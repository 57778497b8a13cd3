//! Run statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Collects frame, tick, and plotted-pixel counts over a run.
///
/// The window main loop starts one of these, the demo bumps the counters
/// each frame, and the totals are printed when the program exits.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Wall-clock time spent running.
    pub time: Duration,
    /// Number of frames presented.
    pub frames: usize,
    /// Number of simulation ticks advanced.
    pub ticks: usize,
    /// Number of pixels painted by fills and raster strokes.
    pub points: usize,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Stats` instance that records the time of its creation.
    ///
    /// Call [`finish`][Self::finish] to write the elapsed time to
    /// `self.time`. Equivalent to [`Stats::new`] if the `std` feature is
    /// not enabled.
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer and records the elapsed time to `self.time`.
    ///
    /// No-op if the timer was not running. This method is also no-op
    /// unless the `std` feature is enabled.
    pub fn finish(self) -> Self {
        Self {
            #[cfg(feature = "std")]
            time: self.start.map(|st| st.elapsed()).unwrap_or(self.time),
            ..self
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let secs = if self.time.is_zero() {
            1.0
        } else {
            self.time.as_secs_f32()
        };
        let frames = self.frames.max(1);
        write!(
            f,
            " STATS  time {} │ frames {} ({:.1}/s) │ ticks {} │ points {} ({}/frame)",
            human_time(self.time),
            self.frames,
            self.frames as f32 / secs,
            self.ticks,
            human_num(self.points),
            human_num(self.points / frames),
        )
    }
}

fn human_num(n: usize) -> String {
    if n < 1_000 {
        format!("{n}")
    } else if n < 100_000 {
        format!("{:.1}k", n as f32 / 1_000.)
    } else if n < 1_000_000 {
        format!("{}k", n / 1_000)
    } else if n < 100_000_000 {
        format!("{:.1}M", n as f32 / 1_000_000.)
    } else {
        format!("{}M", n / 1_000_000)
    }
}

fn human_time(d: Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1e-3 {
        format!("{:.1}μs", secs * 1_000_000.)
    } else if secs < 1.0 {
        format!("{:.1}ms", secs * 1_000.)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        format!("{:.0}min {:02.0}s", secs / 60.0, secs % 60.0)
    }
}
