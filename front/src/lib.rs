//! Frontends for creating simple applications with `metrorail`.

use std::time::Duration;

use metrorail_core::{stats::Stats, util::buf::Buf2};

#[cfg(feature = "minifb")]
pub mod minifb;

/// Common window dimensions.
pub mod dims {
    /// Width and height of a window, in pixels.
    pub type Dims = (u32, u32);

    /// The canonical 1000×600 stage.
    pub const STAGE_1000_600: Dims = (1000, 600);
    /// A smaller stage for quick tests.
    pub const STAGE_500_300: Dims = (500, 300);
}

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Framebuffer in which to draw, in `0x00_RR_GG_BB` format.
    pub buf: &'a mut Buf2<u32>,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// Run statistics, printed when the main loop exits.
    pub stats: &'a mut Stats,
}
