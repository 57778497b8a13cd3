//! Painting the station scene.
//!
//! Everything here is stateless: [`draw`] maps a [`Simulation`] snapshot
//! plus a night-mode flag onto the pixels of a buffer and returns how many
//! it touched. Shapes are positioned by composing translations (origin
//! parameters), rotations (rotated stroke endpoints), and scalings (scale
//! factors). Filled regions are painted directly, while every outline is
//! rasterized point by point with the [`raster`](crate::raster) primitives.
//!
//! World coordinates are y-up with the origin at the bottom-left of the
//! stage; the canvas flips rows when plotting. The canonical stage is
//! 1000×600 world units, one unit per pixel.

use crate::{
    math::{
        angle::{Angle, degs},
        color::{Color3, rgb},
        vec::{Point2, Point2i, Vec2, pt2, vec2},
    },
    raster::{bresenham_line, dda_line, midpoint_circle},
    sim::{Passenger, Simulation},
    util::buf::Buf2,
};

/// The vertical position of the train origin.
const TRAIN_Y: f32 = 135.0;
/// Coach dimensions and spacing.
const COACHES: i32 = 3;
const COACH_W: f32 = 170.0;
const COACH_H: f32 = 70.0;
const COACH_GAP: f32 = 8.0;

/// Paints one frame of the scene into `buf`.
///
/// Returns the number of pixels plotted (clipped pixels excluded).
pub fn draw(sim: &Simulation, night: bool, buf: &mut Buf2<u32>) -> usize {
    let pal = &palette(night);
    let c = &mut Canvas { buf, points: 0 };

    sky(c, pal);
    sun_moon(c, pal);
    buildings(c, pal);
    station(c, pal);
    track(c, pal);
    signal(c, pal, sim.signal_green());

    for cl in sim.clouds() {
        cloud(c, pal, cl.pos, cl.scale);
    }
    for p in sim.passengers() {
        passenger(c, pal, p, 1.0);
    }
    train(c, pal, sim.train_x(), sim.door(), sim.wheel_angle());

    c.points
}

//
// Canvas
//

/// Paint target wrapping a pixel buffer.
///
/// Plots in world coordinates (y-up), clips to the buffer bounds, and
/// counts the pixels it touches.
struct Canvas<'a> {
    buf: &'a mut Buf2<u32>,
    points: usize,
}

impl Canvas<'_> {
    fn width(&self) -> f32 {
        self.buf.width() as f32
    }
    fn height(&self) -> f32 {
        self.buf.height() as f32
    }

    /// Plots a single world-space point, if within bounds.
    fn plot(&mut self, p: Point2i, color: Color3) {
        let (w, h) = self.buf.dims();
        let (x, y) = (p.x(), p.y());
        if (0..w as i32).contains(&x) && (0..h as i32).contains(&y) {
            self.buf[[x as u32, h - 1 - y as u32]] = color.to_rgb_u32();
            self.points += 1;
        }
    }

    /// Fills the axis-aligned rectangle with origin `o` (bottom-left)
    /// and the given size, clipped to the buffer.
    fn fill_rect(&mut self, o: Point2, size: Vec2, color: Color3) {
        let (w, h) = self.buf.dims();
        let x0 = round(o.x()).max(0);
        let y0 = round(o.y()).max(0);
        let x1 = round(o.x() + size.x()).min(w as i32);
        let y1 = round(o.y() + size.y()).min(h as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.plot(pt2(x, y), color);
            }
        }
    }

    /// Strokes a line with the incremental (DDA) rasterizer.
    fn stroke_dda(&mut self, p0: Point2, p1: Point2, color: Color3) {
        for p in dda_line(p0, p1) {
            self.plot(p, color);
        }
    }

    /// Strokes a line with the integer (Bresenham) rasterizer.
    fn stroke_line(&mut self, p0: Point2i, p1: Point2i, color: Color3) {
        for p in bresenham_line(p0, p1) {
            self.plot(p, color);
        }
    }

    /// Strokes a circle outline with the midpoint rasterizer.
    fn stroke_circle(&mut self, center: Point2i, r: i32, color: Color3) {
        for p in midpoint_circle(center, r) {
            self.plot(p, color);
        }
    }

    /// Outlines a rectangle with four DDA strokes.
    fn rect_outline_dda(&mut self, o: Point2, size: Vec2, color: Color3) {
        let (a, b) = (o, o + size);
        self.stroke_dda(a, pt2(b.x(), a.y()), color);
        self.stroke_dda(pt2(b.x(), a.y()), b, color);
        self.stroke_dda(b, pt2(a.x(), b.y()), color);
        self.stroke_dda(pt2(a.x(), b.y()), a, color);
    }

    /// Outlines a rectangle with four Bresenham strokes.
    fn rect_outline(&mut self, o: Point2i, size: Vec2<i32>, color: Color3) {
        let (a, b) = (o, o + size);
        self.stroke_line(a, pt2(b.x(), a.y()), color);
        self.stroke_line(pt2(b.x(), a.y()), b, color);
        self.stroke_line(b, pt2(a.x(), b.y()), color);
        self.stroke_line(pt2(a.x(), b.y()), a, color);
    }
}

//
// Palette
//

/// Every color the scene uses, preselected for day or night.
struct Palette {
    sky: Color3,
    ground: Color3,
    /// The sun by day, the moon by night.
    celestial: Color3,
    /// Sky-colored overlay producing the moon's crescent; night only.
    crescent: Option<Color3>,
    cloud: Color3,
    building: Color3,
    building_edge: Color3,
    window: Color3,
    platform: Color3,
    platform_edge: Color3,
    station: Color3,
    station_edge: Color3,
    sign: Color3,
    sign_text: Color3,
    rail: Color3,
    sleeper: Color3,
    pole: Color3,
    signal_box: Color3,
    red_on: Color3,
    red_off: Color3,
    green_on: Color3,
    green_off: Color3,
    body: Color3,
    skin: Color3,
    leg: Color3,
    coach: Color3,
    roof: Color3,
    coach_window: Color3,
    coach_edge: Color3,
    door_frame: Color3,
    door_panel: Color3,
    wheel: Color3,
}

fn palette(night: bool) -> Palette {
    if night {
        Palette {
            sky: shade(0.08, 0.10, 0.16),
            ground: shade(0.10, 0.18, 0.10),
            celestial: shade(0.90, 0.90, 0.95),
            crescent: Some(shade(0.10, 0.10, 0.15)),
            cloud: shade(0.75, 0.78, 0.85),
            building: shade(0.15, 0.17, 0.22),
            building_edge: shade(0.65, 0.70, 0.80),
            // Warm lit windows
            window: shade(0.95, 0.85, 0.40),
            platform: shade(0.25, 0.25, 0.28),
            platform_edge: shade(0.90, 0.85, 0.30),
            station: shade(0.18, 0.18, 0.22),
            station_edge: shade(0.65, 0.70, 0.80),
            sign: shade(0.30, 0.50, 0.90),
            sign_text: shade(1.0, 1.0, 1.0),
            rail: shade(0.55, 0.55, 0.60),
            sleeper: shade(0.35, 0.25, 0.20),
            pole: shade(0.65, 0.65, 0.70),
            signal_box: shade(0.20, 0.20, 0.24),
            red_on: shade(1.0, 0.15, 0.15),
            red_off: shade(0.25, 0.10, 0.10),
            green_on: shade(0.15, 1.0, 0.20),
            green_off: shade(0.10, 0.25, 0.10),
            body: shade(0.35, 0.55, 0.95),
            skin: shade(0.95, 0.80, 0.65),
            leg: shade(0.85, 0.85, 0.90),
            coach: shade(0.75, 0.18, 0.20),
            roof: shade(0.60, 0.12, 0.14),
            coach_window: shade(0.95, 0.85, 0.40),
            coach_edge: shade(0.85, 0.85, 0.90),
            door_frame: shade(0.90, 0.90, 0.95),
            door_panel: shade(0.30, 0.30, 0.35),
            wheel: shade(0.90, 0.90, 0.95),
        }
    } else {
        Palette {
            sky: shade(0.55, 0.80, 0.98),
            ground: shade(0.45, 0.75, 0.45),
            celestial: shade(1.0, 0.85, 0.20),
            crescent: None,
            cloud: shade(1.0, 1.0, 1.0),
            building: shade(0.78, 0.80, 0.86),
            building_edge: shade(0.30, 0.35, 0.45),
            window: shade(0.55, 0.70, 0.90),
            platform: shade(0.60, 0.60, 0.62),
            platform_edge: shade(0.95, 0.90, 0.20),
            station: shade(0.88, 0.88, 0.90),
            station_edge: shade(0.25, 0.30, 0.40),
            sign: shade(0.20, 0.40, 0.80),
            sign_text: shade(1.0, 1.0, 1.0),
            rail: shade(0.25, 0.25, 0.25),
            sleeper: shade(0.45, 0.30, 0.20),
            pole: shade(0.20, 0.20, 0.22),
            signal_box: shade(0.12, 0.12, 0.14),
            red_on: shade(1.0, 0.15, 0.15),
            red_off: shade(0.35, 0.10, 0.10),
            green_on: shade(0.15, 1.0, 0.20),
            green_off: shade(0.10, 0.35, 0.10),
            body: shade(0.20, 0.35, 0.85),
            skin: shade(1.0, 0.85, 0.70),
            leg: shade(0.10, 0.10, 0.12),
            coach: shade(0.92, 0.22, 0.22),
            roof: shade(0.80, 0.15, 0.15),
            coach_window: shade(0.55, 0.75, 0.95),
            coach_edge: shade(0.20, 0.20, 0.22),
            door_frame: shade(0.18, 0.18, 0.20),
            door_panel: shade(0.93, 0.93, 0.95),
            wheel: shade(0.05, 0.05, 0.05),
        }
    }
}

fn shade(r: f32, g: f32, b: f32) -> Color3 {
    rgb(r, g, b).to_color3()
}

fn round(c: f32) -> i32 {
    crate::math::float::f32::round(c) as i32
}

//
// Scenery
//

fn sky(c: &mut Canvas, pal: &Palette) {
    let (w, h) = (c.width(), c.height());
    c.fill_rect(pt2(0.0, 0.0), vec2(w, h), pal.sky);
    c.fill_rect(pt2(0.0, 0.0), vec2(w, 150.0), pal.ground);
}

fn sun_moon(c: &mut Canvas, pal: &Palette) {
    match pal.crescent {
        // Moon with a crescent bite taken out of it
        Some(crescent) => {
            c.stroke_circle(pt2(880, 520), 30, pal.celestial);
            c.stroke_circle(pt2(892, 528), 26, crescent);
        }
        None => c.stroke_circle(pt2(880, 520), 35, pal.celestial),
    }
}

fn buildings(c: &mut Canvas, pal: &Palette) {
    let lots = [
        (40.0, 120.0, 170.0),
        (180.0, 90.0, 140.0),
        (290.0, 140.0, 190.0),
        (460.0, 110.0, 160.0),
        (590.0, 160.0, 210.0),
        (780.0, 120.0, 175.0),
    ];
    for (x, w, h) in lots {
        building(c, pal, pt2(x, 230.0), vec2(w, h), 1.0);
    }
}

/// A skyline building at `origin`, scaled by `s`, with a grid of windows.
fn building(
    c: &mut Canvas,
    pal: &Palette,
    origin: Point2,
    size: Vec2,
    s: f32,
) {
    c.fill_rect(origin, size * s, pal.building);
    c.rect_outline_dda(origin, size * s, pal.building_edge);

    let (cols, rows) = (4, 5);
    let wx = size.x() / (cols + 1) as f32;
    let wy = size.y() / (rows + 1) as f32;
    for row in 1..=rows {
        for col in 1..=cols {
            let o = vec2(col as f32 * wx - 10.0, row as f32 * wy - 8.0);
            c.fill_rect(origin + o * s, vec2(18.0, 14.0) * s, pal.window);
        }
    }
}

fn station(c: &mut Canvas, pal: &Palette) {
    let w = c.width();

    // Platform with its painted edge line
    c.fill_rect(pt2(0.0, 150.0), vec2(w, 80.0), pal.platform);
    c.stroke_line(pt2(0, 150), pt2(w as i32, 150), pal.platform_edge);

    // Station house
    c.fill_rect(pt2(680.0, 230.0), vec2(280.0, 170.0), pal.station);
    c.rect_outline(pt2(680, 230), vec2(280, 170), pal.station_edge);

    // Name board
    c.fill_rect(pt2(740.0, 350.0), vec2(160.0, 40.0), pal.sign);
    sign_letters(c, pal.sign_text);
}

/// "METRO", stroked letter by letter.
fn sign_letters(c: &mut Canvas, ink: Color3) {
    let strokes = [
        // M
        (755.0, 360.0, 755.0, 380.0),
        (755.0, 380.0, 765.0, 370.0),
        (765.0, 370.0, 775.0, 380.0),
        (775.0, 380.0, 775.0, 360.0),
        // E
        (790.0, 360.0, 790.0, 380.0),
        (790.0, 380.0, 810.0, 380.0),
        (790.0, 370.0, 805.0, 370.0),
        (790.0, 360.0, 810.0, 360.0),
        // T
        (825.0, 380.0, 845.0, 380.0),
        (835.0, 380.0, 835.0, 360.0),
        // R
        (860.0, 360.0, 860.0, 380.0),
        (860.0, 380.0, 878.0, 380.0),
        (878.0, 380.0, 878.0, 370.0),
        (878.0, 370.0, 860.0, 370.0),
        (860.0, 370.0, 880.0, 360.0),
    ];
    for (x0, y0, x1, y1) in strokes {
        c.stroke_dda(pt2(x0, y0), pt2(x1, y1), ink);
    }
    // O
    c.stroke_circle(pt2(915, 370), 10, ink);
}

fn track(c: &mut Canvas, pal: &Palette) {
    let w = c.width() as i32;
    c.stroke_line(pt2(0, 120), pt2(w, 120), pal.rail);
    c.stroke_line(pt2(0, 95), pt2(w, 95), pal.rail);

    let mut x = 0.0;
    while x < c.width() {
        c.fill_rect(pt2(x, 92.0), vec2(18.0, 32.0), pal.sleeper);
        x += 35.0;
    }
}

fn signal(c: &mut Canvas, pal: &Palette, green: bool) {
    c.fill_rect(pt2(610.0, 150.0), vec2(12.0, 140.0), pal.pole);
    c.fill_rect(pt2(590.0, 260.0), vec2(55.0, 85.0), pal.signal_box);

    let (green_lamp, red_lamp) = if green {
        (pal.green_on, pal.red_off)
    } else {
        (pal.green_off, pal.red_on)
    };
    c.stroke_circle(pt2(617, 285), 12, green_lamp);
    c.stroke_circle(pt2(617, 320), 12, red_lamp);
}

/// A cloud at `origin`, scaled by `s`: a flat base and three puffs.
fn cloud(c: &mut Canvas, pal: &Palette, origin: Point2, s: f32) {
    c.fill_rect(
        origin + vec2(-35.0, -10.0) * s,
        vec2(90.0, 22.0) * s,
        pal.cloud,
    );
    for (dx, dy, r) in [(-20.0, 2.0, 18.0), (5.0, 10.0, 22.0), (30.0, 2.0, 18.0)]
    {
        let center = origin + vec2(dx, dy) * s;
        c.stroke_circle(center.map(round), round(r * s), pal.cloud);
    }
}

/// A passenger at their current position, scaled by `s`.
///
/// Legs swing ±22° with the gait phase; each is a rotated thick stroke
/// hanging from its hip.
fn passenger(c: &mut Canvas, pal: &Palette, p: &Passenger, s: f32) {
    if !p.active {
        return;
    }
    let origin = p.pos;

    c.fill_rect(origin + vec2(-6.0, 0.0) * s, vec2(12.0, 26.0) * s, pal.body);
    c.stroke_circle(
        (origin + vec2(0.0, 34.0) * s).map(round),
        round(8.0 * s),
        pal.skin,
    );

    let swing = degs(crate::math::float::f32::sin(p.gait) * 22.0);
    leg(c, pal, origin + vec2(-3.0, 0.0) * s, swing, s);
    leg(c, pal, origin + vec2(3.0, 0.0) * s, -swing, s);
}

/// One leg: a 3-pixel-thick stroke of length 14 rotated by `swing`
/// about the hip.
fn leg(c: &mut Canvas, pal: &Palette, hip: Point2, swing: Angle, s: f32) {
    let (sin, cos) = swing.sin_cos();
    // (0, -14) rotated by `swing`
    let foot = vec2(14.0 * sin, -14.0 * cos) * s;
    for off in [-1.0, 0.0, 1.0] {
        let o = vec2(off, 0.0);
        c.stroke_dda(hip + o, hip + o + foot, pal.leg);
    }
}

/// A wheel at `center`: a midpoint-circle rim and four spokes rotated
/// by the current wheel angle.
fn wheel(c: &mut Canvas, pal: &Palette, center: Point2, r: f32, angle: Angle) {
    c.stroke_circle(center.map(round), round(r), pal.wheel);

    for quarter in 0..4 {
        let dir = angle + degs(90.0) * quarter as f32;
        let (sin, cos) = dir.sin_cos();
        let rim = center + vec2(r * cos, r * sin);
        c.stroke_dda(center, rim, pal.wheel);
    }
}

/// The train at longitudinal position `x`: three coaches, a sliding door
/// on the middle one opened to `door`, a front cabin, and spinning wheels.
fn train(c: &mut Canvas, pal: &Palette, x: f32, door: f32, angle: Angle) {
    let origin = pt2(x, TRAIN_Y);

    for i in 0..COACHES {
        let ox = i as f32 * (COACH_W + COACH_GAP);
        let o = origin + vec2(ox, 0.0);

        c.fill_rect(o + vec2(0.0, 20.0), vec2(COACH_W, COACH_H), pal.coach);
        c.fill_rect(o + vec2(0.0, 85.0), vec2(COACH_W, 12.0), pal.roof);
        c.fill_rect(
            o + vec2(15.0, 55.0),
            vec2(COACH_W - 30.0, 22.0),
            pal.coach_window,
        );
        c.rect_outline(
            (o + vec2(0.0, 20.0)).map(round),
            vec2(COACH_W as i32, COACH_H as i32 + 12),
            pal.coach_edge,
        );

        // Sliding double door on the middle coach only
        if i == 1 {
            coach_door(c, pal, o + vec2(65.0, 22.0), door);
        }
    }

    // Front cabin
    let nose = COACHES as f32 * (COACH_W + COACH_GAP);
    c.fill_rect(origin + vec2(nose, 30.0), vec2(70.0, 60.0), pal.coach);
    c.fill_rect(
        origin + vec2(nose + 20.0, 60.0),
        vec2(35.0, 18.0),
        pal.coach_window,
    );

    // Wheels under each coach and the cabin
    for i in 0..COACHES {
        let ox = i as f32 * (COACH_W + COACH_GAP);
        wheel(c, pal, origin + vec2(ox + 35.0, 18.0), 12.0, angle);
        wheel(c, pal, origin + vec2(ox + COACH_W - 35.0, 18.0), 12.0, angle);
    }
    wheel(c, pal, origin + vec2(nose + 20.0, 18.0), 12.0, angle);
    wheel(c, pal, origin + vec2(nose + 55.0, 18.0), 12.0, angle);
}

/// The double door: a frame and two panels that retract outward as the
/// aperture rises.
fn coach_door(c: &mut Canvas, pal: &Palette, o: Point2, door: f32) {
    let (w, h) = (40.0, 65.0);

    c.rect_outline(o.map(round), vec2(w as i32, h as i32), pal.door_frame);

    let slide = 0.5 * w * door;
    let panel = vec2(0.5 * w - slide, h);
    c.fill_rect(o, panel, pal.door_panel);
    c.fill_rect(o + vec2(0.5 * w + slide, 0.0), panel, pal.door_panel);
}

#[cfg(test)]
mod tests {
    use crate::sim::{Params, Phase, Simulation};

    use super::*;

    const DT: f32 = 0.016;

    fn frame(sim: &Simulation, night: bool) -> Buf2<u32> {
        let mut buf = Buf2::new((1000, 600));
        draw(sim, night, &mut buf);
        buf
    }

    /// Reads the pixel at world coordinates (x, y), y-up.
    fn world(buf: &Buf2<u32>, x: u32, y: u32) -> u32 {
        buf[[x, buf.height() - 1 - y]]
    }

    fn tick_until(sim: &mut Simulation, phase: Phase) {
        for _ in 0..4000 {
            sim.advance(DT);
            if sim.phase() == phase {
                return;
            }
        }
        panic!("{phase:?} not reached");
    }

    #[test]
    fn sky_and_platform_colors() {
        let sim = Simulation::default();

        let day = frame(&sim, false);
        assert_eq!(world(&day, 0, 599), shade(0.55, 0.80, 0.98).to_rgb_u32());
        assert_eq!(
            world(&day, 300, 160),
            shade(0.60, 0.60, 0.62).to_rgb_u32()
        );

        let night = frame(&sim, true);
        assert_eq!(
            world(&night, 0, 599),
            shade(0.08, 0.10, 0.16).to_rgb_u32()
        );
    }

    #[test]
    fn building_windows_light_up_at_night() {
        let sim = Simulation::default();
        // Inside the first window of the leftmost building
        let (x, y) = (60, 255);

        let day = frame(&sim, false);
        assert_eq!(world(&day, x, y), shade(0.55, 0.70, 0.90).to_rgb_u32());

        let night = frame(&sim, true);
        assert_eq!(world(&night, x, y), shade(0.95, 0.85, 0.40).to_rgb_u32());
    }

    #[test]
    fn signal_lamps_follow_aspect() {
        let mut sim = Simulation::default();

        // Fresh simulation: approaching, so the green lamp is lit
        let buf = frame(&sim, false);
        assert_eq!(world(&buf, 617, 297), shade(0.15, 1.0, 0.20).to_rgb_u32());
        assert_eq!(
            world(&buf, 617, 332),
            shade(0.35, 0.10, 0.10).to_rgb_u32()
        );

        tick_until(&mut sim, Phase::Stopped);
        let buf = frame(&sim, false);
        assert_eq!(world(&buf, 617, 332), shade(1.0, 0.15, 0.15).to_rgb_u32());
    }

    #[test]
    fn door_panels_retract_while_boarding() {
        let mut sim = Simulation::default();
        // Right panel interior, clear of the window strip
        let (x, y) = (683, 180);

        tick_until(&mut sim, Phase::Stopped);
        let buf = frame(&sim, false);
        assert_eq!(world(&buf, x, y), shade(0.93, 0.93, 0.95).to_rgb_u32());

        tick_until(&mut sim, Phase::Boarding);
        assert_eq!(sim.door(), 1.0);
        let buf = frame(&sim, false);
        assert_eq!(world(&buf, x, y), shade(0.92, 0.22, 0.22).to_rgb_u32());
    }

    #[test]
    fn draw_is_deterministic() {
        let mut sim = Simulation::new(Params::default());
        tick_until(&mut sim, Phase::Boarding);

        let mut a = Buf2::new((1000, 600));
        let mut b = Buf2::new((1000, 600));
        let na = draw(&sim, true, &mut a);
        let nb = draw(&sim, true, &mut b);

        assert!(na > 10_000, "suspiciously few pixels: {na}");
        assert_eq!(na, nb);
        assert_eq!(a, b);
    }

    #[test]
    fn offscreen_train_is_clipped() {
        let sim = Simulation::default();
        // The fresh train sits mostly left of the stage; drawing must not
        // panic and still fills the visible stage
        let buf = frame(&sim, false);
        assert_eq!(world(&buf, 999, 599), shade(0.55, 0.80, 0.98).to_rgb_u32());
    }
}
