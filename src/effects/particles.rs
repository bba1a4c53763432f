//! The animated particle backdrop behind the hero section: slow floating
//! points that bounce off the canvas edges, with faint connecting lines
//! drawn between near neighbors (the constellation pass).
//!
//! The simulation is DOM-free and steppable so tests drive it directly;
//! [`mount`] wires it to a canvas and a frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config;
use crate::effects::frame::FrameLoop;

/// Small xorshift generator; visual randomness only.
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        XorShift(seed.max(1))
    }

    /// Next value in `[0, 1]`.
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0 as f64 / u64::MAX as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub hue: &'static str,
    pub opacity: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64, rng: &mut XorShift) -> Self {
        Particle {
            x: rng.next_f64() * width,
            y: rng.next_f64() * height,
            size: rng.next_f64() * config::PARTICLE_MAX_SIZE,
            speed_x: rng.next_f64() * 2.0 * config::PARTICLE_MAX_SPEED - config::PARTICLE_MAX_SPEED,
            speed_y: rng.next_f64() * 2.0 * config::PARTICLE_MAX_SPEED - config::PARTICLE_MAX_SPEED,
            hue: if rng.next_f64() > 0.5 {
                config::PARTICLE_HUES[0]
            } else {
                config::PARTICLE_HUES[1]
            },
            opacity: rng.next_f64() * config::PARTICLE_MAX_OPACITY,
        }
    }

    /// Advance one frame. A coordinate that crosses an edge is clamped onto
    /// it and the matching velocity component is reflected, so positions
    /// never leave `[0, width] x [0, height]`.
    fn step(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x < 0.0 {
            self.x = 0.0;
            self.speed_x = -self.speed_x;
        } else if self.x > width {
            self.x = width;
            self.speed_x = -self.speed_x;
        }
        if self.y < 0.0 {
            self.y = 0.0;
            self.speed_y = -self.speed_y;
        } else if self.y > height {
            self.y = height;
            self.speed_y = -self.speed_y;
        }
    }
}

/// One line of the constellation pass, by particle index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    rng: XorShift,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut field = ParticleField {
            width,
            height,
            rng: XorShift::new(seed),
            particles: Vec::new(),
        };
        field.populate();
        field
    }

    /// Particle budget for a canvas: one per `PARTICLE_DENSITY` square px.
    pub fn target_count(width: f64, height: f64) -> usize {
        ((width * height) / config::PARTICLE_DENSITY).max(0.0) as usize
    }

    fn populate(&mut self) {
        let count = Self::target_count(self.width, self.height);
        let (width, height) = (self.width, self.height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(width, height, &mut self.rng));
        }
        self.particles = particles;
    }

    /// Adopt new canvas dimensions, discarding the entire population and
    /// seeding a fresh one at the new count.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    /// The constellation pass: every pair of particles whose squared
    /// distance is under `(width/7) * (height/7)`, with opacity decaying
    /// linearly to zero at a squared distance of 20000. Quadratic in the
    /// particle count, which the density budget keeps small; self-pairs are
    /// retained as harmless zero-length strokes.
    pub fn links(&self) -> Vec<Link> {
        let threshold = (self.width / config::LINK_DISTANCE_DIVISOR)
            * (self.height / config::LINK_DISTANCE_DIVISOR);
        let mut links = Vec::new();
        for a in 0..self.particles.len() {
            for b in a..self.particles.len() {
                let dx = self.particles[a].x - self.particles[b].x;
                let dy = self.particles[a].y - self.particles[b].y;
                let distance_sq = dx * dx + dy * dy;
                if distance_sq < threshold {
                    let opacity = 1.0 - distance_sq / config::LINK_OPACITY_FALLOFF;
                    if opacity > 0.0 {
                        links.push(Link { a, b, opacity });
                    }
                }
            }
        }
        links
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// A running particle backdrop. Dropping it cancels the frame loop and
/// detaches the resize listener.
pub struct ParticleBackdrop {
    frame_loop: FrameLoop,
    on_resize: Closure<dyn FnMut()>,
}

impl Drop for ParticleBackdrop {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Start the backdrop on `canvas`. Returns `None` when the 2d context is
/// unavailable so the rest of the page still initializes.
pub fn mount(canvas: HtmlCanvasElement) -> Option<ParticleBackdrop> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        js_sys::Date::now() as u64,
    )));
    debug!(
        "particle backdrop: {} particles over {}x{}",
        field.borrow().particles().len(),
        width as u32,
        height as u32
    );

    let on_resize = {
        let field = field.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let (width, height) = viewport_size();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            let mut field = field.borrow_mut();
            field.resize(width, height);
            debug!("particle backdrop rebuilt: {} particles", field.particles().len());
        }) as Box<dyn FnMut()>)
    };
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }

    let frame_loop = FrameLoop::start(move || {
        let mut field = field.borrow_mut();
        field.step();
        draw(&field, &ctx);
    });

    Some(ParticleBackdrop { frame_loop, on_resize })
}

fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn draw(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    for particle in field.particles() {
        ctx.set_fill_style_str(&format!("rgba({}, {})", particle.hue, particle.opacity));
        ctx.begin_path();
        let _ = ctx.arc(
            particle.x,
            particle.y,
            particle.size,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    ctx.set_line_width(1.0);
    let particles = field.particles();
    for link in field.links() {
        let (a, b) = (&particles[link.a], &particles[link.b]);
        ctx.set_stroke_style_str(&format!(
            "rgba({}, {})",
            config::PARTICLE_HUES[0],
            link.opacity * config::LINK_STROKE_ALPHA
        ));
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(width: f64, height: f64) -> ParticleField {
        ParticleField::new(width, height, 0x5eed)
    }

    fn particle_at(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            size: 1.0,
            speed_x: 0.0,
            speed_y: 0.0,
            hue: config::PARTICLE_HUES[0],
            opacity: 0.3,
        }
    }

    #[test]
    fn population_matches_area_budget() {
        assert_eq!(field(1920.0, 1080.0).particles().len(), 138);
        assert_eq!(field(800.0, 600.0).particles().len(), 32);
        assert_eq!(field(100.0, 100.0).particles().len(), 0);
    }

    #[test]
    fn spawned_particles_have_bounded_attributes() {
        let field = field(1280.0, 720.0);
        assert!(!field.particles().is_empty());
        for p in field.particles() {
            assert!((0.0..=1280.0).contains(&p.x));
            assert!((0.0..=720.0).contains(&p.y));
            assert!((0.0..=config::PARTICLE_MAX_SIZE).contains(&p.size));
            assert!(p.speed_x.abs() <= config::PARTICLE_MAX_SPEED);
            assert!(p.speed_y.abs() <= config::PARTICLE_MAX_SPEED);
            assert!((0.0..=config::PARTICLE_MAX_OPACITY).contains(&p.opacity));
            assert!(config::PARTICLE_HUES.contains(&p.hue));
        }
    }

    #[test]
    fn stepping_never_leaves_the_field() {
        let mut field = field(640.0, 480.0);
        for _ in 0..2000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..=640.0).contains(&p.x), "x out of bounds: {}", p.x);
                assert!((0.0..=480.0).contains(&p.y), "y out of bounds: {}", p.y);
            }
        }
    }

    #[test]
    fn reflection_flips_velocity_and_clamps_to_the_edge() {
        let mut field = ParticleField::new(100.0, 100.0, 1);
        field.particles = vec![Particle {
            x: 99.9,
            y: 0.05,
            size: 1.0,
            speed_x: 0.4,
            speed_y: -0.3,
            hue: config::PARTICLE_HUES[0],
            opacity: 0.2,
        }];
        field.step();
        let p = &field.particles()[0];
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.speed_x, -0.4);
        assert_eq!(p.speed_y, 0.3);
    }

    #[test]
    fn resize_discards_the_entire_population() {
        let mut field = field(1920.0, 1080.0);
        let before: Vec<Particle> = field.particles().to_vec();
        field.resize(800.0, 600.0);
        assert_eq!(field.particles().len(), 32);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.x <= 800.0 && p.y <= 600.0));
        assert_ne!(field.particles(), &before[..32]);
    }

    #[test]
    fn links_decay_linearly_with_squared_distance() {
        // threshold = (700/7) * (700/7) = 10000
        let mut field = ParticleField::new(700.0, 700.0, 1);
        field.particles = vec![
            particle_at(0.0, 0.0),
            particle_at(60.0, 80.0), // d^2 = 10000, exactly on the threshold
            particle_at(30.0, 40.0), // d^2 = 2500 to both others
        ];
        let links = field.links();

        // Self-pairs survive the pass as degenerate strokes.
        assert!(links.contains(&Link { a: 0, b: 0, opacity: 1.0 }));
        // The threshold is exclusive.
        assert!(!links.iter().any(|l| l.a == 0 && l.b == 1));
        assert!(links.contains(&Link { a: 0, b: 2, opacity: 1.0 - 2500.0 / 20000.0 }));
        assert!(links.contains(&Link { a: 1, b: 2, opacity: 1.0 - 2500.0 / 20000.0 }));
    }

    #[test]
    fn pairs_past_the_opacity_falloff_are_dropped() {
        // Large canvas: threshold = 200 * 200 = 40000 exceeds the falloff,
        // so a pair can sit inside the threshold with non-positive opacity.
        let mut field = ParticleField::new(1400.0, 1400.0, 1);
        field.particles = vec![particle_at(0.0, 0.0), particle_at(150.0, 100.0)];
        assert!(!field.links().iter().any(|l| l.a == 0 && l.b == 1));
    }
}
