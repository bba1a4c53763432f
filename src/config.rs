//! Fixed tuning constants for the page effects.

/// Fraction of a reveal target that must be visible before it activates.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Bottom inset so targets activate slightly before they are fully on-screen.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Scroll offset past which the navbar switches to its condensed style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// One particle per this many square pixels of canvas.
pub const PARTICLE_DENSITY: f64 = 15000.0;
/// Upper bound on particle radius, px.
pub const PARTICLE_MAX_SIZE: f64 = 2.0;
/// Per-axis particle speed magnitude, px per frame.
pub const PARTICLE_MAX_SPEED: f64 = 0.5;
/// Upper bound on particle fill opacity.
pub const PARTICLE_MAX_OPACITY: f64 = 0.5;
/// The two particle hues (electric blue, teal) as `r, g, b` fragments.
pub const PARTICLE_HUES: [&str; 2] = ["0, 240, 255", "0, 255, 221"];

/// Squared link length at which constellation opacity decays to zero.
pub const LINK_OPACITY_FALLOFF: f64 = 20000.0;
/// Canvas width and height are each divided by this to derive the squared
/// distance threshold of the connection pass.
pub const LINK_DISTANCE_DIVISOR: f64 = 7.0;
/// Extra alpha applied to link strokes to keep them subtle.
pub const LINK_STROKE_ALPHA: f64 = 0.1;

/// Maximum tilt rotation per axis, degrees.
pub const TILT_MAX_DEG: f64 = 8.0;
/// Uniform scale while a card is hovered.
pub const TILT_SCALE: f64 = 1.04;
/// Fast transition while the tilt loop is live.
pub const TILT_ENTER_TRANSITION: &str = "transform 0.08s ease-out";
/// Slower eased transition for the return to rest.
pub const TILT_LEAVE_TRANSITION: &str = "transform 0.25s cubic-bezier(0.22, 1, 0.36, 1)";
