//! Sketch Stage - a lifecycle host for frame-based canvas sketches
//!
//! Core modules:
//! - `sim`: Simulation modules (bounce physics, sphere field, mystify)
//! - `renderer`: Surface capability trait + headless recording backend
//! - `stage`: Container readiness, resize observation, lifecycle control
//! - `registry`: Static sketch catalog consumed by the gallery layer
//!
//! The host owns the frame signal: it calls [`Stage::tick`] once per frame
//! and [`Stage::notify_resize`] from its container-resize signal, both on
//! the same single-threaded loop. Everything else is driven from there.

pub mod registry;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod stage;

pub use registry::{SketchEntry, SketchInfo};
pub use renderer::{Backend, Color, Surface, SurfaceError};
pub use settings::{MystifySettings, SphereFieldSettings, StageSettings};
pub use sim::{FrameError, SimulationModule};
pub use stage::{Container, Stage, StageError, TickEvent};

use serde::{Deserialize, Serialize};

/// Stage configuration constants
pub mod consts {
    /// Readiness poll bound (~1.6 seconds at a 60 Hz tick cadence)
    pub const MAX_READY_ATTEMPTS: u32 = 100;

    /// Fallback surface size when the container never reports dimensions
    pub const FALLBACK_WIDTH: u32 = 800;
    pub const FALLBACK_HEIGHT: u32 = 600;

    /// Sphere field population range (inclusive)
    pub const MIN_SPHERES: usize = 50;
    pub const MAX_SPHERES: usize = 200;
    /// Sphere radius range
    pub const MIN_SPHERE_RADIUS: f32 = 10.0;
    pub const MAX_SPHERE_RADIUS: f32 = 50.0;
    /// Sphere velocity range is [-MAX_SPHERE_SPEED, MAX_SPHERE_SPEED] per axis
    pub const MAX_SPHERE_SPEED: f32 = 3.0;
    /// Sphere color channels are drawn from [COLOR_CHANNEL_MIN, 255]
    pub const COLOR_CHANNEL_MIN: u8 = 100;

    /// Mystify polygon defaults
    pub const DEFAULT_VERTEX_COUNT: usize = 4;
    /// Vertex velocity range is [-MAX_VERTEX_DRIFT, MAX_VERTEX_DRIFT] per axis
    pub const MAX_VERTEX_DRIFT: f32 = 5.0;

    /// Dark background level shared by both sketches
    pub const BACKGROUND_LEVEL: u8 = 10;
    /// Clear alpha for the sphere field trail effect
    pub const TRAIL_ALPHA: u8 = 25;
}

/// Container/surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both axes are strictly positive (readiness criterion)
    #[inline]
    pub fn is_sized(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}
