//! Stage and sketch settings
//!
//! Serializable knobs with defaults drawn from [`crate::consts`]. The
//! gallery layer can persist these and round-trip them as JSON.

use serde::{Deserialize, Serialize};

use crate::Dimensions;
use crate::consts::*;
use crate::renderer::Color;

/// Lifecycle controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSettings {
    /// Readiness polls before giving up on the container's own size
    pub max_ready_attempts: u32,
    /// Surface size used when the container never reports one
    pub fallback: Dimensions,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            max_ready_attempts: MAX_READY_ATTEMPTS,
            fallback: Dimensions::new(FALLBACK_WIDTH, FALLBACK_HEIGHT),
        }
    }
}

/// Sphere field tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereFieldSettings {
    /// Population range (inclusive)
    pub min_spheres: usize,
    pub max_spheres: usize,
    /// Drawn diameter range
    pub min_radius: f32,
    pub max_radius: f32,
    /// Per-axis velocity range is [-max_speed, max_speed]
    pub max_speed: f32,
}

impl Default for SphereFieldSettings {
    fn default() -> Self {
        Self {
            min_spheres: MIN_SPHERES,
            max_spheres: MAX_SPHERES,
            min_radius: MIN_SPHERE_RADIUS,
            max_radius: MAX_SPHERE_RADIUS,
            max_speed: MAX_SPHERE_SPEED,
        }
    }
}

/// Mystify polygon tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MystifySettings {
    /// Vertex count; values below 3 are raised to 3 at setup
    pub vertex_count: usize,
    /// Per-axis vertex velocity range is [-max_drift, max_drift]
    pub max_drift: f32,
    pub stroke: Color,
    pub stroke_weight: f32,
}

impl Default for MystifySettings {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            max_drift: MAX_VERTEX_DRIFT,
            stroke: Color::rgb(255, 0, 0),
            stroke_weight: 2.0,
        }
    }
}
