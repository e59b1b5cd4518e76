//! Render surface capability seam
//!
//! The stage draws through the [`Surface`] trait only; any backend that can
//! satisfy the capability set (clear, fill/stroke state, circles, polylines,
//! in-place resize) is interchangeable. Disposal is ownership: dropping a
//! surface releases it, so a disposed surface cannot be drawn to by
//! construction.

pub mod recording;

pub use recording::{DrawCommand, RecordingBackend, RecordingSurface};

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Dimensions;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray at the given level on all three channels
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

/// Surface creation failure. Fatal to the activation that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// The drawing backend is not available on this host
    BackendUnavailable,
    /// The backend could not allocate a surface at the requested size
    OutOfMemory,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::BackendUnavailable => write!(f, "drawing backend unavailable"),
            SurfaceError::OutOfMemory => write!(f, "surface allocation failed"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// A drawing target sized to the container.
///
/// Exclusively owned by the stage. Resized in place on container changes;
/// never recreated mid-activation.
pub trait Surface {
    /// Current surface size (stable for the duration of one frame)
    fn dimensions(&self) -> Dimensions;

    /// Resize in place. Drawn content may be discarded; draw state is kept.
    fn resize(&mut self, dims: Dimensions);

    /// Fill the whole surface. An alpha below 255 blends over the previous
    /// frame instead of erasing it (trail effect).
    fn clear(&mut self, color: Color);

    fn set_fill(&mut self, color: Color);

    fn set_stroke(&mut self, color: Color, weight: f32);

    /// Filled circle at `center` with the given diameter
    fn draw_circle(&mut self, center: Vec2, diameter: f32);

    /// Stroked polyline through `points`; `closed` joins last back to first
    fn draw_polyline(&mut self, points: &[Vec2], closed: bool);
}

/// Creates surfaces for the stage. The only fallible step of activation.
pub trait Backend {
    type Surface: Surface;

    fn create_surface(&mut self, dims: Dimensions) -> Result<Self::Surface, SurfaceError>;
}
