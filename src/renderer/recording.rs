//! Headless command-recording backend
//!
//! Records every draw call instead of rasterizing. Useful for hosts that
//! capture frames for later playback, and for exercising the full lifecycle
//! in tests and the demo binary without a GPU.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Backend, Color, Surface, SurfaceError};
use crate::Dimensions;

/// One recorded surface operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    SetFill(Color),
    SetStroke { color: Color, weight: f32 },
    Circle { center: Vec2, diameter: f32 },
    Polyline { points: Vec<Vec2>, closed: bool },
    Resize(Dimensions),
}

/// Surface that appends every operation to a command log
#[derive(Debug)]
pub struct RecordingSurface {
    dims: Dimensions,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            commands: Vec::new(),
        }
    }

    /// Everything recorded since creation (or the last [`Self::take_commands`])
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log, e.g. once per captured frame
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn resize(&mut self, dims: Dimensions) {
        self.dims = dims;
        self.commands.push(DrawCommand::Resize(dims));
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFill(color));
    }

    fn set_stroke(&mut self, color: Color, weight: f32) {
        self.commands.push(DrawCommand::SetStroke { color, weight });
    }

    fn draw_circle(&mut self, center: Vec2, diameter: f32) {
        self.commands.push(DrawCommand::Circle { center, diameter });
    }

    fn draw_polyline(&mut self, points: &[Vec2], closed: bool) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            closed,
        });
    }
}

/// Backend producing [`RecordingSurface`]s. Creation never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingBackend;

impl Backend for RecordingBackend {
    type Surface = RecordingSurface;

    fn create_surface(&mut self, dims: Dimensions) -> Result<RecordingSurface, SurfaceError> {
        Ok(RecordingSurface::new(dims))
    }
}
