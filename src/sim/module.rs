//! Simulation module capability interface

use std::fmt;

use crate::Dimensions;
use crate::renderer::Surface;

/// Error raised inside a module's frame.
///
/// Stops that module's frame loop; the stage itself stays sound and can
/// still be deactivated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameError {
    message: String,
}

impl FrameError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FrameError {}

/// One frame-based sketch.
///
/// The stage calls `setup` exactly once per activation, after the surface
/// exists, then `update_and_render` once per frame tick. The surface size
/// is stable for the duration of a call; a container resize lands between
/// frames.
pub trait SimulationModule {
    /// Create this module's entities for the given surface size
    fn setup(&mut self, dims: Dimensions);

    /// Advance entities one step and draw the frame
    fn update_and_render(&mut self, surface: &mut dyn Surface) -> Result<(), FrameError>;
}
