//! Host container handle
//!
//! The display container belongs to the host UI layer; this core only reads
//! its size and registers interest in size changes. Actual resize delivery
//! arrives through [`crate::Stage::notify_resize`] on the host's loop.

use crate::Dimensions;

/// Read-only handle to the host's display container.
pub trait Container {
    /// Current content size, or `None` once the host has torn the container
    /// down. A present-but-unlaid-out container reports zero dimensions.
    fn dimensions(&self) -> Option<Dimensions>;

    /// Register interest in size changes
    fn observe_resize(&mut self);

    /// Drop the registration; must leave nothing dangling
    fn unobserve_resize(&mut self);
}
