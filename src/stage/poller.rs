//! Container readiness polling
//!
//! A freshly mounted container can report zero dimensions for a while until
//! the host lays it out. The poller checks once per frame tick with an
//! explicit attempt counter; cancellation is simply dropping it, so nothing
//! can fire against a stale container afterwards.

use super::container::Container;
use crate::Dimensions;

/// Outcome of one readiness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// Not sized yet; check again next tick
    Pending { attempt: u32 },
    /// Both dimensions strictly positive
    Ready(Dimensions),
    /// Attempt bound reached; caller proceeds at its fallback size
    TimedOut,
    /// Container torn down before it was ever sized; caller stands down
    Gone,
}

/// Bounded-retry wait for positive container dimensions
#[derive(Debug, Clone)]
pub struct ReadinessPoller {
    attempts: u32,
    max_attempts: u32,
}

impl ReadinessPoller {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts: 0,
            max_attempts,
        }
    }

    /// One readiness check; call once per frame tick
    pub fn poll(&mut self, container: &impl Container) -> PollStatus {
        let Some(dims) = container.dimensions() else {
            log::warn!("container disappeared while waiting for dimensions");
            return PollStatus::Gone;
        };
        if dims.is_sized() {
            log::debug!(
                "container dimensions available: {}x{}",
                dims.width,
                dims.height
            );
            return PollStatus::Ready(dims);
        }

        self.attempts += 1;
        if self.attempts % 10 == 0 {
            log::debug!(
                "waiting for container dimensions (attempt {}/{})",
                self.attempts,
                self.max_attempts
            );
        }
        if self.attempts >= self.max_attempts {
            log::warn!(
                "container not sized after {} attempts, falling back",
                self.attempts
            );
            PollStatus::TimedOut
        } else {
            PollStatus::Pending {
                attempt: self.attempts,
            }
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
