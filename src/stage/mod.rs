//! Stage lifecycle
//!
//! Owns surface creation, container readiness, resize observation, and the
//! per-frame update/draw cycle for the single active simulation module.
//! Scheduling is single-threaded cooperative: the host's frame signal and
//! resize signal both land here on the same loop, never concurrently.

pub mod container;
pub mod controller;
pub mod poller;

pub use container::Container;
pub use controller::{Stage, StageError, TickEvent};
pub use poller::{PollStatus, ReadinessPoller};
