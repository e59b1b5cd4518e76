//! Simulation modules
//!
//! Each sketch is an independent unit behind [`SimulationModule`]:
//! - owns its entities between frames, created in `setup`
//! - seeded RNG only, so a given seed replays identically
//! - draws through the surface capability trait, never a concrete backend
//!
//! The shared bounce physics lives in `bounce`; every module uses it rather
//! than carrying its own copy.

pub mod bounce;
pub mod module;
pub mod mystify;
pub mod sphere_field;

pub use bounce::{reflect_axis, reflect_point};
pub use module::{FrameError, SimulationModule};
pub use mystify::{Mystify, Polygon};
pub use sphere_field::{Sphere, SphereField};
