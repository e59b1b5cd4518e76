//! Static sketch catalog
//!
//! Consumed by the external gallery/selection UI; not part of the frame
//! loop. Factories thread the host-chosen seed into the module so a run
//! can be replayed.

use serde::Serialize;

use crate::settings::{MystifySettings, SphereFieldSettings};
use crate::sim::{Mystify, SimulationModule, SphereField};

/// One selectable sketch
pub struct SketchEntry {
    /// Stable identifier, e.g. a URL slug
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub factory: fn(seed: u64) -> Box<dyn SimulationModule>,
}

/// Serializable metadata view of a [`SketchEntry`] for the gallery layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SketchInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

fn sphere_field(seed: u64) -> Box<dyn SimulationModule> {
    Box::new(SphereField::new(seed, SphereFieldSettings::default()))
}

fn mystify(seed: u64) -> Box<dyn SimulationModule> {
    Box::new(Mystify::new(seed, MystifySettings::default()))
}

/// Every registered sketch, in gallery order
pub const SKETCHES: &[SketchEntry] = &[
    SketchEntry {
        id: "bouncing-balls",
        display_name: "Bouncing Balls",
        description: "A simple physics simulation of colorful spheres bouncing around the canvas.",
        factory: sphere_field,
    },
    SketchEntry {
        id: "mystify",
        display_name: "Mystify",
        description: "A vintage screen saver from the 1980s.",
        factory: mystify,
    },
];

/// Look up a sketch by identifier
pub fn find(id: &str) -> Option<&'static SketchEntry> {
    SKETCHES.iter().find(|entry| entry.id == id)
}

/// Metadata for every registered sketch
pub fn catalog() -> Vec<SketchInfo> {
    SKETCHES
        .iter()
        .map(|entry| SketchInfo {
            id: entry.id,
            display_name: entry.display_name,
            description: entry.description,
        })
        .collect()
}
