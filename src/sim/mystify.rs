//! Mystify polygon
//!
//! One closed outline whose vertices drift independently, bouncing off the
//! surface edges - the vintage screen saver from the 1980s. Unlike the
//! sphere field, the surface is fully cleared every frame and vertices use
//! the full `[0, dimension]` range: a vertex has no size, so no inset.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounce::reflect_point;
use super::module::{FrameError, SimulationModule};
use crate::Dimensions;
use crate::consts::*;
use crate::renderer::{Color, Surface};
use crate::settings::MystifySettings;

/// A closed polygon whose vertices each carry their own velocity.
///
/// `vertices` and `velocities` are paired 1:1 and hold at least 3 entries
/// once setup has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
    pub velocities: Vec<Vec2>,
    pub stroke: Color,
    pub weight: f32,
}

/// Vertex-drift polygon simulation module
pub struct Mystify {
    settings: MystifySettings,
    rng: Pcg32,
    polygon: Polygon,
}

impl Mystify {
    pub fn new(seed: u64, settings: MystifySettings) -> Self {
        let polygon = Polygon {
            vertices: Vec::new(),
            velocities: Vec::new(),
            stroke: settings.stroke,
            weight: settings.stroke_weight,
        };
        Self {
            settings,
            rng: Pcg32::seed_from_u64(seed),
            polygon,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl SimulationModule for Mystify {
    fn setup(&mut self, dims: Dimensions) {
        // A polygon needs at least 3 vertices
        let count = self.settings.vertex_count.max(3);
        if count != self.settings.vertex_count {
            log::warn!(
                "mystify: vertex count {} raised to {count}",
                self.settings.vertex_count
            );
        }

        self.polygon.vertices.clear();
        self.polygon.velocities.clear();
        for _ in 0..count {
            self.polygon.vertices.push(Vec2::new(
                self.rng.random_range(0.0..=dims.width_f()),
                self.rng.random_range(0.0..=dims.height_f()),
            ));
            self.polygon.velocities.push(Vec2::new(
                self.rng
                    .random_range(-self.settings.max_drift..=self.settings.max_drift),
                self.rng
                    .random_range(-self.settings.max_drift..=self.settings.max_drift),
            ));
        }
    }

    fn update_and_render(&mut self, surface: &mut dyn Surface) -> Result<(), FrameError> {
        let dims = surface.dimensions();
        let max = Vec2::new(dims.width_f(), dims.height_f());

        // Full clear, no trail; draw the current outline, then drift
        surface.clear(Color::gray(BACKGROUND_LEVEL));
        surface.set_stroke(self.polygon.stroke, self.polygon.weight);
        surface.draw_polyline(&self.polygon.vertices, true);

        for (vertex, vel) in self
            .polygon
            .vertices
            .iter_mut()
            .zip(self.polygon.velocities.iter_mut())
        {
            let (pos, new_vel) = reflect_point(*vertex, *vel, Vec2::ZERO, max);
            *vertex = pos;
            *vel = new_vel;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn setup_mystify(seed: u64, dims: Dimensions) -> Mystify {
        let mut module = Mystify::new(seed, MystifySettings::default());
        module.setup(dims);
        module
    }

    fn assert_in_bounds(module: &Mystify, dims: Dimensions) {
        for vertex in &module.polygon().vertices {
            assert!((0.0..=dims.width_f()).contains(&vertex.x), "x {}", vertex.x);
            assert!(
                (0.0..=dims.height_f()).contains(&vertex.y),
                "y {}",
                vertex.y
            );
        }
    }

    #[test]
    fn test_setup_builds_default_polygon() {
        let dims = Dimensions::new(800, 600);
        let module = setup_mystify(1, dims);
        let polygon = module.polygon();

        assert_eq!(polygon.vertices.len(), DEFAULT_VERTEX_COUNT);
        assert_eq!(polygon.vertices.len(), polygon.velocities.len());
        for vel in &polygon.velocities {
            assert!(vel.x.abs() <= MAX_VERTEX_DRIFT);
            assert!(vel.y.abs() <= MAX_VERTEX_DRIFT);
        }
        assert_in_bounds(&module, dims);
    }

    #[test]
    fn test_vertex_count_floor_is_three() {
        let settings = MystifySettings {
            vertex_count: 1,
            ..Default::default()
        };
        let mut module = Mystify::new(1, settings);
        module.setup(Dimensions::new(100, 100));
        assert_eq!(module.polygon().vertices.len(), 3);
        assert_eq!(module.polygon().velocities.len(), 3);
    }

    #[test]
    fn test_configurable_vertex_count() {
        let settings = MystifySettings {
            vertex_count: 7,
            ..Default::default()
        };
        let mut module = Mystify::new(1, settings);
        module.setup(Dimensions::new(800, 600));
        assert_eq!(module.polygon().vertices.len(), 7);
    }

    #[test]
    fn test_bounds_hold_over_many_frames() {
        let dims = Dimensions::new(640, 480);
        let mut module = setup_mystify(9, dims);
        let mut surface = RecordingSurface::new(dims);

        for _ in 0..500 {
            module.update_and_render(&mut surface).unwrap();
        }
        assert_in_bounds(&module, dims);
    }

    #[test]
    fn test_frame_draws_closed_outline_before_drift() {
        let dims = Dimensions::new(800, 600);
        let mut module = setup_mystify(4, dims);
        let before = module.polygon().vertices.clone();

        let mut surface = RecordingSurface::new(dims);
        module.update_and_render(&mut surface).unwrap();

        let settings = MystifySettings::default();
        assert_eq!(
            surface.commands()[..2],
            [
                DrawCommand::Clear(Color::gray(BACKGROUND_LEVEL)),
                DrawCommand::SetStroke {
                    color: settings.stroke,
                    weight: settings.stroke_weight
                },
            ]
        );
        // The outline drawn is the pre-drift polygon
        assert_eq!(
            surface.commands()[2],
            DrawCommand::Polyline {
                points: before.clone(),
                closed: true
            }
        );
        assert_ne!(module.polygon().vertices, before);
    }

    #[test]
    fn test_seeded_setup_is_reproducible() {
        let dims = Dimensions::new(800, 600);
        let a = setup_mystify(21, dims);
        let b = setup_mystify(21, dims);
        assert_eq!(a.polygon(), b.polygon());
    }
}
