//! Headless demo host
//!
//! Stands in for the gallery page: builds a container, activates a sketch
//! from the registry, drives the frame signal for a few seconds' worth of
//! ticks with a mid-run resize, and reports what the surface recorded.
//!
//! Pick a sketch with the first CLI argument (default `bouncing-balls`).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Result, anyhow};

use sketch_stage::renderer::{DrawCommand, RecordingBackend};
use sketch_stage::stage::Container;
use sketch_stage::{Dimensions, Stage, StageSettings, TickEvent, registry};

const TICKS: u32 = 240;
const RESIZE_AT_TICK: u32 = 120;
/// Ticks the demo container stays unsized, like a page layout settling
const LAYOUT_DELAY_TICKS: u32 = 5;

struct DemoState {
    dims: Dimensions,
    ticks_until_sized: u32,
}

/// Container whose size the demo script controls
#[derive(Clone)]
struct DemoContainer {
    inner: Rc<RefCell<DemoState>>,
}

impl DemoContainer {
    fn new(dims: Dimensions, ticks_until_sized: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DemoState {
                dims,
                ticks_until_sized,
            })),
        }
    }

    /// One tick of layout settling
    fn settle(&self) {
        let mut state = self.inner.borrow_mut();
        state.ticks_until_sized = state.ticks_until_sized.saturating_sub(1);
    }

    fn set_dimensions(&self, dims: Dimensions) {
        self.inner.borrow_mut().dims = dims;
    }
}

impl Container for DemoContainer {
    fn dimensions(&self) -> Option<Dimensions> {
        let state = self.inner.borrow();
        if state.ticks_until_sized > 0 {
            Some(Dimensions::new(0, 0))
        } else {
            Some(state.dims)
        }
    }

    fn observe_resize(&mut self) {}

    fn unobserve_resize(&mut self) {}
}

fn main() -> Result<()> {
    env_logger::init();

    println!("{}", serde_json::to_string_pretty(&registry::catalog())?);

    let id = std::env::args().nth(1).unwrap_or_else(|| "bouncing-balls".into());
    let entry = registry::find(&id).ok_or_else(|| anyhow!("unknown sketch: {id}"))?;

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    log::info!("running '{}' with seed {seed}", entry.id);

    let container = DemoContainer::new(Dimensions::new(960, 540), LAYOUT_DELAY_TICKS);
    let mut stage = Stage::new(container.clone(), RecordingBackend, StageSettings::default());

    let factory = entry.factory;
    stage.activate(move || factory(seed));

    let mut frames = 0u32;
    let mut commands = 0usize;
    let mut circles = 0usize;
    for tick_index in 0..TICKS {
        container.settle();
        if tick_index == RESIZE_AT_TICK {
            container.set_dimensions(Dimensions::new(1280, 720));
            stage.notify_resize();
        }

        match stage.tick()? {
            TickEvent::Frame => frames += 1,
            TickEvent::Activated => log::info!("activated on tick {tick_index}"),
            _ => {}
        }

        // Drain per tick so the recording stays bounded
        if let Some(surface) = stage.surface_mut() {
            for command in surface.take_commands() {
                commands += 1;
                if matches!(command, DrawCommand::Circle { .. }) {
                    circles += 1;
                }
            }
        }
    }

    stage.deactivate();
    log::info!("ran {frames} frames; recorded {commands} commands ({circles} circles)");
    Ok(())
}
