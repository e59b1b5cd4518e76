//! Lifecycle controller
//!
//! Orchestrates one activation at a time: readiness polling, surface
//! creation, module setup, resize observation, and the frame loop. The host
//! drives everything through [`Stage::tick`] (its frame signal) and
//! [`Stage::notify_resize`] (its container-resize signal); both dispatch on
//! the current phase first, so a signal landing after `deactivate` is a
//! guaranteed no-op.

use std::fmt;

use crate::Dimensions;
use crate::renderer::{Backend, Surface, SurfaceError};
use crate::settings::StageSettings;
use crate::sim::{FrameError, SimulationModule};

use super::container::Container;
use super::poller::{PollStatus, ReadinessPoller};

/// Deferred module construction; runs once the surface exists
pub type ModuleFactory = Box<dyn FnOnce() -> Box<dyn SimulationModule>>;

/// What one frame tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// No activation in progress
    Idle,
    /// Still waiting for the container to report dimensions
    Waiting,
    /// Surface created and module set up on this tick
    Activated,
    /// One frame advanced and drawn
    Frame,
    /// The active module faulted earlier; its frames no longer run
    Halted,
}

/// Stage failure
#[derive(Debug)]
pub enum StageError {
    /// Surface creation failed; the activation was aborted whole
    Surface(SurfaceError),
    /// The active module's frame errored; its frame loop is stopped
    Module(FrameError),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::Surface(err) => write!(f, "activation failed: {err}"),
            StageError::Module(err) => write!(f, "module frame failed: {err}"),
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StageError::Surface(err) => Some(err),
            StageError::Module(err) => Some(err),
        }
    }
}

enum Phase<S> {
    Idle,
    Waiting {
        poller: ReadinessPoller,
        factory: ModuleFactory,
    },
    Running {
        surface: S,
        module: Box<dyn SimulationModule>,
    },
    /// Module faulted; surface held until teardown, frames stopped
    Faulted { surface: S },
}

/// Lifecycle controller for one container and one active module.
///
/// Exclusively owns the render surface and the module instance; nothing
/// else may touch either. Dropping the stage (or `deactivate`) releases
/// both.
pub struct Stage<C: Container, B: Backend> {
    container: C,
    backend: B,
    settings: StageSettings,
    phase: Phase<B::Surface>,
}

impl<C: Container, B: Backend> Stage<C, B> {
    pub fn new(container: C, backend: B, settings: StageSettings) -> Self {
        Self {
            container,
            backend,
            settings,
            phase: Phase::Idle,
        }
    }

    /// Begin activating the module `factory` will build.
    ///
    /// The surface is created on a later tick, once the container reports
    /// dimensions or the readiness bound lapses. An already-active stage is
    /// deactivated first (module switch).
    pub fn activate<F>(&mut self, factory: F)
    where
        F: FnOnce() -> Box<dyn SimulationModule> + 'static,
    {
        self.deactivate();
        log::info!("activation started");
        self.phase = Phase::Waiting {
            poller: ReadinessPoller::new(self.settings.max_ready_attempts),
            factory: Box::new(factory),
        };
    }

    /// Host frame signal: one readiness check while waiting, one frame
    /// while running.
    pub fn tick(&mut self) -> Result<TickEvent, StageError> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => Ok(TickEvent::Idle),
            Phase::Waiting {
                mut poller,
                factory,
            } => match poller.poll(&self.container) {
                PollStatus::Pending { .. } => {
                    self.phase = Phase::Waiting { poller, factory };
                    Ok(TickEvent::Waiting)
                }
                PollStatus::Ready(dims) => self.finish_activation(dims, factory),
                PollStatus::TimedOut => {
                    let dims = self.settings.fallback;
                    log::info!(
                        "proceeding at fallback size {}x{}",
                        dims.width,
                        dims.height
                    );
                    self.finish_activation(dims, factory)
                }
                PollStatus::Gone => {
                    log::info!("activation abandoned: container torn down");
                    Ok(TickEvent::Idle)
                }
            },
            Phase::Running {
                mut surface,
                mut module,
            } => match module.update_and_render(&mut surface) {
                Ok(()) => {
                    self.phase = Phase::Running { surface, module };
                    Ok(TickEvent::Frame)
                }
                Err(err) => {
                    log::error!("module fault, stopping its frame loop: {err}");
                    self.phase = Phase::Faulted { surface };
                    Err(StageError::Module(err))
                }
            },
            Phase::Faulted { surface } => {
                self.phase = Phase::Faulted { surface };
                Ok(TickEvent::Halted)
            }
        }
    }

    fn finish_activation(
        &mut self,
        dims: Dimensions,
        factory: ModuleFactory,
    ) -> Result<TickEvent, StageError> {
        let surface = match self.backend.create_surface(dims) {
            Ok(surface) => surface,
            Err(err) => {
                // Failing here leaves no observer and no frame loop behind
                log::error!("surface creation failed: {err}");
                return Err(StageError::Surface(err));
            }
        };
        log::info!("surface created at {}x{}", dims.width, dims.height);

        let mut module = factory();
        module.setup(dims);
        self.container.observe_resize();
        log::info!("module activated");

        self.phase = Phase::Running { surface, module };
        Ok(TickEvent::Activated)
    }

    /// Host resize signal: resize the surface in place to the container's
    /// current size. Module state is untouched; clamping happens on the
    /// module's next update. No-op unless a module is running.
    pub fn notify_resize(&mut self) {
        let Phase::Running { surface, .. } = &mut self.phase else {
            log::debug!("resize ignored: no active surface");
            return;
        };
        let Some(dims) = self.container.dimensions() else {
            log::debug!("resize ignored: container torn down");
            return;
        };
        surface.resize(dims);
        log::info!("resize applied: {}x{}", dims.width, dims.height);
    }

    /// Tear down: drop the surface and module, detach the resize observer,
    /// cancel any outstanding readiness poll. Idempotent and callable
    /// mid-activation; any later tick or resize signal observes an idle
    /// stage and does nothing.
    pub fn deactivate(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {}
            Phase::Waiting { .. } => {
                // Dropping the poller cancels the outstanding wait
                log::info!("deactivated during readiness wait");
            }
            Phase::Running { .. } | Phase::Faulted { .. } => {
                self.container.unobserve_resize();
                log::info!("deactivated");
            }
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The owned surface, while one exists
    pub fn surface(&self) -> Option<&B::Surface> {
        match &self.phase {
            Phase::Running { surface, .. } | Phase::Faulted { surface } => Some(surface),
            _ => None,
        }
    }

    /// Mutable surface access, e.g. for hosts draining recorded frames
    pub fn surface_mut(&mut self) -> Option<&mut B::Surface> {
        match &mut self.phase {
            Phase::Running { surface, .. } | Phase::Faulted { surface } => Some(surface),
            _ => None,
        }
    }
}
