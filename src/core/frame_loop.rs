//! Frame scheduler.
//!
//! `FrameLoop::run` ticks the simulation until the host closes or a
//! `CancelToken` fires. Each tick: measure delta, let the host write input,
//! follow any surface resize, step, present. Cancellation is checked before the
//! next tick is scheduled, so a tick always runs to completion.
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::core::simulation::{FrameOutput, Simulation, Snapshot};
use crate::render::framebuffer::Framebuffer;

/// Monotonic time source.
pub trait Clock {
    fn now(&mut self) -> Duration;
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock advanced by hand; shares its time with clones.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Duration {
        self.now.get()
    }
}

/// Stops a running loop from outside. Cheap to clone.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    fn reset(&self) {
        self.cancelled.set(false);
    }
}

/// The output surface and input source around the loop.
pub trait FrameHost {
    /// Current drawable size; `None` when there is nothing to draw on.
    fn surface_size(&self) -> Option<(u32, u32)>;

    /// Writes velocity, orientation and flashlight toggles for the next frame.
    fn poll_input(&mut self, sim: &mut Simulation);

    fn present(&mut self, frame: &Framebuffer, output: &FrameOutput, snapshot: &Snapshot);

    fn should_close(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// No surface at start; nothing was rendered.
    NoSurface,
    /// The surface went away mid-run.
    SurfaceLost,
    Cancelled,
    HostClosed,
}

pub struct FrameLoop<C: Clock> {
    sim: Simulation,
    clock: C,
    max_delta: Option<f32>,
    cancel: CancelToken,
    frames: u64,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(sim: Simulation, clock: C, max_delta: Option<f32>) -> Self {
        Self { sim, clock, max_delta, cancel: CancelToken::default(), frames: 0 }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn clamp_delta(&self, dt: f32) -> f32 {
        match self.max_delta {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    pub fn run<H: FrameHost>(&mut self, host: &mut H) -> LoopExit {
        let Some(mut fb) = host.surface_size().and_then(|(w, h)| Framebuffer::new(w, h)) else {
            log::warn!("no render surface, frame loop not started");
            return LoopExit::NoSurface;
        };
        log::info!("frame loop started at {}x{}", fb.width, fb.height);

        let mut last = self.clock.now();
        let exit = loop {
            if self.cancel.is_cancelled() {
                break LoopExit::Cancelled;
            }

            let now = self.clock.now();
            let dt = self.clamp_delta(now.saturating_sub(last).as_secs_f32());
            last = now;

            host.poll_input(&mut self.sim);

            match host.surface_size() {
                Some((w, h)) if (w, h) != (fb.width, fb.height) => {
                    if !fb.resize(w, h) {
                        break LoopExit::SurfaceLost;
                    }
                    log::debug!("surface resized to {w}x{h}");
                }
                Some(_) => {}
                None => break LoopExit::SurfaceLost,
            }

            let output = self.sim.step(dt, &mut fb);
            host.present(&fb, &output, &self.sim.snapshot());
            self.frames += 1;

            if host.should_close() {
                break LoopExit::HostClosed;
            }
        };
        if exit == LoopExit::Cancelled {
            // consumed, so the next run starts fresh
            self.cancel.reset();
        }
        log::info!("frame loop stopped after {} frames: {:?}", self.frames, exit);
        exit
    }
}
