//! Per-frame driver: arms the animation once the viewport is usable, then
//! pushes time and pointer uniforms and draws every display frame.

use crate::backend::Backend;
use crate::context::RenderContext;
use crate::host::{Scheduler, Surface};
use crate::palette;

/// Driver state. `Armed` only lasts between a successful viewport setup and
/// the recording of the start time within the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Armed,
    Running,
}

/// Whether the animation clock has started, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    NotStarted,
    Running { start_ms: f64 },
}

pub struct FrameDriver<K> {
    phase: Phase,
    animation: AnimationState,
    palette_period_ms: f64,
    scheduler: K,
}

impl<K: Scheduler> FrameDriver<K> {
    pub fn new(scheduler: K, palette_period_ms: f64) -> Self {
        Self {
            phase: Phase::Idle,
            animation: AnimationState::NotStarted,
            palette_period_ms,
            scheduler,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn scheduler(&self) -> &K {
        &self.scheduler
    }

    /// Handle one display frame at timestamp `now_ms`, then ask for the next.
    pub fn on_frame<S: Surface, B: Backend>(&mut self, ctx: &mut RenderContext<S, B>, now_ms: f64) {
        if self.phase == Phase::Idle {
            match ctx.reconfigure() {
                Ok(_) => self.phase = Phase::Armed,
                Err(e) => log::trace!("{e}, retrying next frame"),
            }
        }

        if self.phase == Phase::Armed {
            self.animation = AnimationState::Running { start_ms: now_ms };
            self.phase = Phase::Running;
            log::info!("animation started");
        }

        if self.phase == Phase::Running {
            if ctx.resize_pending() {
                if let Err(e) = ctx.reconfigure() {
                    log::trace!("{e}, keeping previous viewport");
                }
            }
            self.draw(ctx, now_ms);
        }

        self.scheduler.request_frame();
    }

    fn draw<S, B: Backend>(&self, ctx: &mut RenderContext<S, B>, now_ms: f64) {
        let AnimationState::Running { start_ms } = self.animation else {
            return;
        };
        let shift = palette::shift_at(now_ms - start_ms, self.palette_period_ms);
        ctx.present(shift);
    }
}
