//! The render thread's frame cycle: apply committed sections, then draw.

use crate::draw::DrawBackend;
use crate::perf::FrameTimer;
use crate::section::SectionQueue;
use crate::store::RenderStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What one call to [`RenderLoop::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub sections_applied: usize,
    /// Sections still queued after this frame (only with a per-frame cap).
    pub sections_deferred: usize,
}

/// Owns the [`RenderStore`] and drives it from the section queue.
pub struct RenderLoop {
    store: RenderStore,
    queue: SectionQueue,
    timer: FrameTimer,
    max_sections_per_frame: usize,
}

impl RenderLoop {
    /// `max_sections_per_frame` of 0 applies everything queued each frame.
    pub fn new(queue: SectionQueue, max_sections_per_frame: usize) -> Self {
        Self {
            store: RenderStore::new(),
            queue,
            timer: FrameTimer::new(),
            max_sections_per_frame,
        }
    }

    /// Apply whatever has been committed, then draw once.
    ///
    /// Never waits for producers: if nothing new arrived the previous state
    /// is drawn again.
    pub fn frame(&mut self, backend: &mut dyn DrawBackend) -> FrameReport {
        let started = Instant::now();

        let sections = self.queue.drain(self.max_sections_per_frame);
        let sections_applied = sections.len();
        for section in sections {
            self.store.apply(section);
        }

        self.store.draw(backend);
        self.timer.record(started.elapsed());

        FrameReport {
            sections_applied,
            sections_deferred: self.queue.pending(),
        }
    }

    /// Draw frames paced to `frame_rate` until `shutdown` is set.
    pub fn run(&mut self, backend: &mut dyn DrawBackend, frame_rate: u32, shutdown: &AtomicBool) {
        let budget = Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)));
        info!(frame_rate, "render loop started");

        while !shutdown.load(Ordering::Acquire) {
            let started = Instant::now();
            let report = self.frame(backend);
            if report.sections_applied > 0 {
                debug!(
                    applied = report.sections_applied,
                    deferred = report.sections_deferred,
                    "frame applied sections"
                );
            }
            if let Some(rest) = budget.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        info!(
            frames = self.timer.frames(),
            sections = self.store.sections_applied(),
            avg_ms = self.timer.average().as_secs_f64() * 1000.0,
            "render loop stopped"
        );
    }

    pub fn store(&self) -> &RenderStore {
        &self.store
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// True once every producer is gone and all their sections are applied.
    pub fn producers_finished(&self) -> bool {
        self.queue.is_disconnected()
    }
}
