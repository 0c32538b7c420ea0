//! The producer thread: ticks layers and follows config reloads.

use skymap_config::SkymapConfig;
use skymap_layers::{LayerManager, ManualModel};
use skymap_renderer::RendererController;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::{debug, info};

pub struct Producer {
    layers: LayerManager,
    controller: RendererController,
    model: Arc<ManualModel>,
    config: SkymapConfig,
    reloads: watch::Receiver<SkymapConfig>,
}

impl Producer {
    pub fn new(
        layers: LayerManager,
        controller: RendererController,
        model: Arc<ManualModel>,
        config: SkymapConfig,
        reloads: watch::Receiver<SkymapConfig>,
    ) -> Self {
        Self {
            layers,
            controller,
            model,
            config,
            reloads,
        }
    }

    /// Register the layers, then tick at `tick_rate` until `shutdown` is set.
    pub fn run(mut self, shutdown: &AtomicBool) {
        self.layers.attach(&self.controller, &self.config.layers);

        let mut ticks = 0u64;
        let mut redraws = 0usize;
        while !shutdown.load(Ordering::Acquire) {
            let started = Instant::now();
            self.poll_reload();
            redraws += self.layers.tick();
            ticks += 1;

            let budget = Duration::from_secs_f64(1.0 / f64::from(self.config.renderer.tick_rate.max(1)));
            if let Some(rest) = budget.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
        info!(ticks, redraws, "producer stopped");
    }

    fn poll_reload(&mut self) {
        // An error only means the reload task is gone; keep the current config.
        if !self.reloads.has_changed().unwrap_or(false) {
            return;
        }
        let next = self.reloads.borrow_and_update().clone();
        self.apply(next);
    }

    fn apply(&mut self, next: SkymapConfig) {
        let previous = std::mem::replace(&mut self.config, next);
        let next = &self.config;

        if previous.layers != next.layers {
            self.layers.apply_visibility(&next.layers);
        }
        if previous.observer.time_speed != next.observer.time_speed {
            self.model.set_time_speed(next.observer.time_speed);
            info!(speed = next.observer.time_speed, "time speed changed");
        }
        if previous.layers.continents.coastlines != next.layers.continents.coastlines
            || previous.layers.constellations.catalog != next.layers.constellations.catalog
        {
            info!("layer data paths changed; restart to load the new files");
        }
        debug!("config reload applied");
    }
}
