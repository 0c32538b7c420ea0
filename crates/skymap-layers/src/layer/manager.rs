use crate::model::AstronomerModel;
use skymap_config::schema::LayersConfig;
use skymap_renderer::RendererController;
use skymap_units::CoordinateTransformer;
use std::sync::Arc;
use tracing::{debug, info};

use super::{ConstellationsLayer, ContinentLayer, Layer, SearchResult};

/// Owns every layer and fans producer-side calls out to them.
#[derive(Default)]
pub struct LayerManager {
    layers: Vec<Arc<dyn Layer>>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard layer set, built from `config`.
    pub fn from_config(model: Arc<dyn AstronomerModel>, config: &LayersConfig) -> Self {
        let mut manager = Self::new();
        manager.add(Arc::new(ContinentLayer::new(
            model,
            CoordinateTransformer::default(),
            &config.continents,
        )));
        manager.add(Arc::new(ConstellationsLayer::new(&config.constellations)));
        manager
    }

    pub fn add(&mut self, layer: Arc<dyn Layer>) {
        debug!(layer = %layer.id(), name = layer.name(), "layer added");
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Arc<dyn Layer>] {
        &self.layers
    }

    pub fn layer(&self, preference_key: &str) -> Option<&Arc<dyn Layer>> {
        self.layers
            .iter()
            .find(|layer| layer.preference_key() == preference_key)
    }

    pub fn register_all(&self, controller: &RendererController) {
        for layer in &self.layers {
            layer.register_with_renderer(controller.clone());
        }
        info!(layers = self.layers.len(), "layers registered");
    }

    /// Tick every layer. Returns how many redrew.
    pub fn tick(&self) -> usize {
        let mut redrawn = 0;
        for layer in &self.layers {
            if !layer.update().is_empty() {
                redrawn += 1;
            }
        }
        redrawn
    }

    /// Apply `config`'s visibility, then register, so hidden layers never
    /// reach the renderer enabled.
    pub fn attach(&self, controller: &RendererController, config: &LayersConfig) {
        self.apply_visibility(config);
        self.register_all(controller);
    }

    /// Push the `visible` flags from `config` to the matching layers.
    pub fn apply_visibility(&self, config: &LayersConfig) {
        let flags = [
            (ContinentLayer::PREFERENCE_KEY, config.continents.visible),
            (
                ConstellationsLayer::PREFERENCE_KEY,
                config.constellations.visible,
            ),
        ];
        for (key, visible) in flags {
            if let Some(layer) = self.layer(key) {
                layer.set_visible(visible);
            }
        }
    }

    pub fn search(&self, name: &str) -> Vec<SearchResult> {
        self.layers
            .iter()
            .flat_map(|layer| layer.search_by_object_name(name))
            .collect()
    }

    pub fn names_matching_prefix(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .layers
            .iter()
            .flat_map(|layer| layer.object_names_matching_prefix(prefix))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
