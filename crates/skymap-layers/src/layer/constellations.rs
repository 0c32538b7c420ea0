use crate::data::{load_catalog, Catalog};
use crate::source::{AstronomicalSource, CatalogSource};
use skymap_common::LayerId;
use skymap_config::schema::ConstellationsLayerConfig;
use skymap_renderer::{RendererController, UpdateTypes};

use super::{Layer, SearchResult, SourceLayer};

/// Constellation figures and names from a catalog. Searchable by name.
pub struct ConstellationsLayer {
    inner: SourceLayer,
}

impl ConstellationsLayer {
    pub const ID: LayerId = LayerId(-101);
    pub const PREFERENCE_KEY: &'static str = "constellations";

    pub fn new(config: &ConstellationsLayerConfig) -> Self {
        let catalog = config
            .catalog
            .as_deref()
            .map(load_catalog)
            .unwrap_or_default();
        Self::from_catalog(catalog)
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        let sources = catalog
            .sources
            .into_iter()
            .map(|entry| Box::new(CatalogSource::new(entry)) as Box<dyn AstronomicalSource>)
            .collect();
        Self {
            inner: SourceLayer::new(Self::ID, "Constellations", sources),
        }
    }

    pub fn source_layer(&self) -> &SourceLayer {
        &self.inner
    }
}

impl Layer for ConstellationsLayer {
    fn id(&self) -> LayerId {
        Self::ID
    }

    fn name(&self) -> &str {
        "Constellations"
    }

    fn preference_key(&self) -> &str {
        Self::PREFERENCE_KEY
    }

    fn register_with_renderer(&self, controller: RendererController) {
        self.inner.register(controller);
    }

    fn set_visible(&self, visible: bool) {
        self.inner.set_visible(visible);
    }

    fn update(&self) -> UpdateTypes {
        self.inner.update()
    }

    fn search_by_object_name(&self, name: &str) -> Vec<SearchResult> {
        let wanted = name.to_lowercase();
        self.inner.with_sources(|sources| {
            sources
                .iter()
                .filter_map(|source| {
                    let hit = source
                        .names()
                        .iter()
                        .find(|candidate| candidate.to_lowercase() == wanted)?;
                    Some(SearchResult {
                        name: hit.clone(),
                        location: source.search_location()?,
                    })
                })
                .collect()
        })
    }

    fn object_names_matching_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut names: Vec<String> = self.inner.with_sources(|sources| {
            sources
                .iter()
                .flat_map(|source| source.names())
                .filter(|name| name.to_lowercase().starts_with(&prefix))
                .cloned()
                .collect()
        });
        names.sort();
        names.dedup();
        names
    }
}
