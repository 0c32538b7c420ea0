use crate::data::{load_polylines, Polyline};
use crate::model::AstronomerModel;
use crate::refresh::RefreshPolicy;
use crate::source::{AstronomicalSource, ContinentSource};
use skymap_common::LayerId;
use skymap_config::schema::ContinentsLayerConfig;
use skymap_renderer::{RendererController, UpdateTypes};
use skymap_units::CoordinateTransformer;
use std::sync::Arc;

use super::{Layer, SourceLayer};

/// Coastlines, drawn beneath everything else.
pub struct ContinentLayer {
    inner: SourceLayer,
}

impl ContinentLayer {
    pub const ID: LayerId = LayerId(-110);
    pub const PREFERENCE_KEY: &'static str = "continents";

    /// Build from config; a missing or unreadable coastline file gives an empty layer.
    pub fn new(
        model: Arc<dyn AstronomerModel>,
        transformer: CoordinateTransformer,
        config: &ContinentsLayerConfig,
    ) -> Self {
        let polylines = config
            .coastlines
            .as_deref()
            .map(|path| load_polylines(path, config.vertex_stride as usize))
            .unwrap_or_default();
        Self::with_polylines(
            model,
            transformer,
            polylines,
            RefreshPolicy::from(&config.refresh),
        )
    }

    pub fn with_polylines(
        model: Arc<dyn AstronomerModel>,
        transformer: CoordinateTransformer,
        polylines: Vec<Polyline>,
        policy: RefreshPolicy,
    ) -> Self {
        let source: Box<dyn AstronomicalSource> =
            Box::new(ContinentSource::new(model, transformer, polylines, policy));
        Self {
            inner: SourceLayer::new(Self::ID, "Continent", vec![source]),
        }
    }

    pub fn source_layer(&self) -> &SourceLayer {
        &self.inner
    }
}

impl Layer for ContinentLayer {
    fn id(&self) -> LayerId {
        Self::ID
    }

    fn name(&self) -> &str {
        "Continent"
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
}
