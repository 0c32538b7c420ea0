//! Layers: per-category orchestrators between sources and the renderer.
//!
//! A layer moves from unregistered to registered once it is given a
//! [`RendererController`]; visibility only toggles its managers and never
//! discards state. Until registration every mutating call is a logged no-op,
//! so layers can be built before a rendering surface exists.

mod binding;
mod constellations;
mod continent;
mod manager;
mod source_layer;


pub use binding::RenderBinding;
pub use constellations::ConstellationsLayer;
pub use continent::ContinentLayer;
pub use manager::LayerManager;
pub use source_layer::SourceLayer;

use skymap_common::LayerId;
use skymap_renderer::{RendererController, UpdateTypes};
use skymap_units::GeocentricCoordinates;

/// A named object found by search, and where to look for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub location: GeocentricCoordinates,
}

pub trait Layer: Send + Sync {
    fn id(&self) -> LayerId;

    fn name(&self) -> &str;

    /// Key the on/off preference for this layer is stored under.
    fn preference_key(&self) -> &str;

    /// Drop associations with any previous renderer and repopulate this one.
    fn register_with_renderer(&self, controller: RendererController);

    fn set_visible(&self, visible: bool);

    /// One producer tick. Returns what was redrawn; empty means nothing.
    fn update(&self) -> UpdateTypes;

    fn search_by_object_name(&self, _name: &str) -> Vec<SearchResult> {
        Vec::new()
    }

    fn object_names_matching_prefix(&self, _prefix: &str) -> Vec<String> {
        Vec::new()
    }
}
