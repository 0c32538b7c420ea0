//! Sky-map layers: the producer side of the render pipeline.
//!
//! A [`Layer`] owns the sources of one visual category. Sources keep their
//! geometry in native coordinates (RA/Dec or lat/long) and refresh the derived
//! sky directions in place when the observer's clock moves far enough. The
//! layer turns the current primitives into one atomic section per redraw.

pub mod data;
pub mod layer;
pub mod model;
pub mod refresh;
pub mod source;

pub use layer::{
    ConstellationsLayer, ContinentLayer, Layer, LayerManager, RenderBinding, SearchResult,
    SourceLayer,
};
pub use model::{AstronomerModel, ManualModel, Pointing, SimClock, MAX_TIME_SPEED};
pub use refresh::{RefreshGate, RefreshPolicy};
pub use source::{AstronomicalSource, CatalogSource, ContinentSource, HasImages, HasLines, HasPoints, HasText};
