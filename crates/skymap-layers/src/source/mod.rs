//! Sources: the per-category producers of primitives.
//!
//! A source implements only the capabilities it has. [`AstronomicalSource`]
//! ties them together with the initialize/update lifecycle a layer drives.

mod catalog;
mod continent;


pub use catalog::CatalogSource;
pub use continent::{ContinentSource, CONTINENT_LINE_COLOR, CONTINENT_LINE_WIDTH};

use skymap_renderer::{
    ImagePrimitive, LinePrimitive, PointPrimitive, PrimitiveLists, TextPrimitive, UpdateTypes,
};
use skymap_units::GeocentricCoordinates;

pub trait HasText {
    fn text(&self) -> &[TextPrimitive];
}

pub trait HasPoints {
    fn points(&self) -> &[PointPrimitive];
}

pub trait HasLines {
    fn lines(&self) -> &[LinePrimitive];
}

pub trait HasImages {
    fn images(&self) -> &[ImagePrimitive];
}

/// A producer of sky primitives with a refresh lifecycle.
pub trait AstronomicalSource: Send {
    /// Compute positions for the first time. Called on every (re)registration.
    fn initialize(&mut self);

    /// Called once per tick. Returns what changed; empty means nothing did.
    fn update(&mut self) -> UpdateTypes;

    fn as_text(&self) -> Option<&dyn HasText> {
        None
    }

    fn as_points(&self) -> Option<&dyn HasPoints> {
        None
    }

    fn as_lines(&self) -> Option<&dyn HasLines> {
        None
    }

    fn as_images(&self) -> Option<&dyn HasImages> {
        None
    }

    /// Names this source answers to in a search.
    fn names(&self) -> &[String] {
        &[]
    }

    /// Where a search hit on this source should point.
    fn search_location(&self) -> Option<GeocentricCoordinates> {
        None
    }

    /// Append a copy of every current primitive to `lists`.
    fn collect_into(&self, lists: &mut PrimitiveLists) {
        if let Some(source) = self.as_text() {
            lists.text.extend_from_slice(source.text());
        }
        if let Some(source) = self.as_points() {
            lists.points.extend_from_slice(source.points());
        }
        if let Some(source) = self.as_lines() {
            lists.lines.extend_from_slice(source.lines());
        }
        if let Some(source) = self.as_images() {
            lists.images.extend_from_slice(source.images());
        }
    }
}
