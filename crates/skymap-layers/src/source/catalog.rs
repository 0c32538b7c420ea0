use crate::data::CatalogEntry;
use skymap_renderer::{
    ImageHandle, ImagePrimitive, LinePrimitive, PointPrimitive, TextPrimitive, UpdateTypes,
};
use skymap_units::GeocentricCoordinates;

use super::{AstronomicalSource, HasImages, HasLines, HasPoints, HasText};

/// A catalog object with fixed RA/Dec geometry.
///
/// Positions do not depend on time, so they are computed at initialization
/// and `update` never reports a change.
pub struct CatalogSource {
    entry: CatalogEntry,
    text: Vec<TextPrimitive>,
    points: Vec<PointPrimitive>,
    lines: Vec<LinePrimitive>,
    images: Vec<ImagePrimitive>,
}

impl CatalogSource {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            text: Vec::new(),
            points: Vec::new(),
            lines: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }
}

impl AstronomicalSource for CatalogSource {
    fn initialize(&mut self) {
        let entry = &self.entry;

        self.text = entry
            .labels
            .iter()
            .map(|label| {
                let mut text = TextPrimitive::new(
                    GeocentricCoordinates::from_ra_dec(label.position),
                    label.text.clone(),
                    label.color,
                );
                text.font_size = label.font_size;
                text
            })
            .collect();

        self.points = entry
            .points
            .iter()
            .map(|point| {
                let mut primitive = PointPrimitive::new(
                    GeocentricCoordinates::from_ra_dec(point.position),
                    point.color,
                    point.size,
                );
                primitive.shape = point.shape;
                primitive
            })
            .collect();

        self.lines = entry
            .lines
            .iter()
            .map(|line| {
                LinePrimitive::new(
                    line.color,
                    line.width,
                    line.vertices
                        .iter()
                        .copied()
                        .map(GeocentricCoordinates::from_ra_dec)
                        .collect(),
                )
            })
            .collect();

        self.images = entry
            .images
            .iter()
            .map(|image| {
                let mut primitive = ImagePrimitive::new(
                    GeocentricCoordinates::from_ra_dec(image.position),
                    ImageHandle::new(image.image.as_str()),
                    image.up,
                    image.scale,
                );
                primitive.requires_blending = image.requires_blending;
                primitive
            })
            .collect();
    }

    fn update(&mut self) -> UpdateTypes {
        UpdateTypes::empty()
    }

    fn as_text(&self) -> Option<&dyn HasText> {
        (!self.entry.labels.is_empty()).then_some(self as &dyn HasText)
    }

    fn as_points(&self) -> Option<&dyn HasPoints> {
        (!self.entry.points.is_empty()).then_some(self as &dyn HasPoints)
    }

    fn as_lines(&self) -> Option<&dyn HasLines> {
        (!self.entry.lines.is_empty()).then_some(self as &dyn HasLines)
    }

    fn as_images(&self) -> Option<&dyn HasImages> {
        (!self.entry.images.is_empty()).then_some(self as &dyn HasImages)
    }

    fn names(&self) -> &[String] {
        &self.entry.names
    }

    fn search_location(&self) -> Option<GeocentricCoordinates> {
        self.entry
            .location
            .map(GeocentricCoordinates::from_ra_dec)
            .or_else(|| {
                self.entry
                    .labels
                    .first()
                    .map(|label| GeocentricCoordinates::from_ra_dec(label.position))
            })
    }
}

impl HasText for CatalogSource {
    fn text(&self) -> &[TextPrimitive] {
        &self.text
    }
}

impl HasPoints for CatalogSource {
    fn points(&self) -> &[PointPrimitive] {
        &self.points
    }
}

impl HasLines for CatalogSource {
    fn lines(&self) -> &[LinePrimitive] {
        &self.lines
    }
}

impl HasImages for CatalogSource {
    fn images(&self) -> &[ImagePrimitive] {
        &self.images
    }
}
