use serde::{Deserialize, Serialize};
use skymap_common::Color;
use skymap_units::{Billboard, GeocentricCoordinates, Vector3};
use std::fmt;
use std::sync::Arc;

/// A text label anchored at a sky position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub location: GeocentricCoordinates,
    pub text: String,
    pub color: Color,
    pub font_size: f32,
    /// Angular offset of the label from its anchor.
    pub offset: f32,
}

impl TextPrimitive {
    pub fn new(location: GeocentricCoordinates, text: impl Into<String>, color: Color) -> Self {
        Self {
            location,
            text: text.into(),
            color,
            font_size: 15.0,
            offset: 0.02,
        }
    }
}

/// Marker shape for a point object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointShape {
    #[default]
    Circle,
    Star,
    Galaxy,
    Cluster,
    Nebula,
}

/// A single point (star, marker) in the sky.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPrimitive {
    pub location: GeocentricCoordinates,
    pub color: Color,
    /// Size in pixels.
    pub size: u32,
    pub shape: PointShape,
}

impl PointPrimitive {
    pub fn new(location: GeocentricCoordinates, color: Color, size: u32) -> Self {
        Self {
            location,
            color,
            size,
            shape: PointShape::Circle,
        }
    }
}

/// A polyline through sky positions.
///
/// The vertex buffer is owned by the line and rewritten in place on refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub vertices: Vec<GeocentricCoordinates>,
    pub color: Color,
    pub line_width: f32,
}

impl LinePrimitive {
    pub fn new(color: Color, line_width: f32, vertices: Vec<GeocentricCoordinates>) -> Self {
        Self {
            vertices,
            color,
            line_width,
        }
    }
}

/// Opaque reference to an image asset. Loading and caching happen elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A billboarded image such as a planet or galaxy photograph.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePrimitive {
    pub location: GeocentricCoordinates,
    pub image: ImageHandle,
    pub billboard: Billboard,
    pub requires_blending: bool,
}

impl ImagePrimitive {
    pub fn new(location: GeocentricCoordinates, image: ImageHandle, up: Vector3, scale: f32) -> Self {
        Self {
            location,
            image,
            billboard: Billboard::from_up_vector(&location, up, scale),
            requires_blending: false,
        }
    }

    /// Recompute the billboard basis after the location or up vector changed.
    pub fn set_up_vector(&mut self, up: Vector3, scale: f32) {
        self.billboard = Billboard::from_up_vector(&self.location, up, scale);
    }
}

/// One batch of primitives of every kind, as a layer hands them to its renderer.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveLists {
    pub text: Vec<TextPrimitive>,
    pub points: Vec<PointPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub images: Vec<ImagePrimitive>,
}

impl PrimitiveLists {
    pub fn len(&self) -> usize {
        self.text.len() + self.points.len() + self.lines.len() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
