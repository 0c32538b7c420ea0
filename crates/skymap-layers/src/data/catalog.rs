use serde::Deserialize;
use skymap_common::{Color, DataError};
use skymap_renderer::PointShape;
use skymap_units::{RaDec, Vector3};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// A catalog file: a list of named objects with static sky geometry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub sources: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// One catalog object, e.g. a constellation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    pub names: Vec<String>,
    /// Where a search for this object should point.
    pub location: Option<RaDec>,
    pub points: Vec<CatalogPoint>,
    pub lines: Vec<CatalogLine>,
    pub labels: Vec<CatalogLabel>,
    pub images: Vec<CatalogImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPoint {
    pub position: RaDec,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_point_size")]
    pub size: u32,
    #[serde(default)]
    pub shape: PointShape,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogLine {
    pub vertices: Vec<RaDec>,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_line_width")]
    pub width: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogLabel {
    pub position: RaDec,
    pub text: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogImage {
    pub position: RaDec,
    /// Opaque asset name handed to the renderer.
    pub image: String,
    #[serde(default = "default_up")]
    pub up: Vector3,
    #[serde(default = "default_image_scale")]
    pub scale: f32,
    #[serde(default)]
    pub requires_blending: bool,
}

fn default_point_size() -> u32 {
    3
}

fn default_line_width() -> f32 {
    1.5
}

fn default_font_size() -> f32 {
    15.0
}

fn default_up() -> Vector3 {
    Vector3::Z
}

fn default_image_scale() -> f32 {
    0.1
}

pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog, DataError> {
    serde_json::from_reader(reader).map_err(|e| DataError::Malformed {
        line: e.line(),
        reason: e.to_string(),
    })
}

pub fn try_load_catalog(path: &Path) -> Result<Catalog, DataError> {
    let file = File::open(path).map_err(|e| DataError::Unavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    read_catalog(BufReader::new(file))
}

/// Load a catalog from `path`, or an empty one if it cannot be read.
pub fn load_catalog(path: &Path) -> Catalog {
    match try_load_catalog(path) {
        Ok(catalog) => {
            info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
            catalog
        }
        Err(e) => {
            warn!("catalog unavailable, continuing without it: {e}");
            Catalog::default()
        }
    }
}
