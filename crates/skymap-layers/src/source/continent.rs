use crate::data::Polyline;
use crate::model::AstronomerModel;
use crate::refresh::{RefreshGate, RefreshPolicy};
use chrono::{DateTime, Utc};
use skymap_common::Color;
use skymap_renderer::{LinePrimitive, UpdateTypes};
use skymap_units::{CoordinateTransformer, GeocentricCoordinates};
use std::sync::Arc;
use tracing::debug;

use super::{AstronomicalSource, HasLines};

pub const CONTINENT_LINE_COLOR: Color = Color::from_argb(120, 86, 176, 245);
pub const CONTINENT_LINE_WIDTH: f32 = 1.5;

/// Coastline outlines, tied to the ground and so moving across the sky.
///
/// Each polyline owns one [`LinePrimitive`] whose vertex buffer is sized once
/// and rewritten in place on every refresh.
pub struct ContinentSource {
    model: Arc<dyn AstronomerModel>,
    transformer: CoordinateTransformer,
    polylines: Vec<Polyline>,
    lines: Vec<LinePrimitive>,
    gate: RefreshGate,
}

impl ContinentSource {
    pub fn new(
        model: Arc<dyn AstronomerModel>,
        transformer: CoordinateTransformer,
        polylines: Vec<Polyline>,
        policy: RefreshPolicy,
    ) -> Self {
        let lines = polylines
            .iter()
            .map(|polyline| {
                LinePrimitive::new(
                    CONTINENT_LINE_COLOR,
                    CONTINENT_LINE_WIDTH,
                    vec![GeocentricCoordinates::default(); polyline.len()],
                )
            })
            .collect();

        Self {
            model,
            transformer,
            polylines,
            lines,
            gate: RefreshGate::new(policy),
        }
    }

    pub fn gate(&self) -> &RefreshGate {
        &self.gate
    }

    fn refresh(&mut self, time: DateTime<Utc>) {
        let observer = self.model.location();
        for (line, polyline) in self.lines.iter_mut().zip(&self.polylines) {
            for (vertex, target) in line.vertices.iter_mut().zip(polyline) {
                self.transformer
                    .update_from_lat_long(vertex, time, observer, *target);
            }
        }
        debug!(%time, lines = self.lines.len(), "continent positions refreshed");
    }
}

impl AstronomicalSource for ContinentSource {
    fn initialize(&mut self) {
        let now = self.model.time();
        self.refresh(now);
        self.gate.initialized(now);
    }

    fn update(&mut self) -> UpdateTypes {
        let now = self.model.time();
        if !self.gate.should_refresh(now) {
            return UpdateTypes::empty();
        }
        self.refresh(now);
        UpdateTypes::UPDATE_POSITIONS
    }

    fn as_lines(&self) -> Option<&dyn HasLines> {
        Some(self)
    }
}

impl HasLines for ContinentSource {
    fn lines(&self) -> &[LinePrimitive] {
        &self.lines
    }
}
