//! A draw backend with no window: packs vertices and reports what it drew.

use skymap_common::LayerId;
use skymap_renderer::vertex::{
    pack_images, pack_lines, pack_points, ImageVertex, LineVertex, PointVertex,
};
use skymap_renderer::{DrawBackend, ImagePrimitive, LinePrimitive, PointPrimitive, TextPrimitive};
use std::time::{Duration, Instant};
use tracing::info;

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Primitive counts from the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub lines: usize,
    pub points: usize,
    pub images: usize,
    pub labels: usize,
    pub upload_bytes: usize,
}

pub struct HeadlessBackend {
    points: Vec<PointVertex>,
    lines: Vec<LineVertex>,
    images: Vec<ImageVertex>,
    current: FrameCounts,
    last_frame: FrameCounts,
    frames_since_report: u32,
    last_report: Instant,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            images: Vec::new(),
            current: FrameCounts::default(),
            last_frame: FrameCounts::default(),
            frames_since_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn last_frame(&self) -> FrameCounts {
        self.last_frame
    }
}

impl DrawBackend for HeadlessBackend {
    fn begin_frame(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.images.clear();
        self.current = FrameCounts::default();
    }

    fn draw_lines(&mut self, _layer: LayerId, lines: &[LinePrimitive]) {
        self.current.lines += lines.len();
        pack_lines(lines, &mut self.lines);
    }

    fn draw_points(&mut self, _layer: LayerId, points: &[PointPrimitive]) {
        self.current.points += points.len();
        pack_points(points, &mut self.points);
    }

    fn draw_images(&mut self, _layer: LayerId, images: &[ImagePrimitive]) {
        self.current.images += images.len();
        pack_images(images, &mut self.images);
    }

    fn draw_labels(&mut self, _layer: LayerId, labels: &[TextPrimitive]) {
        self.current.labels += labels.len();
    }

    fn end_frame(&mut self) {
        self.current.upload_bytes = bytemuck::cast_slice::<PointVertex, u8>(&self.points).len()
            + bytemuck::cast_slice::<LineVertex, u8>(&self.lines).len()
            + bytemuck::cast_slice::<ImageVertex, u8>(&self.images).len();
        self.last_frame = self.current;
        self.frames_since_report += 1;

        if self.last_report.elapsed() >= REPORT_INTERVAL {
            let c = self.last_frame;
            info!(
                frames = self.frames_since_report,
                lines = c.lines,
                points = c.points,
                images = c.images,
                labels = c.labels,
                upload_bytes = c.upload_bytes,
                "drawing"
            );
            self.frames_since_report = 0;
            self.last_report = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymap_common::Color;
    use skymap_units::GeocentricCoordinates;

    #[test]
    fn counts_and_packs_one_frame() {
        let mut backend = HeadlessBackend::new();
        let a = GeocentricCoordinates::new(1.0, 0.0, 0.0);
        let b = GeocentricCoordinates::new(0.0, 1.0, 0.0);
        let c = GeocentricCoordinates::new(0.0, 0.0, 1.0);

        backend.begin_frame();
        backend.draw_lines(LayerId(0), &[LinePrimitive::new(Color::WHITE, 1.0, vec![a, b, c])]);
        backend.draw_points(LayerId(0), &[PointPrimitive::new(a, Color::WHITE, 2)]);
        backend.draw_labels(LayerId(0), &[TextPrimitive::new(b, "b", Color::WHITE)]);
        backend.end_frame();

        let counts = backend.last_frame();
        assert_eq!(counts.lines, 1);
        assert_eq!(counts.points, 1);
        assert_eq!(counts.labels, 1);
        // Two segments of two 32-byte vertices, plus one 32-byte point.
        assert_eq!(counts.upload_bytes, 4 * 32 + 32);
    }

    #[test]
    fn each_frame_starts_empty() {
        let mut backend = HeadlessBackend::new();
        let a = GeocentricCoordinates::new(1.0, 0.0, 0.0);
        backend.begin_frame();
        backend.draw_points(LayerId(0), &[PointPrimitive::new(a, Color::WHITE, 2)]);
        backend.end_frame();
        backend.begin_frame();
        backend.end_frame();
        assert_eq!(backend.last_frame(), FrameCounts::default());
    }
}
