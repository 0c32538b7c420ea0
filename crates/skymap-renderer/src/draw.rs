//! The graphics seam: how committed render state reaches a backend.

use crate::primitives::{ImagePrimitive, LinePrimitive, PointPrimitive, TextPrimitive};
use crate::store::RenderStore;
use skymap_common::LayerId;

/// Receives one frame's worth of draw calls.
///
/// Calls arrive in passes by kind (lines, points, images, labels). Within a
/// pass, managers come in layer order. Disabled and empty managers are skipped.
pub trait DrawBackend {
    fn begin_frame(&mut self) {}

    fn draw_lines(&mut self, layer: LayerId, lines: &[LinePrimitive]);

    fn draw_points(&mut self, layer: LayerId, points: &[PointPrimitive]);

    fn draw_images(&mut self, layer: LayerId, images: &[ImagePrimitive]);

    fn draw_labels(&mut self, layer: LayerId, labels: &[TextPrimitive]);

    fn end_frame(&mut self) {}
}

impl RenderStore {
    /// Issue draw calls for everything currently committed.
    pub fn draw(&self, backend: &mut dyn DrawBackend) {
        backend.begin_frame();
        for m in self.lines.drawable() {
            backend.draw_lines(m.layer, &m.objects);
        }
        for m in self.points.drawable() {
            backend.draw_points(m.layer, &m.objects);
        }
        for m in self.images.drawable() {
            backend.draw_images(m.layer, &m.objects);
        }
        for m in self.text.drawable() {
            backend.draw_labels(m.layer, &m.objects);
        }
        backend.end_frame();
    }
}
