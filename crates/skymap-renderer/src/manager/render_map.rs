use crate::primitives::{ImagePrimitive, LinePrimitive, PointPrimitive, Primitive, TextPrimitive};
use crate::section::AtomicSection;

use super::handle::{ManagerId, RenderManager};
use skymap_common::PrimitiveKind;

/// A layer's managers, one slot per primitive kind.
///
/// Slots fill lazily and stay filled: an emptied kind keeps its manager so
/// render-side resources survive until the renderer itself is replaced.
#[derive(Debug, Default)]
pub struct RenderMap {
    pub(crate) text: Option<RenderManager<TextPrimitive>>,
    pub(crate) points: Option<RenderManager<PointPrimitive>>,
    pub(crate) lines: Option<RenderManager<LinePrimitive>>,
    pub(crate) images: Option<RenderManager<ImagePrimitive>>,
}

impl RenderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: Primitive>(&mut self) -> Option<RenderManager<T>> {
        *T::slot(self)
    }

    pub fn insert<T: Primitive>(&mut self, manager: RenderManager<T>) {
        *T::slot(self) = Some(manager);
    }

    /// Drop every association; used when the renderer they belong to goes away.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind and id of every filled slot, in [`PrimitiveKind::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (PrimitiveKind, ManagerId)> + '_ {
        [
            self.text.map(|m| (m.kind(), m.id())),
            self.points.map(|m| (m.kind(), m.id())),
            self.lines.map(|m| (m.kind(), m.id())),
            self.images.map(|m| (m.kind(), m.id())),
        ]
        .into_iter()
        .flatten()
    }

    /// Queue an enable/disable for every manager held.
    pub fn queue_enabled(&self, enabled: bool, section: &mut AtomicSection) {
        if let Some(m) = &self.text {
            m.queue_enabled(enabled, section);
        }
        if let Some(m) = &self.points {
            m.queue_enabled(enabled, section);
        }
        if let Some(m) = &self.lines {
            m.queue_enabled(enabled, section);
        }
        if let Some(m) = &self.images {
            m.queue_enabled(enabled, section);
        }
    }
}
