use crate::manager::{RenderManager, RenderMap};
use crate::section::{ObjectBatch, QueuedObjects};
use crate::store::{ManagerTable, RenderStore};
use skymap_common::PrimitiveKind;

use super::types::{ImagePrimitive, LinePrimitive, PointPrimitive, TextPrimitive};

/// A drawable object type with a dedicated render manager.
///
/// The four implementations are fixed; the hidden methods route a type to its
/// slot in a [`RenderMap`], its table in the [`RenderStore`], and its variant
/// in the section wire format.
pub trait Primitive: Clone + Send + 'static {
    const KIND: PrimitiveKind;

    /// Copy positional fields from `other`, keeping everything else.
    fn update_positions_from(&mut self, other: &Self);

    /// Copy image fields from `other`. No-op for kinds without images.
    fn update_image_from(&mut self, _other: &Self) {}

    #[doc(hidden)]
    fn into_queued(batch: ObjectBatch<Self>) -> QueuedObjects;

    #[doc(hidden)]
    fn slot(map: &mut RenderMap) -> &mut Option<RenderManager<Self>>;

    #[doc(hidden)]
    fn table(store: &RenderStore) -> &ManagerTable<Self>;
}

impl Primitive for TextPrimitive {
    const KIND: PrimitiveKind = PrimitiveKind::Text;

    fn update_positions_from(&mut self, other: &Self) {
        self.location = other.location;
    }

    fn into_queued(batch: ObjectBatch<Self>) -> QueuedObjects {
        QueuedObjects::Text(batch)
    }

    fn slot(map: &mut RenderMap) -> &mut Option<RenderManager<Self>> {
        &mut map.text
    }

    fn table(store: &RenderStore) -> &ManagerTable<Self> {
        &store.text
    }
}

impl Primitive for PointPrimitive {
    const KIND: PrimitiveKind = PrimitiveKind::Point;

    fn update_positions_from(&mut self, other: &Self) {
        self.location = other.location;
    }

    fn into_queued(batch: ObjectBatch<Self>) -> QueuedObjects {
        QueuedObjects::Point(batch)
    }

    fn slot(map: &mut RenderMap) -> &mut Option<RenderManager<Self>> {
        &mut map.points
    }

    fn table(store: &RenderStore) -> &ManagerTable<Self> {
        &store.points
    }
}

impl Primitive for LinePrimitive {
    const KIND: PrimitiveKind = PrimitiveKind::Line;

    fn update_positions_from(&mut self, other: &Self) {
        if self.vertices.len() == other.vertices.len() {
            self.vertices.copy_from_slice(&other.vertices);
        } else {
            self.vertices.clone_from(&other.vertices);
        }
    }

    fn into_queued(batch: ObjectBatch<Self>) -> QueuedObjects {
        QueuedObjects::Line(batch)
    }

    fn slot(map: &mut RenderMap) -> &mut Option<RenderManager<Self>> {
        &mut map.lines
    }

    fn table(store: &RenderStore) -> &ManagerTable<Self> {
        &store.lines
    }
}

impl Primitive for ImagePrimitive {
    const KIND: PrimitiveKind = PrimitiveKind::Image;

    fn update_positions_from(&mut self, other: &Self) {
        self.location = other.location;
        self.billboard = other.billboard;
    }

    fn update_image_from(&mut self, other: &Self) {
        self.image = other.image.clone();
        self.requires_blending = other.requires_blending;
    }

    fn into_queued(batch: ObjectBatch<Self>) -> QueuedObjects {
        QueuedObjects::Image(batch)
    }

    fn slot(map: &mut RenderMap) -> &mut Option<RenderManager<Self>> {
        &mut map.images
    }

    fn table(store: &RenderStore) -> &ManagerTable<Self> {
        &store.images
    }
}
