use crate::manager::ManagerId;
use crate::primitives::{ImagePrimitive, LinePrimitive, PointPrimitive, Primitive, TextPrimitive};
use crate::section::{AtomicSection, ObjectBatch, QueuedObjects, RenderOp};
use skymap_common::PrimitiveKind;
use tracing::debug;

use super::state::{ManagerState, ManagerTable};

/// Everything the render thread draws, keyed by primitive kind and manager.
///
/// Owned by the render thread. The only way in is [`apply`](Self::apply),
/// which takes a whole section.
#[derive(Debug, Default)]
pub struct RenderStore {
    pub(crate) text: ManagerTable<TextPrimitive>,
    pub(crate) points: ManagerTable<PointPrimitive>,
    pub(crate) lines: ManagerTable<LinePrimitive>,
    pub(crate) images: ManagerTable<ImagePrimitive>,
    sections_applied: u64,
}

impl RenderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every operation of `section`, in order.
    ///
    /// # Panics
    ///
    /// If an operation names a manager that was never created, or one of a
    /// different primitive kind. Both mean a producer broke the protocol.
    pub fn apply(&mut self, section: AtomicSection) {
        let id = section.id();
        let ops = section.into_ops();
        debug!(section = %id, ops = ops.len(), "applying atomic section");

        for op in ops {
            match op {
                RenderOp::CreateManager {
                    manager,
                    kind,
                    layer,
                } => match kind {
                    PrimitiveKind::Text => self.text.create(manager, layer),
                    PrimitiveKind::Point => self.points.create(manager, layer),
                    PrimitiveKind::Line => self.lines.create(manager, layer),
                    PrimitiveKind::Image => self.images.create(manager, layer),
                },
                RenderOp::Objects(queued) => match queued {
                    QueuedObjects::Text(batch) => apply_batch(&mut self.text, batch),
                    QueuedObjects::Point(batch) => apply_batch(&mut self.points, batch),
                    QueuedObjects::Line(batch) => apply_batch(&mut self.lines, batch),
                    QueuedObjects::Image(batch) => apply_batch(&mut self.images, batch),
                },
                RenderOp::SetEnabled {
                    manager,
                    kind,
                    enabled,
                } => {
                    let flag = match kind {
                        PrimitiveKind::Text => &mut self.text.state_mut(manager).enabled,
                        PrimitiveKind::Point => &mut self.points.state_mut(manager).enabled,
                        PrimitiveKind::Line => &mut self.lines.state_mut(manager).enabled,
                        PrimitiveKind::Image => &mut self.images.state_mut(manager).enabled,
                    };
                    *flag = enabled;
                }
            }
        }

        self.sections_applied += 1;
    }

    /// Live state of a manager, if the render side knows it.
    pub fn manager<T: Primitive>(&self, id: ManagerId) -> Option<&ManagerState<T>> {
        T::table(self).get(id)
    }

    pub fn table<T: Primitive>(&self) -> &ManagerTable<T> {
        T::table(self)
    }

    pub fn manager_count(&self) -> usize {
        self.text.len() + self.points.len() + self.lines.len() + self.images.len()
    }

    pub fn sections_applied(&self) -> u64 {
        self.sections_applied
    }
}

fn apply_batch<T: Primitive>(table: &mut ManagerTable<T>, batch: ObjectBatch<T>) {
    table
        .state_mut(batch.manager)
        .apply(batch.objects, batch.updates, batch.manager);
}
