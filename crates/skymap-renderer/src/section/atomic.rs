use crate::manager::{ManagerId, RenderManager};
use crate::primitives::{ImagePrimitive, LinePrimitive, PointPrimitive, Primitive, TextPrimitive};
use crate::update::UpdateTypes;
use skymap_common::{LayerId, PrimitiveKind};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Sequence number of a section within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(pub u64);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section-{}", self.0)
    }
}

/// Objects queued for one manager.
#[derive(Debug, Clone)]
pub struct ObjectBatch<T> {
    pub manager: ManagerId,
    pub objects: Vec<T>,
    pub updates: UpdateTypes,
}

/// An [`ObjectBatch`] tagged with its primitive kind.
#[derive(Debug, Clone)]
pub enum QueuedObjects {
    Text(ObjectBatch<TextPrimitive>),
    Point(ObjectBatch<PointPrimitive>),
    Line(ObjectBatch<LinePrimitive>),
    Image(ObjectBatch<ImagePrimitive>),
}

impl QueuedObjects {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            QueuedObjects::Text(_) => PrimitiveKind::Text,
            QueuedObjects::Point(_) => PrimitiveKind::Point,
            QueuedObjects::Line(_) => PrimitiveKind::Line,
            QueuedObjects::Image(_) => PrimitiveKind::Image,
        }
    }

    pub fn manager(&self) -> ManagerId {
        match self {
            QueuedObjects::Text(b) => b.manager,
            QueuedObjects::Point(b) => b.manager,
            QueuedObjects::Line(b) => b.manager,
            QueuedObjects::Image(b) => b.manager,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            QueuedObjects::Text(b) => b.objects.len(),
            QueuedObjects::Point(b) => b.objects.len(),
            QueuedObjects::Line(b) => b.objects.len(),
            QueuedObjects::Image(b) => b.objects.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn updates(&self) -> UpdateTypes {
        match self {
            QueuedObjects::Text(b) => b.updates,
            QueuedObjects::Point(b) => b.updates,
            QueuedObjects::Line(b) => b.updates,
            QueuedObjects::Image(b) => b.updates,
        }
    }
}

/// One deferred change to render-side state.
#[derive(Debug, Clone)]
pub enum RenderOp {
    CreateManager {
        manager: ManagerId,
        kind: PrimitiveKind,
        layer: LayerId,
    },
    Objects(QueuedObjects),
    SetEnabled {
        manager: ManagerId,
        kind: PrimitiveKind,
        enabled: bool,
    },
}

impl RenderOp {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            RenderOp::CreateManager { kind, .. } | RenderOp::SetEnabled { kind, .. } => *kind,
            RenderOp::Objects(objects) => objects.kind(),
        }
    }

    pub fn manager(&self) -> ManagerId {
        match self {
            RenderOp::CreateManager { manager, .. } | RenderOp::SetEnabled { manager, .. } => {
                *manager
            }
            RenderOp::Objects(objects) => objects.manager(),
        }
    }
}

/// A batch of render operations that takes effect as one unit.
///
/// Besides queueing objects, a section is where managers are created, so a
/// manager and its first objects always arrive together.
#[derive(Debug)]
pub struct AtomicSection {
    id: SectionId,
    ops: Vec<RenderOp>,
    next_manager: Arc<AtomicU32>,
}

impl AtomicSection {
    pub(crate) fn new(id: SectionId, next_manager: Arc<AtomicU32>) -> Self {
        Self {
            id,
            ops: Vec::new(),
            next_manager,
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub(crate) fn push(&mut self, op: RenderOp) {
        self.ops.push(op);
    }

    pub(crate) fn into_ops(self) -> Vec<RenderOp> {
        self.ops
    }

    /// Allocate a manager for primitives of type `T` owned by `layer`.
    pub fn create_manager<T: Primitive>(&mut self, layer: LayerId) -> RenderManager<T> {
        let id = ManagerId(self.next_manager.fetch_add(1, Ordering::Relaxed));
        self.push(RenderOp::CreateManager {
            manager: id,
            kind: T::KIND,
            layer,
        });
        RenderManager::new(id, layer)
    }

    pub fn create_label_manager(&mut self, layer: LayerId) -> RenderManager<TextPrimitive> {
        self.create_manager(layer)
    }

    pub fn create_point_manager(&mut self, layer: LayerId) -> RenderManager<PointPrimitive> {
        self.create_manager(layer)
    }

    pub fn create_line_manager(&mut self, layer: LayerId) -> RenderManager<LinePrimitive> {
        self.create_manager(layer)
    }

    pub fn create_image_manager(&mut self, layer: LayerId) -> RenderManager<ImagePrimitive> {
        self.create_manager(layer)
    }
}
