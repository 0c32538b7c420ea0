use crate::primitives::Primitive;
use crate::section::{AtomicSection, ObjectBatch, RenderOp};
use crate::update::UpdateTypes;
use skymap_common::{LayerId, PrimitiveKind};
use std::fmt;
use std::marker::PhantomData;

/// Identifies one manager within a renderer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManagerId(pub u32);

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manager-{}", self.0)
    }
}

/// Handle to a render-thread store of `T` objects.
///
/// The handle holds no drawable state. Every method only appends an operation
/// to an [`AtomicSection`]; nothing changes on the render side until that
/// section is queued and applied.
pub struct RenderManager<T: Primitive> {
    id: ManagerId,
    layer: LayerId,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Primitive> RenderManager<T> {
    pub(crate) fn new(id: ManagerId, layer: LayerId) -> Self {
        Self {
            id,
            layer,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> ManagerId {
        self.id
    }

    pub fn layer(&self) -> LayerId {
        self.layer
    }

    pub fn kind(&self) -> PrimitiveKind {
        T::KIND
    }

    /// Queue `objects` for this manager.
    ///
    /// An empty `updates` set is treated as [`UpdateTypes::RESET`].
    pub fn queue_objects(&self, objects: Vec<T>, updates: UpdateTypes, section: &mut AtomicSection) {
        let updates = if updates.is_empty() {
            UpdateTypes::RESET
        } else {
            updates
        };
        section.push(RenderOp::Objects(T::into_queued(ObjectBatch {
            manager: self.id,
            objects,
            updates,
        })));
    }

    /// Queue a visibility flip for this manager.
    pub fn queue_enabled(&self, enabled: bool, section: &mut AtomicSection) {
        section.push(RenderOp::SetEnabled {
            manager: self.id,
            kind: T::KIND,
            enabled,
        });
    }
}

impl<T: Primitive> Clone for RenderManager<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Primitive> Copy for RenderManager<T> {}

impl<T: Primitive> PartialEq for RenderManager<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: Primitive> Eq for RenderManager<T> {}

impl<T: Primitive> fmt::Debug for RenderManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderManager")
            .field("id", &self.id)
            .field("layer", &self.layer)
            .field("kind", &T::KIND)
            .finish()
    }
}
