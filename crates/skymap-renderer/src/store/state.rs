use crate::manager::ManagerId;
use crate::primitives::Primitive;
use crate::update::UpdateTypes;
use skymap_common::LayerId;
use std::collections::BTreeMap;
use tracing::debug;

/// Live state of one manager.
#[derive(Debug, Clone)]
pub struct ManagerState<T> {
    pub layer: LayerId,
    pub enabled: bool,
    pub objects: Vec<T>,
    /// Bumped on every applied object batch.
    pub revision: u64,
}

impl<T: Primitive> ManagerState<T> {
    fn new(layer: LayerId) -> Self {
        Self {
            layer,
            enabled: true,
            objects: Vec::new(),
            revision: 0,
        }
    }

    /// Apply one queued batch.
    ///
    /// Without `RESET`, objects are patched in place pairwise. A batch whose
    /// length differs from what is stored cannot be paired up, so it replaces.
    pub(crate) fn apply(&mut self, objects: Vec<T>, updates: UpdateTypes, id: ManagerId) {
        self.revision += 1;

        if updates.contains(UpdateTypes::RESET) || self.objects.len() != objects.len() {
            if !updates.contains(UpdateTypes::RESET) {
                debug!(
                    manager = %id,
                    stored = self.objects.len(),
                    queued = objects.len(),
                    "object count changed, replacing"
                );
            }
            self.objects = objects;
            return;
        }

        for (current, queued) in self.objects.iter_mut().zip(&objects) {
            if updates.contains(UpdateTypes::UPDATE_POSITIONS) {
                current.update_positions_from(queued);
            }
            if updates.contains(UpdateTypes::UPDATE_IMAGES) {
                current.update_image_from(queued);
            }
        }
    }
}

/// All managers of one primitive kind, ordered by id.
#[derive(Debug)]
pub struct ManagerTable<T> {
    managers: BTreeMap<ManagerId, ManagerState<T>>,
}

impl<T> Default for ManagerTable<T> {
    fn default() -> Self {
        Self {
            managers: BTreeMap::new(),
        }
    }
}

impl<T: Primitive> ManagerTable<T> {
    pub fn get(&self, id: ManagerId) -> Option<&ManagerState<T>> {
        self.managers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ManagerId, &ManagerState<T>)> {
        self.managers.iter().map(|(id, state)| (*id, state))
    }

    /// Enabled, non-empty managers sorted by layer then id.
    pub(crate) fn drawable(&self) -> Vec<&ManagerState<T>> {
        let mut managers: Vec<_> = self
            .managers
            .values()
            .filter(|m| m.enabled && !m.objects.is_empty())
            .collect();
        managers.sort_by_key(|m| m.layer);
        managers
    }

    pub(crate) fn create(&mut self, id: ManagerId, layer: LayerId) {
        if self.managers.insert(id, ManagerState::new(layer)).is_some() {
            panic!("{} {id} created twice", T::KIND);
        }
    }

    pub(crate) fn state_mut(&mut self, id: ManagerId) -> &mut ManagerState<T> {
        match self.managers.get_mut(&id) {
            Some(state) => state,
            None => panic!("no {} render manager with id {id}", T::KIND),
        }
    }
}
