use crate::error::RendererError;

use super::atomic::{AtomicSection, SectionId};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Create a controller and the render-side queue it feeds.
///
/// The channel is unbounded: producers never wait for the render thread.
pub fn channel() -> (RendererController, SectionQueue) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let controller = RendererController {
        shared: Arc::new(Shared {
            sender,
            next_section: AtomicU64::new(0),
            next_manager: Arc::new(AtomicU32::new(0)),
        }),
    };
    (
        controller,
        SectionQueue {
            receiver,
            disconnected: false,
        },
    )
}

struct Shared {
    sender: Sender<AtomicSection>,
    next_section: AtomicU64,
    next_manager: Arc<AtomicU32>,
}

/// Producer-side entry point to one renderer instance.
///
/// Cheap to clone; all clones feed the same render thread.
#[derive(Clone)]
pub struct RendererController {
    shared: Arc<Shared>,
}

impl RendererController {
    /// Start an empty section.
    pub fn create_atomic(&self) -> AtomicSection {
        let id = SectionId(self.shared.next_section.fetch_add(1, Ordering::Relaxed));
        AtomicSection::new(id, Arc::clone(&self.shared.next_manager))
    }

    /// Hand a finished section to the render thread.
    ///
    /// Fails only if the render side has been dropped.
    pub fn queue_atomic(&self, section: AtomicSection) -> Result<(), RendererError> {
        let id = section.id();
        debug!(section = %id, ops = section.len(), "queueing atomic section");
        self.shared
            .sender
            .send(section)
            .map_err(|_| RendererError::Disconnected(id))
    }

    /// Whether two controllers feed the same renderer instance.
    pub fn same_renderer(&self, other: &RendererController) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl std::fmt::Debug for RendererController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererController")
            .field("sections", &self.shared.next_section.load(Ordering::Relaxed))
            .finish()
    }
}

/// Render-side end of the section channel.
pub struct SectionQueue {
    receiver: Receiver<AtomicSection>,
    disconnected: bool,
}

impl SectionQueue {
    /// Next committed section, without blocking.
    pub fn try_next(&mut self) -> Option<AtomicSection> {
        match self.receiver.try_recv() {
            Ok(section) => Some(section),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.disconnected = true;
                None
            }
        }
    }

    /// Take up to `limit` sections (0 = all that are waiting), oldest first.
    pub fn drain(&mut self, limit: usize) -> Vec<AtomicSection> {
        let mut sections = Vec::new();
        while limit == 0 || sections.len() < limit {
            match self.try_next() {
                Some(section) => sections.push(section),
                None => break,
            }
        }
        sections
    }

    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// True once every controller is gone and the queue has been emptied.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}
