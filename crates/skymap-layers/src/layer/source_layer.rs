use crate::source::AstronomicalSource;
use parking_lot::Mutex;
use skymap_common::LayerId;
use skymap_renderer::{PrimitiveLists, RendererController, UpdateTypes};

use super::binding::RenderBinding;

/// A layer built from a fixed set of sources.
///
/// The sources and the render binding sit behind separate locks and no method
/// holds both at once: primitives are collected under the source lock, then
/// handed to the binding after it is released.
pub struct SourceLayer {
    sources: Mutex<Vec<Box<dyn AstronomicalSource>>>,
    binding: RenderBinding,
}

impl SourceLayer {
    pub fn new(id: LayerId, name: &str, sources: Vec<Box<dyn AstronomicalSource>>) -> Self {
        Self {
            sources: Mutex::new(sources),
            binding: RenderBinding::new(id, name),
        }
    }

    pub fn binding(&self) -> &RenderBinding {
        &self.binding
    }

    pub fn source_count(&self) -> usize {
        self.sources.lock().len()
    }

    /// Attach to a renderer, re-initialize every source and push a full reset.
    pub fn register(&self, controller: RendererController) {
        self.binding.register(controller);

        let lists = {
            let mut sources = self.sources.lock();
            let mut lists = PrimitiveLists::default();
            for source in sources.iter_mut() {
                source.initialize();
                source.collect_into(&mut lists);
            }
            lists
        };
        self.binding.redraw_reset(lists);
    }

    pub fn set_visible(&self, visible: bool) {
        self.binding.set_visible(visible);
    }

    /// Tick every source; redraw with the union of what changed, if anything.
    pub fn update(&self) -> UpdateTypes {
        let (updates, lists) = {
            let mut sources = self.sources.lock();
            let updates = sources
                .iter_mut()
                .fold(UpdateTypes::empty(), |acc, source| acc | source.update());
            if updates.is_empty() {
                return updates;
            }

            let mut lists = PrimitiveLists::default();
            for source in sources.iter() {
                source.collect_into(&mut lists);
            }
            (updates, lists)
        };

        self.binding.redraw(lists, updates);
        updates
    }

    /// Run `f` over the sources, e.g. to search their names.
    pub fn with_sources<R>(&self, f: impl FnOnce(&[Box<dyn AstronomicalSource>]) -> R) -> R {
        f(&self.sources.lock())
    }
}
