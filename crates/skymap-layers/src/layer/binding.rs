use parking_lot::Mutex;
use skymap_common::{LayerId, PrimitiveKind};
use skymap_renderer::{
    AtomicSection, ManagerId, Primitive, PrimitiveLists, RenderMap, RendererController,
    UpdateTypes,
};
use tracing::{debug, info, warn};

struct BindingState {
    controller: Option<RendererController>,
    render_map: RenderMap,
    visible: bool,
}

/// A layer's connection to a renderer: the controller and the layer's managers.
///
/// Every mutation happens under one lock, held only while a single section is
/// built and queued.
pub struct RenderBinding {
    layer: LayerId,
    name: String,
    state: Mutex<BindingState>,
}

impl RenderBinding {
    pub fn new(layer: LayerId, name: impl Into<String>) -> Self {
        Self {
            layer,
            name: name.into(),
            state: Mutex::new(BindingState {
                controller: None,
                render_map: RenderMap::new(),
                visible: true,
            }),
        }
    }

    /// Attach to `controller`.
    ///
    /// Managers are kept when `controller` feeds the renderer they already
    /// live in, and forgotten when it feeds a different one.
    pub fn register(&self, controller: RendererController) {
        let mut state = self.state.lock();
        let same_renderer = state
            .controller
            .as_ref()
            .is_some_and(|previous| previous.same_renderer(&controller));
        if !same_renderer {
            state.render_map.clear();
        }
        state.controller = Some(controller);
        info!(layer = %self.layer, name = %self.name, same_renderer, "registered with renderer");
    }

    pub fn is_registered(&self) -> bool {
        self.state.lock().controller.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    /// Kind and id of every manager this layer owns.
    pub fn managers(&self) -> Vec<(PrimitiveKind, ManagerId)> {
        self.state.lock().render_map.entries().collect()
    }

    /// Queue one section flipping every owned manager on or off.
    ///
    /// The flag is remembered, so managers created later start out matching it.
    pub fn set_visible(&self, visible: bool) {
        let mut state = self.state.lock();
        state.visible = visible;

        let Some(controller) = state.controller.as_ref() else {
            debug!(name = %self.name, visible, "not registered yet, visibility kept for later");
            return;
        };

        let mut section = controller.create_atomic();
        state.render_map.queue_enabled(visible, &mut section);
        debug!(name = %self.name, visible, ops = section.len(), "queueing visibility");
        if let Err(e) = controller.queue_atomic(section) {
            warn!(name = %self.name, "visibility change dropped: {e}");
        }
    }

    /// Replace all of this layer's primitives in one section.
    pub fn redraw_reset(&self, lists: PrimitiveLists) {
        self.redraw(lists, UpdateTypes::RESET);
    }

    /// Hand `lists` to the renderer as one section.
    ///
    /// A kind with no objects only reaches its existing manager as an empty
    /// batch; a kind seen for the first time gets a manager created in the
    /// same section as its objects.
    pub fn redraw(&self, lists: PrimitiveLists, updates: UpdateTypes) {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let Some(controller) = state.controller.as_ref() else {
            warn!(name = %self.name, "renderer not set, ignoring redraw");
            return;
        };

        let mut section = controller.create_atomic();
        let PrimitiveLists {
            text,
            points,
            lines,
            images,
        } = lists;
        let target = Target {
            layer: self.layer,
            visible: state.visible,
            updates,
        };
        target.set_sources(&mut state.render_map, text, &mut section);
        target.set_sources(&mut state.render_map, points, &mut section);
        target.set_sources(&mut state.render_map, lines, &mut section);
        target.set_sources(&mut state.render_map, images, &mut section);

        if section.is_empty() {
            return;
        }
        if let Err(e) = controller.queue_atomic(section) {
            warn!(name = %self.name, "redraw dropped: {e}");
        }
    }
}

struct Target {
    layer: LayerId,
    visible: bool,
    updates: UpdateTypes,
}

impl Target {
    fn set_sources<T: Primitive>(
        &self,
        render_map: &mut RenderMap,
        objects: Vec<T>,
        section: &mut AtomicSection,
    ) {
        let existing = render_map.get::<T>();

        if objects.is_empty() {
            if let Some(manager) = existing {
                manager.queue_objects(Vec::new(), self.updates, section);
            }
            return;
        }

        let manager = match existing {
            Some(manager) => manager,
            None => {
                let manager = section.create_manager::<T>(self.layer);
                if !self.visible {
                    manager.queue_enabled(false, section);
                }
                render_map.insert(manager);
                manager
            }
        };
        manager.queue_objects(objects, self.updates, section);
    }
}
