//! Render-side state for the sky map and the handoff that feeds it.
//!
//! Producers never touch drawable state directly. They build an
//! [`AtomicSection`] of queued operations against [`RenderManager`] handles
//! and hand it to the [`RendererController`]. The render thread owns the
//! [`RenderStore`]; each frame, [`RenderLoop::frame`] drains whatever sections
//! have arrived, applies each one whole and in order, then draws. A draw call
//! therefore sees either all of a section or none of it.

pub mod draw;
pub mod error;
pub mod manager;
pub mod perf;
pub mod primitives;
pub mod render_loop;
pub mod section;
pub mod store;
pub mod update;
pub mod vertex;

pub use draw::DrawBackend;
pub use error::RendererError;
pub use manager::{ManagerId, RenderManager, RenderMap};
pub use perf::FrameTimer;
pub use primitives::{
    ImageHandle, ImagePrimitive, LinePrimitive, PointPrimitive, PointShape, Primitive,
    PrimitiveLists, TextPrimitive,
};
pub use render_loop::{FrameReport, RenderLoop};
pub use section::{channel, AtomicSection, RenderOp, RendererController, SectionId, SectionQueue};
pub use store::{ManagerState, RenderStore};
pub use update::UpdateTypes;
