//! Producer-side handles to render-thread managers.

mod handle;
mod render_map;

pub use handle::*;
pub use render_map::*;
