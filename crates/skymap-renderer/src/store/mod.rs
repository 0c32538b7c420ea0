//! Render-thread state: every manager's live objects.

mod apply;
mod state;

#[cfg(test)]
mod tests;

pub use apply::*;
pub use state::*;
