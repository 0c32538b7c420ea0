//! Atomic sections and the channel that carries them to the render thread.
//!
//! A section is an ordered list of [`RenderOp`]s. The render thread applies a
//! section in one step between two frames, so no draw sees half of one.
//! Sections from one controller arrive in the order they were queued.

mod atomic;
mod controller;

#[cfg(test)]
mod tests;

pub use atomic::*;
pub use controller::*;
