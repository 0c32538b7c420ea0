//! Drawable primitive kinds and the trait tying each one to its render slot.

mod kind;
mod types;

pub use kind::*;
pub use types::*;
