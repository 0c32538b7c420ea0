//! Readers for the geometry and catalog files layers are built from.
//!
//! Every reader has a fallible `read_*`/`try_load_*` form returning
//! [`DataError`](skymap_common::DataError) and a `load_*` form that logs the
//! failure and returns empty data. Missing decorative data never stops a layer.

mod catalog;
mod coastline;


pub use catalog::*;
pub use coastline::*;
