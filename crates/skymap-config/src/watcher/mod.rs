//! Change notifications for the config file.
//!
//! Bursts of filesystem events collapse into one signal after a quiet period
//! ([`DEFAULT_DEBOUNCE`] unless overridden).

mod config_watcher;

#[cfg(test)]
mod tests;

pub use config_watcher::{ConfigWatcher, DEFAULT_DEBOUNCE};
