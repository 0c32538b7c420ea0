//! Live reload: re-read the config whenever the watcher fires and publish
//! every validated result to subscribers.

mod manager;


pub use manager::ReloadManager;
