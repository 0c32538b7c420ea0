use crate::schema::SkymapConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use skymap_common::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Publishes a fresh [`SkymapConfig`] each time the file on disk changes
/// to something valid and different.
pub struct ReloadManager {
    config_path: PathBuf,
    published: watch::Sender<SkymapConfig>,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// Returns the initial config and a receiver that sees every reloaded
    /// config that passes validation. Must be called inside a tokio runtime;
    /// the watcher runs as a background task there. A missing or unreadable
    /// file starts from defaults.
    pub async fn start(config_path: PathBuf) -> (SkymapConfig, watch::Receiver<SkymapConfig>) {
        let initial = toml_loader::load_from_path(&config_path).unwrap_or_else(|e| {
            warn!(error = %e, "starting from default config");
            SkymapConfig::default()
        });

        let (published, receiver) = watch::channel(initial.clone());
        let manager = ReloadManager {
            config_path,
            published,
        };
        tokio::spawn(manager.run());

        (initial, receiver)
    }

    async fn run(self) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(watcher) => watcher,
            Err(e) => {
                error!(error = %e, "config reload disabled");
                return;
            }
        };

        let (change_tx, mut changes) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!(error = %e, "config watcher stopped");
            }
        });

        loop {
            match changes.recv().await {
                Ok(()) => self.reload(),
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "coalescing missed change events");
                    self.reload();
                }
                Err(RecvError::Closed) => break,
            }
            if self.published.is_closed() {
                break;
            }
        }
        info!(path = %self.config_path.display(), "config reload stopped");
    }

    fn reload(&self) {
        let fresh = match reload_config(&self.config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "keeping previous config");
                return;
            }
        };
        let changed = self.published.send_if_modified(|current| {
            if *current == fresh {
                return false;
            }
            *current = fresh;
            true
        });
        if changed {
            info!(path = %self.config_path.display(), "config reloaded");
        } else {
            debug!("config saved without changes");
        }
    }
}

/// Reload config from disk. Unlike the initial load, an invalid file is
/// rejected so a bad edit never replaces a working config.
pub(crate) fn reload_config(path: &Path) -> Result<SkymapConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
