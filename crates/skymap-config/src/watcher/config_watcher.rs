//! Debounced notify watcher for a single file.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use skymap_common::ConfigError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Default quiet period before a burst of file events becomes one signal.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Signals when one file is written or recreated.
pub struct ConfigWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl ConfigWatcher {
    /// The file need not exist yet; its creation counts as a change.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(path = %path.display(), "config file missing, waiting for it to appear");
        }

        Ok(Self {
            path,
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Watch the config file, sending `()` on `tx` after each debounced change.
    ///
    /// Runs until the underlying watcher stops. Editors that save by writing a
    /// temp file and renaming produce several events; they collapse into one
    /// signal once `debounce` passes without another.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!(path = %self.path.display(), "watching config");

        // Bridges the sync notify callback into async.
        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if is_config_event(&event, &file_name) {
                        debug!(kind = ?event.kind, "config event");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!(error = %e, "notify error"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        // `watcher` must outlive the loop below; dropping it closes `notify_rx`.
        while notify_rx.recv().await.is_some() {
            let debounce = tokio::time::sleep(self.debounce);
            tokio::pin!(debounce);
            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                        debounce.as_mut().reset(tokio::time::Instant::now() + self.debounce);
                    }
                }
            }

            if tx.send(()).is_err() {
                debug!("config changed with nobody listening");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// Whether `event` is a write to or creation of the file called `file_name`.
pub(crate) fn is_config_event(event: &Event, file_name: &OsStr) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false))
}
