//! Route artifact watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;
use notify::{Watcher, RecursiveMode, Event, RecommendedWatcher, Config};
use tokio::sync::mpsc;
use crate::routes::RouteIndex;
use crate::store::artifact::load_index;

/// A watcher that monitors the route artifact for changes.
///
/// Each successful reload is sent as a freshly built [`RouteIndex`]; the
/// receiver decides when to publish it (usually `RouteTable::replace`).
pub struct ArtifactWatcher {
    path: PathBuf,
    strict_names: bool,
    update_tx: mpsc::UnboundedSender<RouteIndex>,
}

impl ArtifactWatcher {
    /// Create a new ArtifactWatcher.
    ///
    /// Returns the watcher and a receiver for index updates.
    pub fn new(path: &Path, strict_names: bool) -> (Self, mpsc::UnboundedReceiver<RouteIndex>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (Self {
            path: path.to_path_buf(),
            strict_names,
            update_tx,
        }, update_rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();
        let strict_names = self.strict_names;

        let mut watcher = RecommendedWatcher::new(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = %path.display(), "Route artifact change detected, reloading...");
                        reload_into(&path, strict_names, &tx);
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            }
        }, Config::default().with_poll_interval(Duration::from_secs(2)))?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Route artifact watcher started");
        Ok(watcher)
    }
}

/// Load the artifact and forward the index. Returns whether an update was sent.
fn reload_into(path: &Path, strict_names: bool, tx: &mpsc::UnboundedSender<RouteIndex>) -> bool {
    match load_index(path, strict_names) {
        Ok(index) => tx.send(index).is_ok(),
        Err(e) => {
            tracing::error!("Failed to reload routes: {}. Keeping current index.", e);
            false
        }
    }
}
