use std::path::Path;
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use anyhow::{Context, Result};
use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watches the manifest file so edits show up without restarting.
pub struct ManifestWatcher {
    // Held for its Drop; dropping stops the watch thread.
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<DebounceEventResult>,
}

impl ManifestWatcher {
    pub fn watch(path: &Path) -> Result<Self> {
        let (tx, rx) = channel();
        let mut debouncer = new_debouncer(DEBOUNCE, move |result| {
            let _ = tx.send(result);
        })
        .context("Could not start the manifest watcher")?;
        debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("Could not watch {}", path.display()))?;
        Ok(Self {
            _debouncer: debouncer,
            rx,
        })
    }

    /// Drain pending events. True if the file changed since the last call.
    pub fn file_changed(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            if result.is_ok() {
                changed = true;
            }
        }
        changed
    }
}
