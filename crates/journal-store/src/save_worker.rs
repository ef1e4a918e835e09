//! Debounced background saver.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{JournalSnapshot, JournalStore};

const SAVE_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Sender side of the save worker.
///
/// Mutating code pushes snapshots here and moves on; the worker coalesces
/// bursts and writes the latest state. Dropping the handle (or calling
/// [`SaveHandle::shutdown`]) flushes whatever is pending.
pub struct SaveHandle {
    tx: mpsc::UnboundedSender<JournalSnapshot>,
    worker: JoinHandle<()>,
}

impl SaveHandle {
    /// Queue a snapshot for persistence. Never blocks; if the worker is
    /// gone the snapshot is dropped with a warning.
    pub fn enqueue(&self, snapshot: JournalSnapshot) {
        if self.tx.send(snapshot).is_err() {
            warn!("save worker is gone, snapshot dropped");
        }
    }

    /// Close the channel and wait for the final write to land.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(e) = self.worker.await {
            warn!(error = %e, "save worker did not shut down cleanly");
        }
    }
}

/// Spawn the background save worker.
///
/// Snapshots arriving within `debounce` of each other collapse into a
/// single write of the newest state. Failed writes are retried a few times
/// and then dropped with a warning; in-memory state is unaffected either way.
pub fn spawn_save_worker(store: Arc<dyn JournalStore>, debounce: Duration) -> SaveHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<JournalSnapshot>();

    let worker = tokio::spawn(async move {
        while let Some(mut snapshot) = rx.recv().await {
            // Absorb newer snapshots until the window goes quiet or the
            // channel closes.
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(debounce) => break,
                    next = rx.recv() => match next {
                        Some(newer) => snapshot = newer,
                        None => break,
                    },
                }
            }

            save_with_retry(store.as_ref(), &snapshot).await;
        }
        debug!("save worker finished");
    });

    SaveHandle { tx, worker }
}

async fn save_with_retry(store: &dyn JournalStore, snapshot: &JournalSnapshot) {
    for attempt in 1..=SAVE_ATTEMPTS {
        match store.save(snapshot).await {
            Ok(()) => return,
            Err(e) if attempt < SAVE_ATTEMPTS => {
                warn!(error = %e, attempt, "journal save failed, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                warn!(error = %e, "journal save failed, giving up on this snapshot");
            }
        }
    }
}
