//! Snapshot scheduler — periodic background persistence.
//!
//! Every `interval` the whole store is copied and handed to a
//! [`SnapshotSink`]. The first snapshot happens one interval after start.
//! A failed write is logged and dropped: the next tick runs as usual, with
//! no retry and no backoff. Between ticks the persisted file lags the live
//! store.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::ports::{CollectionStore, SnapshotSink};

/// Default time between two snapshots.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Result of a single snapshot attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// The document was written at this revision.
    Written {
        /// Mutation revision of the written copy.
        revision: u64,
    },
    /// Nothing changed since the last successful write; skipped.
    Unchanged {
        /// Revision that was already persisted.
        revision: u64,
    },
    /// The sink reported an error; it has been logged.
    Failed {
        /// Revision that could not be persisted.
        revision: u64,
    },
}

/// Periodically copies a [`CollectionStore`] into a [`SnapshotSink`].
pub struct SnapshotScheduler<S, W> {
    store: S,
    sink: W,
    interval: Duration,
    skip_unchanged: bool,
    last_written: Option<u64>,
}

impl<S, W> SnapshotScheduler<S, W>
where
    S: CollectionStore,
    W: SnapshotSink,
{
    /// Create a scheduler writing every `interval`.
    pub fn new(store: S, sink: W, interval: Duration) -> Self {
        Self {
            store,
            sink,
            interval,
            skip_unchanged: false,
            last_written: None,
        }
    }

    /// Skip ticks where the store revision has not moved since the last
    /// successful write. Off by default: every tick overwrites the file.
    #[must_use]
    pub fn skip_unchanged(mut self, skip: bool) -> Self {
        self.skip_unchanged = skip;
        self
    }

    /// Time between two snapshots.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Take and persist one snapshot now.
    #[tracing::instrument(skip(self))]
    pub async fn run_once(&mut self) -> SnapshotOutcome {
        let snapshot = self.store.snapshot().await;
        let revision = snapshot.revision;

        if self.skip_unchanged && self.last_written == Some(revision) {
            tracing::debug!(revision, "store unchanged, snapshot skipped");
            return SnapshotOutcome::Unchanged { revision };
        }

        match self.sink.write(&snapshot.document).await {
            Ok(()) => {
                self.last_written = Some(revision);
                tracing::info!(
                    revision,
                    collections = snapshot.document.len(),
                    records = snapshot.document.record_count(),
                    "snapshot written"
                );
                SnapshotOutcome::Written { revision }
            }
            Err(err) => {
                tracing::error!(error = ?err, revision, "snapshot failed");
                SnapshotOutcome::Failed { revision }
            }
        }
    }

    /// Run forever, one snapshot per interval.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }

    /// Spawn [`run`](Self::run) on the tokio runtime.
    pub fn spawn(self) -> JoinHandle<()>
    where
        S: Send + Sync + 'static,
        W: Send + Sync + 'static,
    {
        tracing::info!(interval_secs = self.interval.as_secs(), "snapshot scheduler started");
        tokio::spawn(self.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    use mockapi_domain::document::Document;
    use mockapi_domain::error::MockApiError;
    use mockapi_domain::id::RecordId;
    use mockapi_domain::record::Record;

    use crate::store::InMemoryStore;

    /// Sink that remembers every document it was asked to write.
    #[derive(Default)]
    struct RecordingSink {
        written: Mutex<Vec<Document>>,
        fail: bool,
    }

    impl RecordingSink {
        fn failing() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn count(&self) -> usize {
            self.written.lock().unwrap().len()
        }
    }

    impl SnapshotSink for RecordingSink {
        fn write(
            &self,
            document: &Document,
        ) -> impl Future<Output = Result<(), MockApiError>> + Send {
            let result = if self.fail {
                Err(MockApiError::Storage("disk full".into()))
            } else {
                self.written.lock().unwrap().push(document.clone());
                Ok(())
            };
            async { result }
        }
    }

    fn store() -> Arc<InMemoryStore> {
        let mut document = Document::new();
        document.insert_collection("courses", Vec::new());
        Arc::new(InMemoryStore::new(document))
    }

    #[tokio::test]
    async fn should_write_current_document() {
        let store = store();
        let sink = Arc::new(RecordingSink::default());
        let mut scheduler =
            SnapshotScheduler::new(Arc::clone(&store), Arc::clone(&sink), DEFAULT_INTERVAL);

        store.insert("courses", Record::new()).await.unwrap();
        let outcome = scheduler.run_once().await;

        assert_eq!(outcome, SnapshotOutcome::Written { revision: 1 });
        let written = sink.written.lock().unwrap();
        assert_eq!(written[0].collection("courses").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_overwrite_every_tick_by_default() {
        let sink = Arc::new(RecordingSink::default());
        let mut scheduler = SnapshotScheduler::new(store(), Arc::clone(&sink), DEFAULT_INTERVAL);

        scheduler.run_once().await;
        scheduler.run_once().await;

        assert_eq!(sink.count(), 2);
    }

    #[tokio::test]
    async fn should_skip_unchanged_store_when_enabled() {
        let store = store();
        let sink = Arc::new(RecordingSink::default());
        let mut scheduler =
            SnapshotScheduler::new(Arc::clone(&store), Arc::clone(&sink), DEFAULT_INTERVAL)
                .skip_unchanged(true);

        assert_eq!(
            scheduler.run_once().await,
            SnapshotOutcome::Written { revision: 0 }
        );
        assert_eq!(
            scheduler.run_once().await,
            SnapshotOutcome::Unchanged { revision: 0 }
        );

        store.insert("courses", Record::new()).await.unwrap();
        store
            .remove("courses", &RecordId::from("1"))
            .await
            .unwrap();
        assert_eq!(
            scheduler.run_once().await,
            SnapshotOutcome::Written { revision: 2 }
        );
        assert_eq!(sink.count(), 2);
    }

    #[tokio::test]
    async fn should_swallow_failures_and_keep_going() {
        let sink = Arc::new(RecordingSink::failing());
        let mut scheduler =
            SnapshotScheduler::new(store(), Arc::clone(&sink), DEFAULT_INTERVAL).skip_unchanged(true);

        assert_eq!(
            scheduler.run_once().await,
            SnapshotOutcome::Failed { revision: 0 }
        );
        // A failed write is not remembered, so the next tick tries again.
        assert_eq!(
            scheduler.run_once().await,
            SnapshotOutcome::Failed { revision: 0 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_write_once_per_interval() {
        let sink = Arc::new(RecordingSink::default());
        let handle = SnapshotScheduler::new(store(), Arc::clone(&sink), Duration::from_secs(60))
            .spawn();

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(sink.count(), 0);

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(sink.count(), 1);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(sink.count(), 3);

        handle.abort();
    }
}
