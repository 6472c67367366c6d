//! Metadata synchronization phase.
//!
//! Runs once, after every engine is live. A missing record is recovered by
//! persisting defaults; a malformed record is reported and left untouched.
//! Push failures are never fatal.

use tracing::{info, warn};

use crate::application::context::BotContext;
use crate::domain::database::DatabaseConfig;
use crate::domain::metadata::SyncState;
use crate::error::MetadataError;
use crate::port::outbound::engine::{EngineFactory, MetadataSyncable};
use crate::port::outbound::notifier::{StartupEvent, StartupNotifier};

/// Drives pull, recovery, report and final push for the trade-logic engine.
pub struct MetadataSyncController<'a> {
    notifier: &'a dyn StartupNotifier,
}

impl<'a> MetadataSyncController<'a> {
    pub fn new(notifier: &'a dyn StartupNotifier) -> Self {
        Self { notifier }
    }

    /// Sync the context's trade-logic engine and record the resulting state.
    pub fn run<F: EngineFactory>(&self, context: &mut BotContext<F>) -> SyncState {
        let (db, tle) = context.sync_parts();
        let state = self.sync(db, tle);
        context.set_sync_state(state);
        state
    }

    /// Sync a single engine against the given database.
    pub fn sync<T: MetadataSyncable + ?Sized>(&self, db: &DatabaseConfig, tle: &mut T) -> SyncState {
        let mut state = self.pull(db, tle);

        self.notifier.notify(StartupEvent::MetadataReport {
            rendered: tle.to_string(),
        });

        match tle.push_metadata(db) {
            Ok(()) => {
                state = state.persisted();
                info!(owner = %db.owner(), state = state.label(), "Metadata persisted");
            }
            Err(err) => self.push_failed(&err),
        }
        state
    }

    fn pull<T: MetadataSyncable + ?Sized>(&self, db: &DatabaseConfig, tle: &mut T) -> SyncState {
        let state = SyncState::default();
        match tle.pull_metadata(db) {
            Ok(()) => {
                info!(owner = %db.owner(), "Metadata pulled");
                self.notifier.notify(StartupEvent::MetadataPulled);
                state.pulled()
            }
            Err(MetadataError::NotFound { owner }) => {
                info!(owner = %owner, "No stored metadata, applying defaults");
                self.notifier.notify(StartupEvent::MetadataMissing);
                tle.apply_default_metadata();
                if let Err(err) = tle.push_metadata(db) {
                    self.push_failed(&err);
                }
                state.defaulted()
            }
            Err(err) => {
                warn!(owner = %db.owner(), error = %err, "Stored metadata rejected");
                self.notifier.notify(StartupEvent::MetadataRejected {
                    reason: err.to_string(),
                });
                state
            }
        }
    }

    fn push_failed(&self, err: &MetadataError) {
        warn!(error = %err, "Metadata push failed");
        self.notifier.notify(StartupEvent::MetadataPushFailed {
            reason: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapter::outbound::engine::Tle;
    use crate::domain::metadata::MetadataRecord;
    use crate::testkit::engine::ScriptedTle;
    use crate::testkit::metadata::MemoryMetadataStore;
    use crate::testkit::notifier::RecordingNotifier;

    fn db() -> DatabaseConfig {
        DatabaseConfig::new("db.local", "bot", "secret")
    }

    fn held_record() -> MetadataRecord {
        let mut record = MetadataRecord::new(1);
        record.set("cash_balance", "1500.25");
        record.set("trade_count", "42");
        record
    }

    #[test]
    fn existing_record_is_pulled_and_persisted() {
        let store = Arc::new(MemoryMetadataStore::new().seeded(&db(), held_record()));
        let mut tle = Tle::new(1, store.clone()).unwrap();
        let notifier = RecordingNotifier::new();

        let state = MetadataSyncController::new(&notifier).sync(&db(), &mut tle);

        assert_eq!(state, SyncState::Persisted);
        assert_eq!(tle.metadata(), Some(&held_record()));
        assert_eq!(store.stored(&db()), Some(held_record()));
        assert!(notifier.contains(&StartupEvent::MetadataPulled));
    }

    #[test]
    fn pull_then_repeated_push_keeps_record() {
        let store = Arc::new(MemoryMetadataStore::new().seeded(&db(), held_record()));
        let mut tle = Tle::new(1, store.clone()).unwrap();

        tle.pull_metadata(&db()).unwrap();
        tle.push_metadata(&db()).unwrap();
        tle.push_metadata(&db()).unwrap();

        assert_eq!(store.stored(&db()), Some(held_record()));
    }

    #[test]
    fn missing_record_is_recovered_with_defaults() {
        let store = Arc::new(MemoryMetadataStore::new());
        let mut tle = Tle::new(1, store.clone()).unwrap();
        let notifier = RecordingNotifier::new();

        let state = MetadataSyncController::new(&notifier).sync(&db(), &mut tle);

        assert_eq!(state, SyncState::Persisted);
        assert_eq!(store.stored(&db()), Some(MetadataRecord::defaults()));
        assert_eq!(store.save_count(), 2);
        assert!(notifier.contains(&StartupEvent::MetadataMissing));
    }

    #[test]
    fn malformed_record_is_reported_and_not_overwritten() {
        let store = Arc::new(MemoryMetadataStore::new().with_malformed(&db()));
        let mut tle = Tle::new(1, store.clone()).unwrap();
        let notifier = RecordingNotifier::new();

        let state = MetadataSyncController::new(&notifier).sync(&db(), &mut tle);

        assert_eq!(state, SyncState::Unsynced);
        assert!(tle.metadata().is_none());
        assert_eq!(store.save_count(), 0);
        assert!(notifier
            .events()
            .iter()
            .any(|e| matches!(e, StartupEvent::MetadataRejected { .. })));
        assert!(notifier.contains(&StartupEvent::MetadataPushFailed {
            reason: MetadataError::Unloaded.to_string()
        }));
    }

    #[test]
    fn push_failures_are_reported_not_fatal() {
        let mut tle = ScriptedTle::not_found().failing_push();
        let notifier = RecordingNotifier::new();

        let state = MetadataSyncController::new(&notifier).sync(&db(), &mut tle);

        assert_eq!(state, SyncState::Defaulted);
        assert_eq!(tle.metadata(), Some(&MetadataRecord::defaults()));
        let failures = notifier
            .events()
            .into_iter()
            .filter(|e| matches!(e, StartupEvent::MetadataPushFailed { .. }))
            .count();
        assert_eq!(failures, 2);
        assert!(tle.pushed().is_empty());
    }

    #[test]
    fn found_record_is_pushed_once() {
        let mut tle = ScriptedTle::found(held_record());
        let notifier = RecordingNotifier::new();

        let state = MetadataSyncController::new(&notifier).sync(&db(), &mut tle);

        assert_eq!(state, SyncState::Persisted);
        assert_eq!(tle.pushed(), [held_record()]);
    }

    #[test]
    fn defaults_are_pushed_on_recovery_and_again_at_the_end() {
        let mut tle = ScriptedTle::not_found();
        let notifier = RecordingNotifier::new();

        let state = MetadataSyncController::new(&notifier).sync(&db(), &mut tle);

        assert_eq!(state, SyncState::Persisted);
        assert_eq!(
            tle.pushed(),
            [MetadataRecord::defaults(), MetadataRecord::defaults()]
        );
    }

    #[test]
    fn malformed_record_is_never_pushed() {
        let mut tle = ScriptedTle::malformed();
        let notifier = RecordingNotifier::new();

        MetadataSyncController::new(&notifier).sync(&db(), &mut tle);

        assert!(tle.pushed().is_empty());
    }

    #[test]
    fn report_is_emitted_on_every_path() {
        for mut tle in [
            ScriptedTle::found(held_record()),
            ScriptedTle::not_found(),
            ScriptedTle::malformed(),
        ] {
            let notifier = RecordingNotifier::new();
            MetadataSyncController::new(&notifier).sync(&db(), &mut tle);
            assert!(notifier
                .events()
                .iter()
                .any(|e| matches!(e, StartupEvent::MetadataReport { .. })));
        }
    }
}
