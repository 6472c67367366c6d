//! Trade-logic engine metadata and its synchronization state.

use std::collections::BTreeMap;

use crate::error::MetadataError;

/// Current metadata schema version.
pub const METADATA_VERSION: u32 = 1;

/// Versioned key/value state owned by the trade-logic engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    version: u32,
    entries: BTreeMap<String, String>,
}

impl MetadataRecord {
    /// Create an empty record at the given version.
    #[must_use]
    pub fn new(version: u32) -> Self {
        Self {
            version,
            entries: BTreeMap::new(),
        }
    }

    /// The in-memory defaults applied on first run.
    #[must_use]
    pub fn defaults() -> Self {
        let mut record = Self::new(METADATA_VERSION);
        record.set("cash_balance", "0.00");
        record.set("open_positions", "0");
        record.set("risk_level", "conservative");
        record.set("trade_count", "0");
        record
    }

    /// Rebuild a record from stored rows.
    ///
    /// # Errors
    /// Returns [`MetadataError::Malformed`] when rows disagree on version,
    /// when a key repeats, or when the version is unknown.
    pub fn from_rows<I>(rows: I) -> Result<Self, MetadataError>
    where
        I: IntoIterator<Item = (String, String, u32)>,
    {
        let mut record: Option<Self> = None;
        for (key, value, version) in rows {
            if key.trim().is_empty() {
                return Err(MetadataError::Malformed("empty metadata key".into()));
            }
            let current = record.get_or_insert_with(|| Self::new(version));
            if current.version != version {
                return Err(MetadataError::Malformed(format!(
                    "mixed versions {} and {version}",
                    current.version
                )));
            }
            if current.entries.insert(key.clone(), value).is_some() {
                return Err(MetadataError::Malformed(format!("duplicate key {key}")));
            }
        }

        let record = record.ok_or_else(|| MetadataError::Malformed("no rows".into()))?;
        if record.version == 0 || record.version > METADATA_VERSION {
            return Err(MetadataError::Malformed(format!(
                "unsupported version {}",
                record.version
            )));
        }
        Ok(record)
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Direction of a metadata sync call.
///
/// The numeric flags match the engine's mode convention: `1` reads from
/// storage into the engine, `0` writes from the engine into storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    Pull,
    Push,
}

impl SyncDirection {
    #[must_use]
    pub const fn flag(self) -> u8 {
        match self {
            Self::Pull => 1,
            Self::Push => 0,
        }
    }

    #[must_use]
    pub const fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            1 => Some(Self::Pull),
            0 => Some(Self::Push),
            _ => None,
        }
    }
}

/// Metadata sync lifecycle: `Unsynced -> Pulled | Defaulted -> Persisted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Unsynced,
    Pulled,
    Defaulted,
    Persisted,
}

impl SyncState {
    /// Stored metadata was loaded into the engine.
    #[must_use]
    pub fn pulled(self) -> Self {
        match self {
            Self::Unsynced => Self::Pulled,
            other => other,
        }
    }

    /// Defaults were applied after a not-found pull.
    #[must_use]
    pub fn defaulted(self) -> Self {
        match self {
            Self::Unsynced => Self::Defaulted,
            other => other,
        }
    }

    /// Engine state was durably written after being pulled or defaulted.
    #[must_use]
    pub fn persisted(self) -> Self {
        match self {
            Self::Pulled | Self::Defaulted => Self::Persisted,
            other => other,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unsynced => "unsynced",
            Self::Pulled => "pulled",
            Self::Defaulted => "defaulted",
            Self::Persisted => "persisted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: &str, version: u32) -> (String, String, u32) {
        (key.to_string(), value.to_string(), version)
    }

    #[test]
    fn defaults_are_versioned_and_populated() {
        let defaults = MetadataRecord::defaults();
        assert_eq!(defaults.version(), METADATA_VERSION);
        assert_eq!(defaults.get("risk_level"), Some("conservative"));
        assert_eq!(defaults.len(), 4);
    }

    #[test]
    fn from_rows_rebuilds_record() {
        let record = MetadataRecord::from_rows(vec![
            row("cash_balance", "10.50", 1),
            row("trade_count", "4", 1),
        ])
        .unwrap();
        assert_eq!(record.get("cash_balance"), Some("10.50"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn from_rows_rejects_mixed_versions() {
        let err = MetadataRecord::from_rows(vec![row("a", "1", 1), row("b", "2", 2)]).unwrap_err();
        assert!(matches!(err, MetadataError::Malformed(_)));
    }

    #[test]
    fn from_rows_rejects_unknown_version() {
        let err = MetadataRecord::from_rows(vec![row("a", "1", 99)]).unwrap_err();
        assert!(matches!(err, MetadataError::Malformed(_)));
    }

    #[test]
    fn from_rows_rejects_blank_key() {
        let err = MetadataRecord::from_rows(vec![row(" ", "1", 1)]).unwrap_err();
        assert!(matches!(err, MetadataError::Malformed(_)));
    }

    #[test]
    fn direction_flags_follow_engine_convention() {
        assert_eq!(SyncDirection::Pull.flag(), 1);
        assert_eq!(SyncDirection::Push.flag(), 0);
        assert_eq!(SyncDirection::from_flag(1), Some(SyncDirection::Pull));
        assert_eq!(SyncDirection::from_flag(7), None);
    }

    #[test]
    fn state_machine_transitions() {
        assert_eq!(SyncState::Unsynced.pulled(), SyncState::Pulled);
        assert_eq!(SyncState::Unsynced.defaulted(), SyncState::Defaulted);
        assert_eq!(SyncState::Pulled.persisted(), SyncState::Persisted);
        assert_eq!(SyncState::Defaulted.persisted(), SyncState::Persisted);
        // A malformed pull leaves nothing to persist.
        assert_eq!(SyncState::Unsynced.persisted(), SyncState::Unsynced);
    }
}
