//! Engine identities in launch order.

use std::fmt;

/// The subsystem engines started by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Source,
    Oracle,
    Stoc,
    Tle,
}

impl EngineKind {
    /// Construction order. Each engine must be live before the next is built.
    /// Sources are built as part of the oracle's launch step.
    pub const LAUNCH_ORDER: [EngineKind; 4] = [Self::Source, Self::Oracle, Self::Stoc, Self::Tle];

    /// Short component label used in console diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Oracle => "Oracle",
            Self::Stoc => "STOC",
            Self::Tle => "TLE",
        }
    }

    /// Human-readable engine name used in progress banners.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Source => "Source enumerator",
            Self::Oracle => "Oracle",
            Self::Stoc => "STOC",
            Self::Tle => "Trade-Logic Engine (TLE)",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
