//! STOC engine.

/// Whether the STOC engine places real orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StocMode {
    Paper,
    Live,
}

#[derive(Debug, Clone)]
pub struct Stoc {
    mode: StocMode,
}

impl Stoc {
    #[must_use]
    pub fn new(live: bool) -> Self {
        let mode = if live { StocMode::Live } else { StocMode::Paper };
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> StocMode {
        self.mode
    }
}
