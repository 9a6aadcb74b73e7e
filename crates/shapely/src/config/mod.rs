//! Parse configuration.
//!
//! The truncation threshold is threaded into the parser through
//! [`ParseOptions`]. When a caller leaves it unset, the parser falls back to
//! a process-wide default that starts at [`DEFAULT_THRESHOLD`].
//!
//! The process-wide default is meant to be configured once at startup, or
//! overridden for the duration of a test with [`override_default_threshold`].
//! It is not a coordination point: concurrent writers race with parses that
//! rely on the default.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Threshold used when nothing else is configured.
pub const DEFAULT_THRESHOLD: usize = 6;

/// Largest tensor rank shown verbatim under [`HighRankDims::Collapse`].
pub const DISPLAY_RANK: usize = 3;

static PROCESS_DEFAULT: AtomicUsize = AtomicUsize::new(DEFAULT_THRESHOLD);

/// Current process-wide default threshold.
#[inline]
pub fn default_threshold() -> usize {
    PROCESS_DEFAULT.load(Ordering::Relaxed)
}

/// Replace the process-wide default threshold.
///
/// Zero restores [`DEFAULT_THRESHOLD`].
pub fn set_default_threshold(threshold: usize) {
    let threshold = if threshold == 0 {
        DEFAULT_THRESHOLD
    } else {
        threshold
    };
    tracing::debug!(threshold, "process-wide default threshold changed");
    PROCESS_DEFAULT.store(threshold, Ordering::Relaxed);
}

/// Override the process-wide default until the returned guard is dropped.
///
/// # Example
///
/// ```text
/// let _guard = override_default_threshold(4);
/// assert_eq!(parse(&value, None).threshold(), 4);
/// // previous default restored here
/// ```
#[must_use = "the override ends when the guard is dropped"]
pub fn override_default_threshold(threshold: usize) -> ThresholdOverride {
    let previous = default_threshold();
    set_default_threshold(threshold);
    ThresholdOverride { previous }
}

/// Restores the previous process-wide default threshold on drop.
#[derive(Debug)]
pub struct ThresholdOverride {
    previous: usize,
}

impl Drop for ThresholdOverride {
    fn drop(&mut self) {
        set_default_threshold(self.previous);
    }
}

/// How tensors with more than [`DISPLAY_RANK`] dimensions are summarized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HighRankDims {
    /// Keep every dimension.
    #[default]
    Verbatim,
    /// Fold all but the last two dimensions into a single `-1` wildcard.
    Collapse,
}

/// Options for one parse.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Children kept per list or mapping. `None` (or zero) defers to the
    /// process-wide default at parse time.
    pub threshold: Option<usize>,
    pub high_rank: HighRankDims,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_high_rank(mut self, high_rank: HighRankDims) -> Self {
        self.high_rank = high_rank;
        self
    }

    /// Threshold this parse will use, reading the process-wide default if
    /// none was set.
    pub fn resolved_threshold(&self) -> usize {
        match self.threshold {
            Some(threshold) if threshold > 0 => threshold,
            _ => default_threshold(),
        }
    }
}

#[cfg(test)]
mod tests;
