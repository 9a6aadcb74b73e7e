use super::*;
use pretty_assertions::assert_eq;

// The process-wide default is exercised in `tests/default_threshold.rs`,
// which runs in its own binary. Tests here only use explicit thresholds.

#[test]
fn test_explicit_threshold_wins() {
    let options = ParseOptions::new().with_threshold(4);
    assert_eq!(options.threshold, Some(4));
    assert_eq!(options.resolved_threshold(), 4);
}

#[test]
fn test_default_options() {
    let options = ParseOptions::default();
    assert_eq!(options.threshold, None);
    assert_eq!(options.high_rank, HighRankDims::Verbatim);
}

#[test]
fn test_with_high_rank() {
    let options = ParseOptions::new()
        .with_threshold(2)
        .with_high_rank(HighRankDims::Collapse);
    assert_eq!(options.high_rank, HighRankDims::Collapse);
    assert_eq!(options.resolved_threshold(), 2);
}
