//! Shapely - compact structural summaries of nested values.
//!
//! This crate provides:
//! - The recursive shape parser (`parse`, `parse_with`, `ShapeParser`)
//! - Shape nodes (`ShapeNode`) and their text rendering
//! - The `Shape` handle with tensor element counts
//! - Threshold configuration (`ParseOptions`, process-wide default)
//!
//! # Example
//!
//! ```text
//! let batch = Value::map([
//!     (Value::string("ids"), Value::list((0..100).map(Value::int).collect())),
//!     (Value::string("pixels"), Value::tensor(DenseTensor::zeros(&[8, 3, 32]))),
//! ]);
//! let shape = shapely::parse(&batch, Some(4));
//! assert_eq!(shape.render(), "D(2) {'ids': L(100) [0, 1, 2, 3], 'pixels': [8, 3, 32]}");
//! assert_eq!(shape.total_element_count(), 768);
//! ```
//!
//! # Logging
//!
//! Parses emit `tracing` spans and events under the `shapely` target. Call
//! [`init_tracing`] to print them when `RUST_LOG` is set.

mod config;
mod error;
mod node;
mod parser;
mod render;
mod shape;
mod stack;

use std::sync::Once;

pub use config::{
    default_threshold, override_default_threshold, set_default_threshold, HighRankDims,
    ParseOptions, ThresholdOverride, DEFAULT_THRESHOLD, DISPLAY_RANK,
};
pub use error::ShapeError;
pub use node::{SeqKind, ShapeNode, TensorId};
pub use parser::ShapeParser;
pub use render::render;
pub use shape::{element_count, Shape, TensorEntry};

// Re-export the value model so callers need only one import
pub use shapely_value::{DenseTensor, Dims, MapValue, ObjectValue, TensorLike, Value};

/// Parse `value` with `threshold`, or with the process-wide default when
/// `threshold` is `None`.
pub fn parse(value: &Value, threshold: Option<usize>) -> Shape {
    let options = ParseOptions {
        threshold,
        ..ParseOptions::default()
    };
    parse_with(value, &options)
}

/// Parse `value` with explicit options.
pub fn parse_with(value: &Value, options: &ParseOptions) -> Shape {
    ShapeParser::new(options).parse(value)
}

/// Parse several values as one tuple.
///
/// Handy for summarizing the arguments of a call: `(x, y)` in, one shape out.
pub fn parse_args(values: &[Value], threshold: Option<usize>) -> Shape {
    parse(&Value::tuple(values.to_vec()), threshold)
}

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber for this crate's diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call installs.
/// Events come from two targets:
///
/// - `shapely::parser`: a `parse` span per parse (carrying `threshold`), a
///   debug event with the distinct tensor count when it finishes, and trace
///   events for each elided container and each newly seen tensor
/// - `shapely::config`: a debug event whenever the process-wide default
///   threshold changes
///
/// `RUST_LOG=shapely=trace` shows everything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
