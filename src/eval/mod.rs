//! Model evaluation: metrics, offline driver, and reporting
//!
//! - [`metrics`]: per-example records, exact match, aggregate accuracies
//! - [`evaluator`]: the driver and its capability seams
//! - [`extract`]: completion post-processing
//!
//! # Example
//!
//! ```
//! use tallar::data::DesignSample;
//! use tallar::eval::{Evaluator, PregeneratedCompletions};
//!
//! let samples = vec![DesignSample {
//!     text: "a unit sphere".into(),
//!     ir: "S 1.0".into(),
//!     family: None,
//!     complexity: None,
//! }];
//! let generations = PregeneratedCompletions::new(vec!["S 1.0".into()]);
//!
//! let (records, metrics) = Evaluator::new(&generations).evaluate(&samples)?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(metrics.exact_match, 1);
//! # Ok::<(), tallar::Error>(())
//! ```

pub mod evaluator;
pub mod extract;
pub mod metrics;

pub use evaluator::{
    render_report, CompletionSource, Evaluator, GeometryChecker, PregeneratedCompletions,
};
pub use extract::{extract_ir, IR_MARKER};
pub use metrics::{aggregate, error_bucket, exact_match, AggregateMetrics, EvalRecord};
