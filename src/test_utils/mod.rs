//! Test utilities for grammargen.
//!
//! Available to unit tests and, through the `test-utils` feature, to the integration
//! tests:
//!
//! - [`init_test_logging`] - one-time tracing setup writing to the test output
//! - [`LayoutFixture`] - a throwaway repository with grammar templates
//! - [`RecordingExpander`] - an [`Expander`](crate::expander::Expander) that records calls
//!
//! # Example
//!
//! ```rust,no_run
//! use grammargen::expander::SkipExpander;
//! use grammargen::generator::generate;
//! use grammargen::test_utils::LayoutFixture;
//!
//! let fixture = LayoutFixture::new().with_template("grammar30", "$COLON");
//! let report = generate(&fixture.layout(), &SkipExpander).unwrap();
//! assert_eq!(report.outputs.len(), 1);
//! ```

pub mod expander;
pub mod fixtures;

pub use expander::RecordingExpander;
pub use fixtures::LayoutFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize tracing for tests.
///
/// Uses `level` when given, else `RUST_LOG` when set; otherwise logging stays off.
/// Only the first call has an effect.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
