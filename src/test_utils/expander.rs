//! Expander double for pipeline tests.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::core::GrammarError;
use crate::expander::Expander;

/// Records every call instead of running a tool.
#[derive(Debug, Default)]
pub struct RecordingExpander {
    calls: RefCell<Vec<Vec<PathBuf>>>,
    fail: bool,
}

impl RecordingExpander {
    /// An expander that records the call and then reports [`GrammarError::ExpansionFailed`].
    pub fn failing() -> Self {
        Self {
            calls: RefCell::default(),
            fail: true,
        }
    }

    /// Path lists received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<PathBuf>> {
        self.calls.borrow().clone()
    }
}

impl Expander for RecordingExpander {
    fn expand(&self, paths: &[PathBuf]) -> Result<(), GrammarError> {
        self.calls.borrow_mut().push(paths.to_vec());
        if self.fail {
            return Err(GrammarError::ExpansionFailed {
                targets: paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
                status: "exit status 1".to_string(),
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}
