//! Batch conversion of many input paths.

use std::path::Path;

use crate::file::{convert_file, Outcome};
use crate::Result;

/// Success and failure counts of a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Count one result. Skipped files count as failures.
    pub fn record(&mut self, result: &Result<Outcome>) {
        match result {
            Ok(Outcome::Converted { .. }) => self.succeeded += 1,
            Ok(Outcome::Skipped) | Err(_) => self.failed += 1,
        }
    }

    /// Number of paths attempted.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Convert every path in order.
///
/// `observer` sees each path and its result as soon as it is known. A failing
/// file is counted and the batch moves on to the next path.
pub fn convert_batch<I, P, F>(paths: I, mut observer: F) -> BatchSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&Path, &Result<Outcome>),
{
    let mut summary = BatchSummary::default();

    for path in paths {
        let path = path.as_ref();
        let result = convert_file(path);

        if let Err(e) = &result {
            tracing::warn!(path = %path.display(), kind = ?e.kind(), "conversion failed: {}", e);
        }

        summary.record(&result);
        observer(path, &result);
    }

    summary
}
