use std::path::Path;

mod compare;
mod writer;

pub use compare::{compare, ComparisonRow};
pub use writer::{export, ExportError};

/// Compares the base items against the other set and writes the styled
/// report to `path`.
pub fn compare_and_export(
    base: &[String],
    other: &[String],
    path: &Path,
) -> Result<(), ExportError> {
    export(&compare(base, other), path)
}
