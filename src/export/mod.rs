//! IIF export entry points.
//!
//! [`to_iif`] compiles records to IIF text; [`export`] does the same and
//! writes the result to a `.iif` file.
//!
//! # Example
//!
//! ```no_run
//! use iif::core::{IifConfig, RawRecord, RecordType};
//! use iif::export::export;
//!
//! let records = vec![
//!     RawRecord::new(RecordType::Accnt).field("NAME", "Checking").field("ACCNTTYPE", "BANK"),
//! ];
//! let path = export(&records, "books", &IifConfig::default()).unwrap();
//! assert_eq!(path.to_str(), Some("books.iif"));
//! ```

mod sink;

use std::path::{Path, PathBuf};

use crate::core::{
    IifConfig, IifError, Record, RenderedLine, assemble, check_headers, group_lines, render,
    sort_lines,
};

pub use sink::{IIF_EXTENSION, iif_path, write_iif};

/// Compile records into IIF file content.
///
/// Records may arrive in any order; they are stably sorted by type
/// precedence, so records of one type keep their relative order.
pub fn to_iif<R: Record>(records: &[R], config: &IifConfig) -> Result<String, IifError> {
    let mut lines = records
        .iter()
        .map(render)
        .collect::<Result<Vec<RenderedLine>, _>>()?;

    sort_lines(&mut lines);
    if config.check_headers {
        check_headers(&lines)?;
    }

    let blocks = group_lines(lines);
    let has_transactions = blocks.iter().any(|b| b.record_type.is_transaction());
    let out = assemble(&blocks, config)?;

    tracing::debug!(
        records = records.len(),
        blocks = blocks.len(),
        has_transactions,
        bytes = out.len(),
        "compiled IIF content"
    );
    Ok(out)
}

/// Compile records and write them to `filename`, normalized to the `.iif`
/// extension. Nothing is written if compilation fails.
pub fn export<R: Record>(
    records: &[R],
    filename: impl AsRef<Path>,
    config: &IifConfig,
) -> Result<PathBuf, IifError> {
    let content = to_iif(records, config)?;
    write_iif(content.as_bytes(), filename)
}
