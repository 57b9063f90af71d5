//! Final assembly of blocks into IIF text.
//!
//! List blocks (ACCNT … VEND) are written as-is: header, then data lines.
//! Transaction blocks (TRNS, SPL) form one bracketed section: every header
//! first, then `!ENDTRNS`, then every data line, then `ENDTRNS`.

use super::config::{IifConfig, MissingTransactions};
use super::error::IifError;
use super::group::Block;

const END_TRNS_HEADER: &str = "!ENDTRNS";
const END_TRNS: &str = "ENDTRNS";

/// Assemble ordered blocks into the final file content.
///
/// Lines are joined with the configured line ending; the output carries no
/// trailing separator. Empty input yields an empty string.
pub fn assemble(blocks: &[Block], config: &IifConfig) -> Result<String, IifError> {
    let split = blocks
        .iter()
        .position(|b| b.record_type.is_transaction());

    if split.is_none()
        && !blocks.is_empty()
        && config.missing_transactions == MissingTransactions::Error
    {
        return Err(IifError::assembly(
            "no TRNS or SPL record to close the transaction section",
        ));
    }

    let (list_blocks, trns_blocks) = blocks.split_at(split.unwrap_or(blocks.len()));

    let mut lines: Vec<&str> = Vec::new();
    for block in list_blocks {
        lines.push(&block.header);
        lines.extend(block.lines.iter().map(String::as_str));
    }

    if !trns_blocks.is_empty() {
        lines.extend(trns_blocks.iter().map(|b| b.header.as_str()));
        lines.push(END_TRNS_HEADER);
        for block in trns_blocks {
            lines.extend(block.lines.iter().map(String::as_str));
        }
        lines.push(END_TRNS);
    }

    Ok(lines.join(config.line_ending.as_str()))
}
