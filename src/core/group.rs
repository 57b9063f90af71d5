//! Ordering and grouping of rendered lines into typed blocks.

use super::error::IifError;
use super::render::RenderedLine;
use super::types::RecordType;

/// A maximal run of same-type lines sharing one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub record_type: RecordType,
    /// Header of the block's first member.
    pub header: String,
    /// Data lines in input order.
    pub lines: Vec<String>,
}

impl Block {
    fn start(line: RenderedLine) -> Self {
        Self {
            record_type: line.record_type,
            header: line.header,
            lines: vec![line.data],
        }
    }
}

/// Sort lines by export rank. The sort is stable, so records of the same
/// type keep their input order.
pub fn sort_lines(lines: &mut [RenderedLine]) {
    lines.sort_by_key(|l| l.record_type.rank());
}

/// Group sorted lines into blocks in one pass.
///
/// A new block starts whenever the type changes from the previous line.
/// Headers of later members are not compared against the block header.
pub fn group_lines(sorted: Vec<RenderedLine>) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for line in sorted {
        match blocks.last_mut() {
            Some(block) if block.record_type == line.record_type => block.lines.push(line.data),
            _ => blocks.push(Block::start(line)),
        }
    }
    blocks
}

/// Verify that every line shares the header of the first line of its type.
pub fn check_headers(sorted: &[RenderedLine]) -> Result<(), IifError> {
    let mut current: Option<&RenderedLine> = None;
    for line in sorted {
        match current {
            Some(first) if first.record_type == line.record_type => {
                if first.header != line.header {
                    return Err(IifError::assembly(format!(
                        "{} records disagree on header: '{}' vs '{}'",
                        line.record_type,
                        first.header.escape_default(),
                        line.header.escape_default()
                    )));
                }
            }
            _ => current = Some(line),
        }
    }
    Ok(())
}
