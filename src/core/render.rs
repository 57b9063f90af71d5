//! Header and data line rendering.

use super::error::IifError;
use super::record::{Record, adapt};
use super::types::RecordType;

const TAB: char = '\t';
const HEADER_MARKER: char = '!';

/// One record rendered to its header and data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub record_type: RecordType,
    /// `!TYPE<TAB>NAME1<TAB>NAME2…`, identical for every record of a shape.
    pub header: String,
    /// `TYPE<TAB>value1<TAB>value2…`
    pub data: String,
}

/// Render a header line: `"!" + TYPE + TAB + names joined by TAB`.
pub fn render_header<I, S>(names: I, record_type: RecordType) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    out.push(HEADER_MARKER);
    push_line(&mut out, record_type, names);
    out
}

/// Render a data line: `TYPE + TAB + values joined by TAB`.
///
/// Values are not escaped; embedded tabs or line breaks end up in the file.
pub fn render_data<I, S>(values: I, record_type: RecordType) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    push_line(&mut out, record_type, values);
    out
}

fn push_line<I, S>(out: &mut String, record_type: RecordType, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    out.push_str(record_type.code());
    out.push(TAB);
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(TAB);
        }
        out.push_str(cell.as_ref());
    }
}

/// Adapt and render a single record.
pub fn render<R: Record + ?Sized>(record: &R) -> Result<RenderedLine, IifError> {
    let (record_type, fields) = adapt(record)?;
    Ok(RenderedLine {
        record_type,
        header: render_header(fields.iter().map(|f| &f.name), record_type),
        data: render_data(fields.iter().map(|f| &f.value), record_type),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawRecord;

    #[test]
    fn header_has_marker_and_type() {
        assert_eq!(
            render_header(["NAME", "DESC"], RecordType::Class),
            "!CLASS\tNAME\tDESC"
        );
    }

    #[test]
    fn data_keeps_empty_cells() {
        assert_eq!(
            render_data(["a", "", "c", ""], RecordType::Vend),
            "VEND\ta\t\tc\t"
        );
    }

    #[test]
    fn no_cells_still_has_separator() {
        let empty: [&str; 0] = [];
        assert_eq!(render_data(empty, RecordType::Trns), "TRNS\t");
    }

    #[test]
    fn render_account_record() {
        let rec = RawRecord::new(RecordType::Accnt)
            .field("NAME", "Accounts")
            .field("ACCNTTYPE", "Payable")
            .field("DESC", "AP")
            .field("ACCNUM", "2000")
            .field("EXTRA", "");
        let line = render(&rec).unwrap();
        assert_eq!(line.record_type, RecordType::Accnt);
        assert_eq!(line.header, "!ACCNT\tNAME\tACCNTTYPE\tDESC\tACCNUM\tEXTRA");
        assert_eq!(line.data, "ACCNT\tAccounts\tPayable\tAP\t2000\t");
    }

    #[test]
    fn render_propagates_adapter_errors() {
        let rec = RawRecord::new(RecordType::Accnt);
        assert!(matches!(render(&rec), Err(IifError::Adapter(_))));
    }
}
