//! Fixed-width decoding of node data rows.
//!
//! A data row is a `-1` record: the marker and node id occupy the first
//! 12-character column (the id in characters `[2, 12)`), followed by
//! 12-character value columns. The number of value columns is fixed per
//! dataset by the width of its first data row.

use std::ops::Range;

use crate::error::{FrdError, Result};
use crate::locator::BlockRange;
use crate::model::NodeTable;

/// Width of one FRD result column.
pub const FIELD_WIDTH: usize = 12;

const NODE_ID: Range<usize> = 2..FIELD_WIDTH;

/// Number of 12-character columns in a row of `len` characters.
pub fn column_count(len: usize) -> usize {
    len / FIELD_WIDTH
}

/// Character ranges of the value columns of a row like `first_row`.
pub fn value_columns(first_row: &str) -> Vec<Range<usize>> {
    (1..column_count(first_row.len()))
        .map(|c| c * FIELD_WIDTH..(c + 1) * FIELD_WIDTH)
        .collect()
}

/// Decode the `-1` rows of `range` into a node table.
///
/// Lines before the first `-1` row are header records and are skipped. Every
/// line from there to the end of the range is decoded; a later row for the
/// same node replaces an earlier one.
pub fn decode_block<S: AsRef<str>>(lines: &[S], range: BlockRange, name: &str) -> Result<NodeTable> {
    let end = range.end.min(lines.len());
    let first = (range.start..end)
        .find(|&num| lines[num].as_ref().starts_with("-1"))
        .ok_or_else(|| FrdError::NoDataRows {
            name: name.to_string(),
        })?;

    let columns = value_columns(lines[first].as_ref());
    let mut table = NodeTable::new();

    for (num, line) in lines[first..end].iter().enumerate() {
        let line = line.as_ref();
        let line_no = first + num + 1;

        let id_text = field(line, NODE_ID);
        let node = id_text
            .parse::<i64>()
            .map_err(|_| FrdError::InvalidNodeId {
                name: name.to_string(),
                line: line_no,
                text: id_text.to_string(),
            })?;

        let values = columns
            .iter()
            .enumerate()
            .map(|(c, cols)| {
                let text = field(line, cols.clone());
                text.parse::<f64>().map_err(|_| FrdError::InvalidValue {
                    name: name.to_string(),
                    line: line_no,
                    column: c + 1,
                    text: text.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        table.insert(node, values);
    }

    Ok(table)
}

/// Trimmed text of `cols`, clamped to the end of `line`.
fn field(line: &str, cols: Range<usize>) -> &str {
    let len = line.len();
    line.get(cols.start.min(len)..cols.end.min(len))
        .unwrap_or("")
        .trim()
}
