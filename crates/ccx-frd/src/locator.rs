//! Locates the data blocks of an FRD file.
//!
//! Blocks are opened by `2C` (node coordinates), `3C` (elements) or
//! `-4 <NAME>` records and closed by `-3` records. A `-3` always closes the
//! most recently opened block that is still open.

use std::collections::HashMap;

use log::{debug, warn};

use crate::datasets::{ELEMENTS, NODES};
use crate::error::{FrdError, Result};

/// Half-open `[start, end)` range of line indices holding one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

/// Dataset name → block range, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMap {
    blocks: Vec<(String, BlockRange)>,
}

impl BlockMap {
    pub fn get(&self, name: &str) -> Option<BlockRange> {
        self.blocks
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, range)| *range)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, BlockRange)> + '_ {
        self.blocks.iter().map(|(name, range)| (name.as_str(), *range))
    }
}

/// Structural role of a line, decided by its leading characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker<'a> {
    /// `2C` / `3C` / `-4 NAME`
    Open(&'a str),
    /// `-4` with nothing after it
    OpenUnnamed,
    /// `-3`
    Close,
    Other,
}

fn classify(line: &str) -> Marker<'_> {
    if line.starts_with("2C") {
        Marker::Open(NODES)
    } else if line.starts_with("3C") {
        Marker::Open(ELEMENTS)
    } else if line.starts_with("-4") {
        match line.split_whitespace().nth(1) {
            Some(name) => Marker::Open(name),
            None => Marker::OpenUnnamed,
        }
    } else if line.starts_with("-3") {
        Marker::Close
    } else {
        Marker::Other
    }
}

/// Scan `lines` once and return the range of every block they declare.
///
/// The result covers all blocks, node-related or not. A block that is still
/// open at the end of the input is reported as [`FrdError::UnclosedBlock`].
pub fn locate_blocks<S: AsRef<str>>(lines: &[S]) -> Result<BlockMap> {
    // Names in the order they were first opened.
    let mut order: Vec<&str> = Vec::new();
    // (name, index of the opening record)
    let mut open: Vec<(&str, usize)> = Vec::new();
    let mut closed: HashMap<&str, BlockRange> = HashMap::new();

    for (num, line) in lines.iter().enumerate() {
        match classify(line.as_ref()) {
            Marker::Open(name) => {
                if !order.contains(&name) {
                    order.push(name);
                }
                open.push((name, num));
            }
            Marker::OpenUnnamed => return Err(FrdError::MissingDatasetName { line: num + 1 }),
            Marker::Close => match open.pop() {
                Some((name, opened)) => {
                    let range = BlockRange {
                        start: opened + 1,
                        end: num,
                    };
                    debug!("block {name}: lines {}..{}", range.start, range.end);
                    closed.insert(name, range);
                }
                None => warn!("line {}: -3 record without an open block", num + 1),
            },
            Marker::Other => {}
        }
    }

    if let Some(&(name, opened)) = open.first() {
        return Err(FrdError::UnclosedBlock {
            name: name.to_string(),
            line: opened + 1,
        });
    }

    // Nothing is open any more, so every opened name has a closed range.
    let blocks = order
        .into_iter()
        .filter_map(|name| closed.remove(name).map(|range| (name.to_string(), range)))
        .collect();
    Ok(BlockMap { blocks })
}
