//! CalculiX FRD (result) file reader.
//!
//! Extracts the node-related datasets of an `.frd` file into a
//! [`ResultModel`]. Element data, mesh connectivity and any dataset that is
//! not on the [`NODE_RELATED`](crate::datasets::NODE_RELATED) list are skipped.
//!
//! ## Format Overview
//!
//! FRD records are identified by their leading key once the one-column pad
//! is removed:
//! - `2C` / `3C`: start of the node coordinate / element block
//! - `-4  NAME`: start of a result dataset called `NAME`
//! - `-1`: data row, node id in characters 2..12, then 12-wide values
//! - `-3`: end of the most recently started block
//!
//! ## Usage
//!
//! ```rust,no_run
//! let results = ccx_frd::read_frd("job.frd")?;
//! for (name, table) in results.iter() {
//!     println!("{name}: {} nodes", table.len());
//! }
//! # Ok::<(), ccx_frd::FrdError>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::datasets::is_node_related;
use crate::decoder::decode_block;
use crate::error::{FrdError, Result};
use crate::locator::locate_blocks;
use crate::model::ResultModel;

/// Read all lines of `reader`, trimmed of the record pad and trailing blanks.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect()
}

/// Read the node-related datasets of the FRD file at `path`.
pub fn read_frd(path: impl AsRef<Path>) -> Result<ResultModel> {
    let path = path.as_ref();
    let read_err = |source: io::Error| FrdError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let lines = read_lines(BufReader::new(file)).map_err(read_err)?;
    info!("file \"{}\" contains {} lines", path.display(), lines.len());
    extract_node_results(&lines)
}

/// Like [`read_frd`], for FRD contents already in memory.
pub fn parse_frd_str(raw: &str) -> Result<ResultModel> {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    extract_node_results(&lines)
}

/// Locate every block in `lines` and decode the node-related ones.
pub fn extract_node_results<S: AsRef<str>>(lines: &[S]) -> Result<ResultModel> {
    let blocks = locate_blocks(lines)?;
    let mut model = ResultModel::new();
    for (name, range) in blocks.iter().filter(|(name, _)| is_node_related(name)) {
        let table = decode_block(lines, range, name)?;
        info!("extracted {} \"{name}\"", table.len());
        model.insert(name, table);
    }
    Ok(model)
}
