//! Node-related result extraction for CalculiX FRD files.
//!
//! This crate provides:
//! - **Block location**: finds the line range of every dataset in an FRD file
//! - **Fixed-width decoding** of `-1` data rows into per-node value tuples
//! - **Result model** ordered by dataset and node appearance
//! - **Writers** for JSON, a postcard binary dump and SQLite databases
//! - **Batch conversion** with a configurable per-file failure policy

pub mod binary;
pub mod convert;
pub mod datasets;
pub mod decoder;
pub mod error;
pub mod frd_reader;
pub mod json_writer;
pub mod locator;
pub mod model;
mod output;
pub mod sqlite_writer;

pub use binary::{read_binary, write_binary};
pub use convert::{BatchSummary, ConvertOptions, FailurePolicy, convert_all, convert_file};
pub use datasets::{NODE_RELATED, is_node_related};
pub use decoder::{column_count, decode_block, value_columns};
pub use error::{FrdError, Result};
pub use frd_reader::{extract_node_results, parse_frd_str, read_frd, read_lines};
pub use json_writer::{read_json, write_json};
pub use locator::{BlockMap, BlockRange, locate_blocks};
pub use model::{NodeTable, ResultModel};
pub use output::{OutputFormat, output_path};
pub use sqlite_writer::write_sqlite;
