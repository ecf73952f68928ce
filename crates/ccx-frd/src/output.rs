use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::binary::write_binary;
use crate::error::Result;
use crate::json_writer::write_json;
use crate::model::ResultModel;
use crate::sqlite_writer::write_sqlite;

/// Output encodings for an extracted [`ResultModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON object.
    Json,
    /// Postcard dump, readable with [`read_binary`](crate::read_binary).
    Binary,
    /// SQLite database, one table per dataset.
    Sqlite,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Binary => "binary",
            OutputFormat::Sqlite => "SQLite",
        }
    }

    /// File extension of the output file.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Binary => "bin",
            OutputFormat::Sqlite => "db",
        }
    }

    pub fn write(self, model: &ResultModel, path: impl AsRef<Path>) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(model, path),
            OutputFormat::Binary => write_binary(model, path),
            OutputFormat::Sqlite => write_sqlite(model, path),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output file for `input`: the same path with its extension replaced.
pub fn output_path(input: impl AsRef<Path>, format: OutputFormat) -> PathBuf {
    input.as_ref().with_extension(format.extension())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeTable;

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(
            output_path("runs/beam.frd", OutputFormat::Json),
            PathBuf::from("runs/beam.json")
        );
        assert_eq!(
            output_path("beam.frd", OutputFormat::Binary),
            PathBuf::from("beam.bin")
        );
        assert_eq!(output_path("beam", OutputFormat::Sqlite), PathBuf::from("beam.db"));
    }

    #[test]
    fn each_format_writes_its_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut model = ResultModel::new();
        model.insert("DISP", [(1, vec![0.5, 0.25, 0.0])].into_iter().collect::<NodeTable>());

        for format in [OutputFormat::Json, OutputFormat::Binary, OutputFormat::Sqlite] {
            let path = output_path(dir.path().join("nested").join("job.frd"), format);
            format.write(&model, &path).expect("write should succeed");
            assert!(path.is_file(), "{format} output missing");
        }
    }
}
