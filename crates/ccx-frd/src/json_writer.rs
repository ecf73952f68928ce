//! JSON encoding of a [`ResultModel`].
//!
//! The file is a single object with one member per dataset, each holding an
//! object of node id → value array. Datasets and nodes appear in model order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::model::ResultModel;
use crate::output::ensure_parent_dir;

pub fn write_json(model: &ResultModel, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    info!("writing JSON file \"{}\"", path.display());
    ensure_parent_dir(path)?;

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, model)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub fn read_json(path: impl AsRef<Path>) -> Result<ResultModel> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrdError;
    use crate::model::NodeTable;
    use std::fs;

    fn sample() -> ResultModel {
        let mut model = ResultModel::new();
        model.insert(
            "NODES",
            [(3, vec![0.0, 1.0, 2.0]), (1, vec![-1.5, 0.0, 1e-7])]
                .into_iter()
                .collect::<NodeTable>(),
        );
        model.insert(
            "NDTEMP",
            [(3, vec![293.15]), (1, vec![310.0])]
                .into_iter()
                .collect::<NodeTable>(),
        );
        model
    }

    #[test]
    fn json_roundtrip_preserves_model() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("job.json");
        let model = sample();

        write_json(&model, &path).expect("write should succeed");
        let loaded = read_json(&path).expect("read should succeed");

        assert_eq!(loaded, model);
        let names: Vec<_> = loaded.names().collect();
        assert_eq!(names, ["NODES", "NDTEMP"]);
        assert_eq!(loaded.get("NODES").map(NodeTable::node_ids), Some(&[3, 1][..]));
    }

    #[test]
    fn json_layout_is_nested_objects() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("job.json");
        write_json(&sample(), &path).expect("write should succeed");

        let text = fs::read_to_string(&path).expect("json readable");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["NDTEMP"]["3"][0], 293.15);
        assert_eq!(value["NODES"]["1"].as_array().map(Vec::len), Some(3));
        assert!(text.find("\"NODES\"") < text.find("\"NDTEMP\""));
    }

    #[test]
    fn empty_model_writes_empty_object() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("empty.json");
        write_json(&ResultModel::new(), &path).expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).expect("readable").trim(), "{}");
    }

    #[test]
    fn invalid_json_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"DISP\": {\"x\": [1.0]}}").expect("write payload");
        assert!(matches!(read_json(&path), Err(FrdError::Json(_))));
    }
}
