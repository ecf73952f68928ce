//! Binary dump of a [`ResultModel`].
//!
//! Layout: the magic bytes `FRDB`, one format version byte, then the
//! postcard encoding of the model.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{FrdError, Result};
use crate::model::ResultModel;
use crate::output::ensure_parent_dir;

const MAGIC: &[u8; 4] = b"FRDB";

const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = MAGIC.len() + 1;

pub fn encode(model: &ResultModel) -> Result<Vec<u8>> {
    let payload = postcard::to_allocvec(model)?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.push(FORMAT_VERSION);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

pub fn decode(bytes: &[u8]) -> Result<ResultModel> {
    if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
        return Err(FrdError::InvalidBinary("missing FRDB header".to_string()));
    }
    let version = bytes[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(FrdError::InvalidBinary(format!(
            "unsupported format version {version}"
        )));
    }
    Ok(postcard::from_bytes(&bytes[HEADER_LEN..])?)
}

pub fn write_binary(model: &ResultModel, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    info!("writing binary file \"{}\"", path.display());
    ensure_parent_dir(path)?;
    fs::write(path, encode(model)?)?;
    Ok(())
}

pub fn read_binary(path: impl AsRef<Path>) -> Result<ResultModel> {
    decode(&fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeTable;

    #[test]
    fn binary_roundtrip_preserves_model() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("job.bin");
        let mut model = ResultModel::new();
        model.insert(
            "STRESS",
            [(-4, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), (9, vec![0.0; 6])]
                .into_iter()
                .collect::<NodeTable>(),
        );
        model.insert("DISP", [(9, vec![1e-3, 0.0, 0.0])].into_iter().collect::<NodeTable>());

        write_binary(&model, &path).expect("write should succeed");
        let loaded = read_binary(&path).expect("read should succeed");
        assert_eq!(loaded, model);
        let names: Vec<_> = loaded.names().collect();
        assert_eq!(names, ["STRESS", "DISP"]);
    }

    #[test]
    fn empty_model_roundtrips() {
        let bytes = encode(&ResultModel::new()).expect("encode");
        assert_eq!(&bytes[..4], MAGIC);
        assert!(decode(&bytes).expect("decode").is_empty());
    }

    #[test]
    fn foreign_bytes_are_rejected() {
        assert!(matches!(decode(b"{}"), Err(FrdError::InvalidBinary(_))));
        assert!(matches!(decode(b"FRDB\x07"), Err(FrdError::InvalidBinary(_))));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let mut model = ResultModel::new();
        model.insert("DISP", [(1, vec![1.0, 2.0, 3.0])].into_iter().collect::<NodeTable>());
        let bytes = encode(&model).expect("encode");
        assert!(matches!(
            decode(&bytes[..bytes.len() - 4]),
            Err(FrdError::Postcard(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(matches!(
            read_binary(dir.path().join("missing.bin")),
            Err(FrdError::Io(_))
        ));
    }
}
