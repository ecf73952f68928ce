//! Conversion of FRD files into one of the [`OutputFormat`]s.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{FrdError, Result};
use crate::frd_reader::read_frd;
use crate::output::{OutputFormat, output_path};

/// What to do when one input file of a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and continue with the next file.
    #[default]
    KeepGoing,
    /// Stop at the first failure.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub format: OutputFormat,
    pub failure_policy: FailurePolicy,
}

impl ConvertOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

/// Outcome of [`convert_all`].
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Output files written, in input order.
    pub written: Vec<PathBuf>,
    /// Failures, each tagged with the input file it belongs to.
    pub failed: Vec<FrdError>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert one FRD file, writing next to it with the format's extension.
pub fn convert_file(input: impl AsRef<Path>, format: OutputFormat) -> Result<PathBuf> {
    let input = input.as_ref();
    let run = || -> Result<PathBuf> {
        let model = read_frd(input)?;
        let output = output_path(input, format);
        format.write(&model, &output)?;
        Ok(output)
    };
    run().map_err(|err| err.in_file(input))
}

/// Convert `inputs` one after another, in order.
pub fn convert_all<I, P>(inputs: I, options: &ConvertOptions) -> BatchSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = BatchSummary::default();
    for input in inputs {
        let input = input.as_ref();
        match convert_file(input, options.format) {
            Ok(output) => {
                info!("converted \"{}\" to \"{}\"", input.display(), output.display());
                summary.written.push(output);
            }
            Err(err) => {
                warn!("{err}");
                summary.failed.push(err);
                if options.failure_policy == FailurePolicy::Abort {
                    break;
                }
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GOOD: &str = " -4  NDTEMP      1    1\n -1         1 2.93000E+02\n -3\n";
    const BAD: &str = " -4  NDTEMP      1    1\n -1         1 2.930q0E+02\n -3\n";

    #[test]
    fn keep_going_converts_remaining_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let bad = dir.path().join("bad.frd");
        let good = dir.path().join("good.frd");
        fs::write(&bad, BAD).expect("write bad");
        fs::write(&good, GOOD).expect("write good");

        let options = ConvertOptions::new(OutputFormat::Json);
        let summary = convert_all([&bad, &good], &options);

        assert!(!summary.is_success());
        assert_eq!(summary.written, [dir.path().join("good.json")]);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].to_string().contains("bad.frd"));
        assert!(!dir.path().join("bad.json").exists());
    }

    #[test]
    fn abort_stops_at_first_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let bad = dir.path().join("bad.frd");
        let good = dir.path().join("good.frd");
        fs::write(&bad, BAD).expect("write bad");
        fs::write(&good, GOOD).expect("write good");

        let options =
            ConvertOptions::new(OutputFormat::Binary).with_failure_policy(FailurePolicy::Abort);
        let summary = convert_all([&bad, &good], &options);

        assert!(summary.written.is_empty());
        assert_eq!(summary.failed.len(), 1);
        assert!(!dir.path().join("good.bin").exists());
    }

    #[test]
    fn missing_input_is_reported_with_its_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.frd");
        let err = convert_file(&missing, OutputFormat::Sqlite).expect_err("missing input");
        assert!(matches!(err, FrdError::Read { ref path, .. } if *path == missing));
    }
}
