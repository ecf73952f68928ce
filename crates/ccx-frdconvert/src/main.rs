use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use ccx_frd::{ConvertOptions, FailurePolicy, OutputFormat, convert_all};
use clap::{ArgGroup, Parser, ValueEnum};
use log::{LevelFilter, info};

const LICENSE: &str = concat!(
    "frdconvert ",
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) the ccx-frd authors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice (including the next
paragraph) shall be included in all copies or substantial portions of the
Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"
);

/// Extract the node-related data from CalculiX FRD files and save it as
/// JSON, a binary dump or an SQLite database.
#[derive(Parser, Debug)]
#[command(name = "frdconvert", version, about)]
#[command(group(ArgGroup::new("format").multiple(false)))]
struct Cli {
    /// save FRD file contents in JSON format
    #[arg(short, long, group = "format", required_unless_present_any = ["binary", "sqlite", "license"])]
    json: bool,

    /// save FRD file contents as a binary dump
    #[arg(short, long, group = "format", required_unless_present_any = ["json", "sqlite", "license"])]
    binary: bool,

    /// save FRD file contents in SQLite database format
    #[arg(short, long, group = "format", required_unless_present_any = ["json", "binary", "license"])]
    sqlite: bool,

    /// stop at the first file that fails instead of continuing
    #[arg(long)]
    fail_fast: bool,

    /// logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Warning)]
    log: LogLevel,

    /// print the license and exit
    #[arg(short, long)]
    license: bool,

    /// one or more files to process
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.binary {
            OutputFormat::Binary
        } else {
            OutputFormat::Sqlite
        }
    }

    fn options(&self) -> ConvertOptions {
        let policy = if self.fail_fast {
            FailurePolicy::Abort
        } else {
            FailurePolicy::KeepGoing
        };
        ConvertOptions::new(self.format()).with_failure_policy(policy)
    }
}

fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();
    if cli.files.is_empty() {
        info!("no input files given");
        return Ok(());
    }

    let summary = convert_all(&cli.files, &options);
    let failures = summary.failed.len();
    if let Some(first) = summary.failed.into_iter().next() {
        return Err(first).with_context(|| {
            format!(
                "{failures} of {} file(s) failed to convert to {}",
                cli.files.len(),
                options.format
            )
        });
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.license {
        print!("{LICENSE}");
        return ExitCode::SUCCESS;
    }
    init_logging(cli.log);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("frdconvert: {err:#}");
            ExitCode::from(1)
        }
    }
}
