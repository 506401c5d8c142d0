use crate::domain::model::CheckResult;
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends `name=value` lines to the automation output file. In
/// non-automation contexts the file is simply not configured.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Resolves the sink from GITHUB_OUTPUT; absent locally.
    pub fn from_env() -> Option<Self> {
        std::env::var("GITHUB_OUTPUT").ok().map(FileSink::new)
    }
}

impl OutputSink for FileSink {
    fn write(&self, name: &str, value: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}={}", name, value)?;
        Ok(())
    }
}

/// Writes one check result to the sink: status, the 0/1 availability flag,
/// the reason, the JSON details, and the debug payload when present.
pub fn emit_result<S: OutputSink>(sink: &S, result: &CheckResult) -> Result<()> {
    sink.write("status", result.verdict.as_str())?;
    sink.write("available", if result.is_available() { "1" } else { "0" })?;
    sink.write("reason", &result.reason)?;
    sink.write("details", &serde_json::to_string(&result.details)?)?;
    if let Some(debug) = &result.debug {
        sink.write("debug", &serde_json::to_string(debug)?)?;
    }
    Ok(())
}
