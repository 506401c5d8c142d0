pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::sink::FileSink;
pub use config::{CheckConfig, SourceKind};
pub use core::checker::Checker;
pub use core::source::{ApiSource, PageSource};
pub use domain::model::{AvailabilityQuery, CheckDetails, CheckResult, Verdict};
pub use domain::ports::{OutputSink, Source};
pub use utils::error::{CheckError, Result};
