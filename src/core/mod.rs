pub mod checker;
pub mod extract;
pub mod source;
pub mod summary;

pub use crate::domain::model::{
    AvailabilityQuery, CheckDetails, CheckResult, DayAvailability, Shift, ShiftSummary, Verdict,
};
pub use crate::domain::ports::{OutputSink, Source};
pub use crate::utils::error::Result;
