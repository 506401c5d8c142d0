use crate::domain::model::{AvailabilityQuery, DayAvailability};
use crate::utils::error::Result;

/// A strategy for obtaining the per-day availability data. The two
/// implementations (rendered booking page, month-summary API) are
/// alternatives selected by configuration, never composed.
pub trait Source: Send + Sync {
    fn fetch_days(
        &self,
        query: &AvailabilityQuery,
    ) -> impl std::future::Future<Output = Result<Vec<DayAvailability>>> + Send;

    /// Short name used in logs and the debug payload.
    fn kind(&self) -> &'static str;
}

/// Line-oriented `name=value` append target for downstream automation.
pub trait OutputSink {
    fn write(&self, name: &str, value: &str) -> Result<()>;
}
