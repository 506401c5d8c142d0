use crate::core::summary::summarize;
use crate::domain::model::{AvailabilityQuery, CheckDetails, CheckResult, Verdict};
use crate::domain::ports::Source;
use crate::utils::error::Result;

/// Runs one fetch -> extract -> summarize -> classify pass. Every failure
/// terminates in the UNKNOWN verdict; nothing propagates past `run`.
pub struct Checker<S: Source> {
    source: S,
    query: AvailabilityQuery,
    debug: bool,
}

impl<S: Source> Checker<S> {
    pub fn new(source: S, query: AvailabilityQuery) -> Self {
        Self {
            source,
            query,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub async fn run(&self) -> CheckResult {
        tracing::info!(
            "checking restaurant {} for pax={} via {} source",
            self.query.restaurant_id,
            self.query.pax,
            self.source.kind()
        );

        match self.try_run().await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("check failed ({}): {}", e.failure_class(), e);
                CheckResult::unknown(self.query.pax, &e)
            }
        }
    }

    async fn try_run(&self) -> Result<CheckResult> {
        let days = self.source.fetch_days(&self.query).await?;
        let summary = summarize(&days, self.query.pax);

        tracing::info!(
            "inspected {} day(s): {} open, {} with shifts, {} matching pax={}",
            summary.days_seen,
            summary.days_open,
            summary.days_with_shifts,
            summary.matching_dates.len(),
            self.query.pax
        );

        let (verdict, reason) = if summary.matching_dates.is_empty() {
            (
                Verdict::NotAvailable,
                format!(
                    "no shift accepts pax={} across {} day(s)",
                    self.query.pax, summary.days_seen
                ),
            )
        } else {
            (
                Verdict::Available,
                format!(
                    "found {} date(s) with a shift accepting pax={}",
                    summary.matching_dates.len(),
                    self.query.pax
                ),
            )
        };

        let debug = self.debug.then(|| {
            serde_json::json!({
                "source": self.source.kind(),
                "query": self.query,
                "matching_dates": summary.matching_dates,
            })
        });

        Ok(CheckResult {
            verdict,
            reason,
            details: CheckDetails::from_summary(self.query.pax, &summary),
            debug,
        })
    }
}
