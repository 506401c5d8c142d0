use crate::utils::error::CheckError;
use serde::{Deserialize, Serialize};

/// What one run checks: which restaurant, for how many guests, how far ahead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub restaurant_id: String,
    pub pax: u32,
    pub months: u32,
}

/// A bookable time window on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub name: Option<String>,
    pub possible_guests: Vec<u32>,
}

impl Shift {
    pub fn accepts(&self, pax: u32) -> bool {
        self.possible_guests.contains(&pax)
    }
}

/// Per-date record: open/closed flag and its shifts, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: String,
    pub is_open: bool,
    pub shifts: Vec<Shift>,
}

/// Aggregates produced by one pass over the inspected days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftSummary {
    pub days_seen: usize,
    pub days_open: usize,
    pub days_with_shifts: usize,
    pub total_shifts: usize,
    pub matching_dates: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Available,
    NotAvailable,
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Available => "AVAILABLE",
            Verdict::NotAvailable => "NOT_AVAILABLE",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic counts attached to every verdict. Sample lists are truncated
/// so the automation output stays small on wide-open calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDetails {
    pub pax: u32,
    pub days_seen: usize,
    pub days_open: usize,
    pub days_with_shifts: usize,
    pub total_shifts: usize,
    pub matching_count: usize,
    pub matching_dates: Vec<String>,
}

pub const MAX_SAMPLE_DATES: usize = 10;

impl CheckDetails {
    pub fn empty(pax: u32) -> Self {
        Self {
            pax,
            days_seen: 0,
            days_open: 0,
            days_with_shifts: 0,
            total_shifts: 0,
            matching_count: 0,
            matching_dates: Vec::new(),
        }
    }

    pub fn from_summary(pax: u32, summary: &ShiftSummary) -> Self {
        let mut sample = summary.matching_dates.clone();
        sample.truncate(MAX_SAMPLE_DATES);
        Self {
            pax,
            days_seen: summary.days_seen,
            days_open: summary.days_open,
            days_with_shifts: summary.days_with_shifts,
            total_shifts: summary.total_shifts,
            matching_count: summary.matching_dates.len(),
            matching_dates: sample,
        }
    }
}

/// The outcome of one check run. Always present, whatever failed underneath.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub verdict: Verdict,
    pub reason: String,
    pub details: CheckDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<serde_json::Value>,
}

impl CheckResult {
    pub fn unknown(pax: u32, error: &CheckError) -> Self {
        Self {
            verdict: Verdict::Unknown,
            reason: format!("{}: {}", error.failure_class(), error),
            details: CheckDetails::empty(pax),
            debug: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.verdict == Verdict::Available
    }
}
