use crate::domain::model::{DayAvailability, ShiftSummary};

/// One pass over the inspected days: counts plus the dates where at least
/// one shift accepts the requested party size.
pub fn summarize(days: &[DayAvailability], pax: u32) -> ShiftSummary {
    let mut summary = ShiftSummary::default();

    for day in days {
        summary.days_seen += 1;
        if day.is_open {
            summary.days_open += 1;
        }
        if !day.shifts.is_empty() {
            summary.days_with_shifts += 1;
        }
        summary.total_shifts += day.shifts.len();

        if day.shifts.iter().any(|shift| shift.accepts(pax)) {
            summary.matching_dates.push(day.date.clone());
        }
    }

    summary
}
