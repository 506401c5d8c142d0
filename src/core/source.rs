use crate::core::extract::{
    days_from_daily_map, days_from_month_summary, extract_next_data, locate_daily_availabilities,
};
use crate::domain::model::{AvailabilityQuery, DayAvailability};
use crate::domain::ports::Source;
use crate::utils::error::{CheckError, Result};
use chrono::{Datelike, Months, NaiveDate, Utc};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

// The booking host challenges plain clients; present browser-like headers.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

fn build_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

async fn read_json(response: reqwest::Response) -> Result<Value> {
    let url = response.url().to_string();
    let status = response.status();

    if !status.is_success() {
        return Err(CheckError::FetchStatus {
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| CheckError::Parse {
        message: format!("response from {} is not valid JSON: {}", url, e),
    })
}

/// Fetches the rendered booking page and reads the availability state
/// embedded in its `__NEXT_DATA__` payload. Covers whatever window the
/// page preloads; the query's lookahead months are not used here.
pub struct PageSource {
    client: Client,
    base_url: String,
}

impl PageSource {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url,
        })
    }
}

impl Source for PageSource {
    async fn fetch_days(&self, query: &AvailabilityQuery) -> Result<Vec<DayAvailability>> {
        let url = format!("{}/results", self.base_url);
        tracing::debug!("fetching booking page: {} rid={}", url, query.restaurant_id);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .query(&[("rid", query.restaurant_id.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::FetchStatus {
                status: status.as_u16(),
                url,
            });
        }

        let html = response.text().await?;
        tracing::debug!("page fetched, {} bytes", html.len());

        let next_data = extract_next_data(&html)?;
        let daily = locate_daily_availabilities(&next_data).ok_or_else(|| {
            CheckError::StructureMissing {
                context: "dailyAvailabilities not found at any known path".to_string(),
            }
        })?;

        Ok(days_from_daily_map(daily))
    }

    fn kind(&self) -> &'static str {
        "page"
    }
}

/// Calls the month-summary endpoint once per month in the lookahead
/// window, sequentially, and concatenates the day records in month order.
pub struct ApiSource {
    client: Client,
    base_url: String,
}

impl ApiSource {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url,
        })
    }

    async fn fetch_month(
        &self,
        query: &AvailabilityQuery,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayAvailability>> {
        let url = format!("{}/availabilities/summary", self.base_url);
        tracing::debug!("fetching month summary: {} {}..{}", url, begin, end);

        let date_begin = begin.to_string();
        let date_end = end.to_string();
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .query(&[
                ("restaurantId", query.restaurant_id.as_str()),
                ("date_begin", date_begin.as_str()),
                ("date_end", date_end.as_str()),
            ])
            .send()
            .await?;

        let body = read_json(response).await?;
        days_from_month_summary(&body).ok_or_else(|| CheckError::StructureMissing {
            context: format!("month summary for {}..{} is not a day list", begin, end),
        })
    }
}

impl Source for ApiSource {
    async fn fetch_days(&self, query: &AvailabilityQuery) -> Result<Vec<DayAvailability>> {
        let today = Utc::now().date_naive();
        let mut days = Vec::new();

        for (begin, end) in month_windows(today, query.months) {
            let month_days = self.fetch_month(query, begin, end).await?;
            tracing::debug!("month {}..{}: {} day(s)", begin, end, month_days.len());
            days.extend(month_days);
        }

        Ok(days)
    }

    fn kind(&self) -> &'static str {
        "api"
    }
}

/// Date ranges for the lookahead window: the current month starts today,
/// later months run first-of-month to end-of-month.
fn month_windows(today: NaiveDate, months: u32) -> Vec<(NaiveDate, NaiveDate)> {
    let first_of_month = today.with_day(1).unwrap_or(today);

    (0..months)
        .filter_map(|offset| {
            let month_start = first_of_month.checked_add_months(Months::new(offset))?;
            let month_end = month_start
                .checked_add_months(Months::new(1))?
                .pred_opt()?;
            let begin = if offset == 0 { today } else { month_start };
            Some((begin, month_end))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_windows_start_today() {
        let windows = month_windows(date(2025, 6, 15), 3);
        assert_eq!(
            windows,
            vec![
                (date(2025, 6, 15), date(2025, 6, 30)),
                (date(2025, 7, 1), date(2025, 7, 31)),
                (date(2025, 8, 1), date(2025, 8, 31)),
            ]
        );
    }

    #[test]
    fn test_month_windows_year_rollover() {
        let windows = month_windows(date(2025, 11, 20), 3);
        assert_eq!(windows.last(), Some(&(date(2026, 1, 1), date(2026, 1, 31))));
    }

    #[test]
    fn test_month_windows_zero_months() {
        assert!(month_windows(date(2025, 6, 1), 0).is_empty());
    }

    #[test]
    fn test_month_windows_february() {
        let windows = month_windows(date(2025, 1, 31), 2);
        assert_eq!(windows[1], (date(2025, 2, 1), date(2025, 2, 28)));
    }
}
