use crate::domain::model::{DayAvailability, Shift};
use crate::utils::error::{CheckError, Result};
use regex::Regex;
use serde_json::Value;

/// Known nestings of the app state inside the embedded page payload,
/// probed in order; the first one holding `dailyAvailabilities` wins.
/// The doubled `initialState` level is a shape observed in the wild.
const CANDIDATE_PATHS: &[&[&str]] = &[
    &["props", "pageProps", "initialState", "appStoreState"],
    &["props", "pageProps", "initialState", "initialState", "appStoreState"],
    &["props", "pageProps", "appStoreState"],
    &[],
];

const DAILY_KEY: &str = "dailyAvailabilities";

/// Pulls the `__NEXT_DATA__` JSON payload out of rendered page HTML.
pub fn extract_next_data(html: &str) -> Result<Value> {
    let marker =
        Regex::new(r#"(?s)<script id="__NEXT_DATA__" type="application/json">(.*?)</script>"#)
            .unwrap();

    let captures = marker.captures(html).ok_or_else(|| CheckError::Parse {
        message: "__NEXT_DATA__ marker not found (page not rendered or challenged)".to_string(),
    })?;

    let payload = serde_json::from_str(&captures[1]).map_err(|e| CheckError::Parse {
        message: format!("__NEXT_DATA__ payload is not valid JSON: {}", e),
    })?;

    Ok(payload)
}

/// Probes the candidate paths and returns the `dailyAvailabilities` value
/// from the first match. `None` is a diagnostic condition for the caller,
/// not an error.
pub fn locate_daily_availabilities(root: &Value) -> Option<&Value> {
    CANDIDATE_PATHS.iter().find_map(|path| {
        let mut node = root;
        for key in *path {
            node = node.get(key)?;
        }
        node.get(DAILY_KEY)
    })
}

/// Converts the date-keyed `dailyAvailabilities` map into day records.
/// Null or malformed day payloads degrade to a day with no shifts.
pub fn days_from_daily_map(daily: &Value) -> Vec<DayAvailability> {
    let Some(map) = daily.as_object() else {
        return Vec::new();
    };

    map.iter()
        .map(|(date, payload)| DayAvailability {
            date: date.clone(),
            is_open: payload
                .get("isOpen")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            shifts: shifts_from_value(payload.get("shifts")),
        })
        .collect()
}

/// Converts the month-summary response (a list of day objects, possibly
/// wrapped in a `days` field) into day records. `None` when the body holds
/// neither shape.
pub fn days_from_month_summary(body: &Value) -> Option<Vec<DayAvailability>> {
    let list = body
        .as_array()
        .or_else(|| body.get("days").and_then(Value::as_array))?;

    let days = list
        .iter()
        .map(|day| DayAvailability {
            date: day
                .get("date")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            is_open: day.get("isOpen").and_then(Value::as_bool).unwrap_or(false),
            shifts: shifts_from_value(day.get("shifts")),
        })
        .collect();

    Some(days)
}

fn shifts_from_value(shifts: Option<&Value>) -> Vec<Shift> {
    let Some(list) = shifts.and_then(Value::as_array) else {
        return Vec::new();
    };

    list.iter()
        .map(|shift| Shift {
            name: shift
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
            // A shift without an accepted-size list matches no party size.
            possible_guests: shift
                .get("possible_guests")
                .and_then(Value::as_array)
                .map(|sizes| {
                    sizes
                        .iter()
                        .filter_map(Value::as_u64)
                        .map(|n| n as u32)
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}
