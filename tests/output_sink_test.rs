use shift_scout::config::sink::{emit_result, FileSink};
use shift_scout::domain::model::{CheckDetails, CheckResult, Verdict};
use shift_scout::OutputSink;
use tempfile::TempDir;

fn available_result() -> CheckResult {
    let mut details = CheckDetails::empty(2);
    details.days_seen = 3;
    details.days_with_shifts = 1;
    details.total_shifts = 1;
    details.matching_count = 1;
    details.matching_dates = vec!["2025-06-01".to_string()];

    CheckResult {
        verdict: Verdict::Available,
        reason: "found 1 date(s) with a shift accepting pax=2".to_string(),
        details,
        debug: None,
    }
}

#[test]
fn test_emit_result_writes_key_value_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("output");
    let sink = FileSink::new(&path);

    emit_result(&sink, &available_result()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "status=AVAILABLE");
    assert_eq!(lines[1], "available=1");
    assert_eq!(
        lines[2],
        "reason=found 1 date(s) with a shift accepting pax=2"
    );

    let details: serde_json::Value =
        serde_json::from_str(lines[3].strip_prefix("details=").unwrap()).unwrap();
    assert_eq!(details["days_seen"], 3);
    assert_eq!(details["matching_dates"][0], "2025-06-01");
}

#[test]
fn test_emit_result_includes_debug_when_present() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("output");
    let sink = FileSink::new(&path);

    let mut result = available_result();
    result.debug = Some(serde_json::json!({"source": "api"}));
    emit_result(&sink, &result).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.lines().any(|l| l.starts_with("debug=")));
}

#[test]
fn test_emit_unknown_result() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("output");
    let sink = FileSink::new(&path);

    let result = CheckResult {
        verdict: Verdict::Unknown,
        reason: "structure_missing: availability structure missing".to_string(),
        details: CheckDetails::empty(2),
        debug: None,
    };
    emit_result(&sink, &result).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("status=UNKNOWN"));
    assert!(content.contains("available=0"));
}

#[test]
fn test_sink_appends_across_writes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("output");
    let sink = FileSink::new(&path);

    sink.write("first", "1").unwrap();
    sink.write("second", "2").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "first=1\nsecond=2\n");
}
