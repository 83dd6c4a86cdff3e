use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Local};
use log::{info, warn};
use serde_json::Value;

use crate::client::RawStatus;
use crate::PrinterKind;

/// Display-ready view of the printer, derived on every read. Never stored.
pub type ProjectedStatus = BTreeMap<String, Value>;

const NOT_AVAILABLE: &str = "Not Available";

const HALOT_KEYS: &[&str] = &[
    "printStatus",
    "printStatusFriendly",
    "filename",
    "printRemainTime",
    "progress",
    "curSliceLayer",
    "sliceLayerCount",
    "printExposure",
    "layerThickness",
    "printHeight",
    "bottomExposureNum",
    "initExposure",
    "delayLight",
    "eleSpeed",
    "resin",
];

const WIFI_BOX_KEYS: &[&str] = &[
    "wanip",
    "state",
    "printProgress",
    "printJobTime",
    "printLeftTime",
    "completionTime",
    "print",
    "nozzleTemp",
    "bedTemp",
    "err",
    "upgradeStatus",
];

pub fn project(kind: PrinterKind, data: &RawStatus, offline: bool) -> ProjectedStatus {
    project_at(kind, data, offline, Local::now())
}

pub fn project_at(
    kind: PrinterKind,
    data: &RawStatus,
    offline: bool,
    now: DateTime<Local>,
) -> ProjectedStatus {
    match kind {
        PrinterKind::Halot => project_halot(data, offline),
        // the box carries its own offline signal in the `connect` field,
        // the coordinator flag is not consulted
        PrinterKind::WifiBox => project_wifi_box(data, now),
    }
}

fn project_halot(data: &RawStatus, offline: bool) -> ProjectedStatus {
    if offline {
        return HALOT_KEYS
            .iter()
            .map(|&key| {
                let value = if key == "printRemainTime" {
                    NOT_AVAILABLE
                } else {
                    "Offline"
                };
                (key.to_string(), Value::from(value))
            })
            .collect();
    }

    let mut projected = passthrough(data, HALOT_KEYS);

    projected.insert(
        "printStatusFriendly".to_string(),
        Value::from(friendly_status(data)),
    );
    projected.insert("progress".to_string(), Value::from(progress(data)));
    projected.insert("printRemainTime".to_string(), Value::from(time_left(data)));

    projected
}

fn project_wifi_box(data: &RawStatus, now: DateTime<Local>) -> ProjectedStatus {
    let mut projected = passthrough(data, WIFI_BOX_KEYS);

    projected.insert("state".to_string(), Value::from(box_state(data)));
    projected.insert("err".to_string(), Value::from(yes_no(data, "err")));
    projected.insert(
        "upgradeStatus".to_string(),
        Value::from(yes_no(data, "upgradeStatus")),
    );
    projected.insert(
        "completionTime".to_string(),
        Value::from(completion_time(data, now)),
    );
    projected.insert(
        "printJobTime".to_string(),
        Value::from(job_duration(data, "printJobTime")),
    );
    projected.insert(
        "printLeftTime".to_string(),
        Value::from(job_duration(data, "printLeftTime")),
    );

    projected
}

/// Fields without a dedicated rule keep their raw value; expected fields
/// the printer did not report project as "Unknown".
fn passthrough(data: &RawStatus, keys: &[&str]) -> ProjectedStatus {
    let mut projected: ProjectedStatus = data
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for &key in keys {
        projected
            .entry(key.to_string())
            .or_insert_with(|| Value::from("Unknown"));
    }

    projected
}

fn friendly_status(data: &RawStatus) -> &'static str {
    match data.get("printStatus").and_then(Value::as_str) {
        Some("PRINT_STOP") => "Paused/Stopped",
        Some("PRINT_PROCESSING") => "Printing",
        Some("PRINT_GENERAL") => "Online",
        Some("PRINT_COMPLETE") => "Completed",
        _ => "Offline",
    }
}

fn progress(data: &RawStatus) -> f64 {
    let current = number(data.get("curSliceLayer")).unwrap_or(0.0);
    let total = number(data.get("sliceLayerCount")).unwrap_or(0.0);

    if total == 0.0 {
        return 0.0;
    }

    (current / total * 100.0 * 100.0).round() / 100.0
}

fn time_left(data: &RawStatus) -> String {
    if let Some(Value::String(raw)) = data.get("printRemainTime") {
        if !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit()) {
            if let Ok(seconds) = raw.parse() {
                return format_duration(seconds);
            }
        }

        info!("received invalid time left {:?}", raw);
    }

    NOT_AVAILABLE.to_string()
}

fn box_state(data: &RawStatus) -> &'static str {
    if integer(data.get("connect")) == Some(2) {
        return "Offline";
    }

    match integer(data.get("state")) {
        Some(1) => "Printing",
        Some(2) => "Idle",
        Some(4) => "Error",
        _ => "Unable to parse status",
    }
}

fn yes_no(data: &RawStatus, key: &str) -> &'static str {
    match integer(data.get(key)) {
        Some(0) | None => "No",
        Some(_) => "Yes",
    }
}

fn completion_time(data: &RawStatus, now: DateTime<Local>) -> String {
    let left = seconds_field(data, "printLeftTime");
    let completion = now + Duration::seconds(left);

    completion.format("%m-%d-%Y %H:%M").to_string()
}

fn job_duration(data: &RawStatus, key: &str) -> String {
    format_duration(seconds_field(data, key).max(0) as u64)
}

fn seconds_field(data: &RawStatus, key: &str) -> i64 {
    let Some(value) = data.get(key) else { return 0 };

    match integer(Some(value)) {
        Some(seconds) => seconds,
        None => {
            warn!("unexpected {} value {}, treating as 0", key, value);
            0
        }
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(string) => string.parse().ok(),
        _ => None,
    }
}

fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(string) => string.parse().ok(),
        _ => None,
    }
}

/// Renders seconds as `H:MM:SS`, with a day count past 24 hours
/// (`1 day, 2:03:04`).
fn format_duration(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3_600;
    let minutes = seconds % 3_600 / 60;
    let seconds = seconds % 60;

    match days {
        0 => format!("{}:{:02}:{:02}", hours, minutes, seconds),
        1 => format!("1 day, {}:{:02}:{:02}", hours, minutes, seconds),
        days => format!("{} days, {}:{:02}:{:02}", days, hours, minutes, seconds),
    }
}
