//! Output rendering for log records
//!
//! Two layouts:
//! - Human: `LEVEL <timestamp> <message> k1=v1 k2=v2 [<file>:<line>]`
//! - Json: one self-contained object per record, newline-delimited, with
//!   fixed keys `level`, `time`, `msg` plus the record's field keys and an
//!   optional `caller` key

use super::record::LogRecord;
use super::timestamp::TimestampFormat;
use std::str::FromStr;

/// Keys owned by the JSON layout; colliding user fields are prefixed with
/// `fields.` so they never shadow the record envelope.
const RESERVED_KEYS: [&str; 4] = ["level", "time", "msg", "caller"];

/// Rendering mode for emitted records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable single-line layout (default)
    #[default]
    Human,

    /// Newline-delimited JSON for machine processing
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: '{}'", s)),
        }
    }
}

impl OutputFormat {
    /// Render a record according to this format, without the trailing newline.
    pub fn render(&self, record: &LogRecord, timestamp: &TimestampFormat, color: bool) -> String {
        match self {
            OutputFormat::Human => render_human(record, timestamp, color),
            OutputFormat::Json => render_json(record, timestamp),
        }
    }
}

fn level_marker(record: &LogRecord, color: bool) -> String {
    let marker = format!("{:5}", record.severity.to_str());
    #[cfg(feature = "console")]
    if color {
        use colored::Colorize;
        return marker.color(record.severity.color_code()).to_string();
    }
    let _ = color;
    marker
}

fn render_human(record: &LogRecord, timestamp: &TimestampFormat, color: bool) -> String {
    let mut out = format!(
        "{} {} {}",
        level_marker(record, color),
        timestamp.format(&record.timestamp),
        record.message
    );

    if !record.fields.is_empty() {
        out.push(' ');
        out.push_str(&record.fields.format_fields());
    }

    if let Some(caller) = record.caller {
        out.push_str(&format!(" [{}]", caller));
    }

    out
}

fn render_json(record: &LogRecord, timestamp: &TimestampFormat) -> String {
    let mut obj = serde_json::Map::new();

    obj.insert(
        "level".to_string(),
        serde_json::Value::String(record.severity.to_str().to_string()),
    );
    obj.insert("time".to_string(), json_time(record, timestamp));
    obj.insert(
        "msg".to_string(),
        serde_json::Value::String(record.message.clone()),
    );

    for field in record.fields.iter() {
        let key = if RESERVED_KEYS.contains(&field.key.as_str()) {
            format!("fields.{}", field.key)
        } else {
            field.key.clone()
        };
        obj.insert(key, field.value.to_json_value());
    }

    if let Some(caller) = record.caller {
        obj.insert(
            "caller".to_string(),
            serde_json::Value::String(caller.to_string()),
        );
    }

    serde_json::to_string(&serde_json::Value::Object(obj)).unwrap_or_default()
}

/// Numeric timestamp formats stay numbers in JSON output.
fn json_time(record: &LogRecord, timestamp: &TimestampFormat) -> serde_json::Value {
    match timestamp {
        TimestampFormat::Unix => serde_json::Value::Number(record.timestamp.timestamp().into()),
        TimestampFormat::UnixMillis => {
            serde_json::Value::Number(record.timestamp.timestamp_millis().into())
        }
        _ => serde_json::Value::String(timestamp.format(&record.timestamp)),
    }
}
