//! Payload ingest: JSON or CSV files into a validated `Payload`.
//!
//! Design goals:
//! - **Strict schema**: every record needs `revenue`, `cost`, and `customers`;
//!   an absent (or null/empty) value is a `MissingField` error
//! - **Type checks only**: values must be numbers (`customers` an integer), but
//!   their range is left to the metric stage, so negative counts pass through
//! - **Pass-through**: unknown keys/columns are kept on the record's `extra` map
//! - **No silent skipping**: the first malformed record fails the whole load
//! - **Separation of concerns**: no metric logic here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use serde_json::{Map, Value};
use tracing::info;

use crate::domain::{DailyRecord, InputFormat, Payload};
use crate::error::{AppError, EXIT_INPUT, MetricsError};

const FIELD_REVENUE: &str = "revenue";
const FIELD_COST: &str = "cost";
const FIELD_CUSTOMERS: &str = "customers";
const FIELD_DATE: &str = "date";

const KNOWN_FIELDS: [&str; 4] = [FIELD_REVENUE, FIELD_COST, FIELD_CUSTOMERS, FIELD_DATE];

/// Load a payload from `path`, resolving `InputFormat::Auto` from the extension.
pub fn load_payload(path: &Path, format: InputFormat) -> Result<Payload, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to open input '{}': {e}", path.display())))?;

    let format = format.resolve(path);
    let payload = match format {
        InputFormat::Csv => parse_csv_payload(file)?,
        InputFormat::Json | InputFormat::Auto => parse_json_payload(file)?,
    };

    info!(
        path = %path.display(),
        format = ?format,
        records = payload.daily_data.len(),
        "loaded payload"
    );
    Ok(payload)
}

/// Parse a JSON document shaped like `{"daily_data": [{...}, ...]}`.
pub fn parse_json_payload<R: Read>(reader: R) -> Result<Payload, AppError> {
    let value: Value =
        serde_json::from_reader(reader).map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid input JSON: {e}")))?;
    payload_from_value(&value)
}

/// Decode an already-parsed JSON value into a payload.
pub fn payload_from_value(value: &Value) -> Result<Payload, AppError> {
    let records = value
        .get("daily_data")
        .ok_or_else(|| AppError::new(EXIT_INPUT, "Input JSON is missing the `daily_data` array."))?
        .as_array()
        .ok_or_else(|| AppError::new(EXIT_INPUT, "`daily_data` must be an array of records."))?;

    let daily_data = records
        .iter()
        .enumerate()
        .map(|(index, record)| record_from_value(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Payload::new(daily_data))
}

/// Decode one JSON record, reporting its position on failure.
pub fn record_from_value(index: usize, value: &Value) -> Result<DailyRecord, MetricsError> {
    let obj = value.as_object().ok_or_else(|| MetricsError::InvalidField {
        index,
        field: "record",
        reason: "expected an object".to_string(),
    })?;

    let revenue = json_number(obj, index, FIELD_REVENUE)?;
    let cost = json_number(obj, index, FIELD_COST)?;
    let customers = json_customers(obj, index)?;
    let date = match obj.get(FIELD_DATE) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(parse_date(index, s)?),
        Some(_) => {
            return Err(MetricsError::InvalidField {
                index,
                field: FIELD_DATE,
                reason: "expected a date string".to_string(),
            });
        }
    };

    let extra = obj
        .iter()
        .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
        .map(|(key, v)| (key.clone(), v.clone()))
        .collect();

    Ok(DailyRecord {
        date,
        revenue,
        cost,
        customers,
        extra,
    })
}

fn json_field<'a>(obj: &'a Map<String, Value>, index: usize, field: &'static str) -> Result<&'a Value, MetricsError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(MetricsError::MissingField { index, field }),
        Some(v) => Ok(v),
    }
}

fn json_number(obj: &Map<String, Value>, index: usize, field: &'static str) -> Result<f64, MetricsError> {
    json_field(obj, index, field)?
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MetricsError::InvalidField {
            index,
            field,
            reason: "expected a number".to_string(),
        })
}

fn json_customers(obj: &Map<String, Value>, index: usize) -> Result<i64, MetricsError> {
    let v = json_field(obj, index, FIELD_CUSTOMERS)?;
    if let Some(n) = v.as_i64() {
        return Ok(n);
    }
    // Integral floats such as `80.0` are accepted.
    match v.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(MetricsError::InvalidField {
            index,
            field: FIELD_CUSTOMERS,
            reason: "expected an integer".to_string(),
        }),
    }
}

/// Parse a CSV with a `revenue,cost,customers[,date]` header (any column order).
pub fn parse_csv_payload<R: Read>(reader: R) -> Result<Payload, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for field in [FIELD_REVENUE, FIELD_COST, FIELD_CUSTOMERS] {
        if !header_map.contains_key(field) {
            return Err(MetricsError::MissingField { index: 0, field }.into());
        }
    }

    let mut daily_data = Vec::new();
    for (index, result) in reader.records().enumerate() {
        // +2: header is line 1, records are 1-based.
        let line = index + 2;
        let record = result.map_err(|e| AppError::new(EXIT_INPUT, format!("CSV parse error on line {line}: {e}")))?;
        daily_data.push(parse_csv_row(index, &record, &header_map)?);
    }

    Ok(Payload::new(daily_data))
}

fn parse_csv_row(
    index: usize,
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<DailyRecord, MetricsError> {
    let revenue = parse_f64(index, FIELD_REVENUE, get_required(index, record, header_map, FIELD_REVENUE)?)?;
    let cost = parse_f64(index, FIELD_COST, get_required(index, record, header_map, FIELD_COST)?)?;

    let raw_customers = get_required(index, record, header_map, FIELD_CUSTOMERS)?;
    let customers = raw_customers
        .parse::<i64>()
        .map_err(|_| MetricsError::InvalidField {
            index,
            field: FIELD_CUSTOMERS,
            reason: format!("expected an integer, got '{raw_customers}'"),
        })?;

    let date = match get_optional(record, header_map, FIELD_DATE) {
        Some(s) => Some(parse_date(index, s)?),
        None => None,
    };

    let extra = header_map
        .keys()
        .filter(|name| !KNOWN_FIELDS.contains(&name.as_str()))
        .filter_map(|name| {
            get_optional(record, header_map, name).map(|v| (name.clone(), Value::String(v.to_string())))
        })
        .collect();

    Ok(DailyRecord {
        date,
        revenue,
        cost,
        customers,
        extra,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn get_required<'a>(
    index: usize,
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    field: &'static str,
) -> Result<&'a str, MetricsError> {
    get_optional(record, header_map, field).ok_or(MetricsError::MissingField { index, field })
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_f64(index: usize, field: &'static str, s: &str) -> Result<f64, MetricsError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MetricsError::InvalidField {
            index,
            field,
            reason: format!("expected a number, got '{s}'"),
        })
}

fn parse_date(index: usize, s: &str) -> Result<NaiveDate, MetricsError> {
    const FMTS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];
    FMTS.iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| MetricsError::InvalidField {
            index,
            field: FIELD_DATE,
            reason: format!("invalid date '{s}', expected YYYY-MM-DD"),
        })
}
