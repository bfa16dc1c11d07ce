use std::path::Path;

use serde::Deserialize;

/// A loaded correction task: the series to review plus a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskData {
    pub name: String,
    pub values: Vec<f64>,
}

/// Task payload as emitted by the data pipeline. The series lives under
/// `data`, either directly or wrapped by the task runner as `data.value`.
#[derive(Deserialize)]
struct TaskFile {
    data: TaskSeries,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskSeries {
    Flat(Vec<f64>),
    Wrapped { value: Vec<f64> },
}

/// Load a task file and return the series to review.
pub fn load_task(path: &Path) -> Result<TaskData, String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("task")
        .to_string();

    let text =
        std::fs::read_to_string(path).map_err(|e| format!("Cannot read file: {e}"))?;

    let values = match ext.as_str() {
        "json" => parse_json(&text)?,
        "csv" => parse_csv(&text)?,
        _ => return Err(format!("Unsupported task format: .{ext}")),
    };

    Ok(TaskData { name, values })
}

/// Parse a JSON task payload, accepting both series shapes.
pub fn parse_json(text: &str) -> Result<Vec<f64>, String> {
    let task: TaskFile =
        serde_json::from_str(text).map_err(|e| format!("Invalid task JSON: {e}"))?;
    let values = match task.data {
        TaskSeries::Flat(values) => values,
        TaskSeries::Wrapped { value } => value,
    };
    validate_series(values)
}

/// Parse a raw CSV of values: every field across every row, flattened in
/// order into one series. Non-numeric fields fail the load.
pub fn parse_csv(text: &str) -> Result<Vec<f64>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut values = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("Invalid CSV: {e}"))?;
        for field in record.iter() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let value: f64 = field
                .parse()
                .map_err(|_| format!("Row {}: {field:?} is not a number", row_idx + 1))?;
            values.push(value);
        }
    }
    validate_series(values)
}

fn validate_series(values: Vec<f64>) -> Result<Vec<f64>, String> {
    if values.is_empty() {
        return Err("Task contains no data points".to_string());
    }
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(format!("Task value at position {} is not finite", idx + 1));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flat_series() {
        let values = parse_json(r#"{"data": [1.0, -2.5, 3]}"#).expect("should parse");
        assert_eq!(values, vec![1.0, -2.5, 3.0]);
    }

    #[test]
    fn json_wrapped_series() {
        let values =
            parse_json(r#"{"data": {"value": [0.5, 0.25]}}"#).expect("should parse");
        assert_eq!(values, vec![0.5, 0.25]);
    }

    #[test]
    fn json_without_data_key_fails() {
        assert!(parse_json(r#"{"values": [1, 2]}"#).is_err());
        assert!(parse_json("not json").is_err());
    }

    #[test]
    fn json_empty_series_fails() {
        let err = parse_json(r#"{"data": []}"#).unwrap_err();
        assert!(err.contains("no data points"), "unexpected error: {err}");
    }

    #[test]
    fn csv_flattens_rows_in_order() {
        let values = parse_csv("1.0,2.0\n3.5\n-4,5e1\n").expect("should parse");
        assert_eq!(values, vec![1.0, 2.0, 3.5, -4.0, 50.0]);
    }

    #[test]
    fn csv_skips_blank_fields() {
        let values = parse_csv("1.0,,2.0\n , 3.0\n").expect("should parse");
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn csv_rejects_non_numeric_fields() {
        let err = parse_csv("1.0,zzz\n").unwrap_err();
        assert!(err.contains("zzz"), "unexpected error: {err}");
    }

    #[test]
    fn csv_rejects_empty_input() {
        assert!(parse_csv("").is_err());
        assert!(parse_csv("\n\n").is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = parse_csv("1.0,inf\n").unwrap_err();
        assert!(err.contains("not finite"), "unexpected error: {err}");
    }
}
