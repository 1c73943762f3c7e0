//! Per-column profile of raw metadata rows.

use super::MetadataRow;
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Distinct-value count, or a note when values cannot be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UniqueCount {
    /// Number of distinct non-null values
    Count(usize),
    /// The column holds arrays or objects
    Unhashable,
}

impl fmt::Display for UniqueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Unhashable => f.write_str("Contains unhashable types, unique count skipped"),
        }
    }
}

/// Profile of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Column (JSON key) name
    pub column: String,
    /// Inferred type: `bool`, `int64`, `float64` or `object`
    pub dtype: &'static str,
    /// Rows where the key is missing or `null`
    pub null_count: usize,
    /// Rows holding `""`
    pub empty_string_count: usize,
    /// Rows holding `[]`
    pub empty_list_count: usize,
    /// Distinct values
    pub unique: UniqueCount,
}

#[derive(Default)]
struct ColumnStats<'a> {
    present: Vec<&'a Value>,
}

/// Profile every column seen in `rows`, in first-seen key order.
#[must_use]
pub fn explore_columns(rows: &[MetadataRow]) -> Vec<ColumnSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut columns: HashMap<&str, ColumnStats<'_>> = HashMap::new();

    for row in rows {
        for key in row.keys() {
            let stats = columns.entry(key).or_insert_with(|| {
                order.push(key);
                ColumnStats::default()
            });
            if let Some(value) = row.get(key).filter(|v| !v.is_null()) {
                stats.present.push(value);
            }
        }
    }

    order
        .into_iter()
        .map(|column| {
            let present = columns
                .remove(column)
                .map(|stats| stats.present)
                .unwrap_or_default();
            summarize(column, &present, rows.len())
        })
        .collect()
}

fn summarize(column: &str, present: &[&Value], n_rows: usize) -> ColumnSummary {
    let null_count = n_rows - present.len();
    let empty_string_count = present.iter().filter(|v| v.as_str() == Some("")).count();
    let empty_list_count = present
        .iter()
        .filter(|v| v.as_array().is_some_and(Vec::is_empty))
        .count();

    let unhashable = present.iter().any(|v| v.is_array() || v.is_object());
    let unique = if unhashable {
        UniqueCount::Unhashable
    } else {
        let distinct: HashSet<String> = present.iter().map(|v| v.to_string()).collect();
        UniqueCount::Count(distinct.len())
    };

    ColumnSummary {
        column: column.to_string(),
        dtype: infer_dtype(present, null_count),
        null_count,
        empty_string_count,
        empty_list_count,
        unique,
    }
}

/// Integers with gaps widen to `float64`, as a dataframe column would.
fn infer_dtype(present: &[&Value], null_count: usize) -> &'static str {
    if present.is_empty() {
        return "object";
    }
    if present.iter().all(|v| v.is_boolean()) && null_count == 0 {
        "bool"
    } else if present.iter().all(|v| v.is_i64() || v.is_u64()) {
        if null_count == 0 {
            "int64"
        } else {
            "float64"
        }
    } else if present.iter().all(|v| v.is_number()) {
        "float64"
    } else {
        "object"
    }
}
