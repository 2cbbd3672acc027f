use indexmap::IndexMap;

use crate::engine::core::column::column_values::ColumnValues;
use crate::engine::errors::FileError;

/// Column name to (statistic name to value), in schema order.
pub type StatsMap = IndexMap<String, IndexMap<String, f64>>;

pub const STAT_MIN: &str = "min";
pub const STAT_MAX: &str = "max";
pub const STAT_MEAN: &str = "mean";
pub const STAT_STD: &str = "std";
pub const STAT_MEDIAN: &str = "median";

/// Descriptive statistics over one non-text column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    pub median: f64,
}

impl ColumnStats {
    /// Returns `None` for an empty column. A NaN sample makes every
    /// statistic NaN.
    pub fn compute(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        if samples.iter().any(|v| v.is_nan()) {
            return Some(Self {
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                std: f64::NAN,
                median: f64::NAN,
            });
        }
        let n = samples.len() as f64;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in samples {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        let mean = sum / n;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            min,
            max,
            mean,
            std: variance.sqrt(),
            median,
        })
    }

    /// Statistics over the values as stored in a column block; booleans
    /// count as 0 and 1. Text columns have none.
    pub fn from_column(values: &ColumnValues) -> Option<Self> {
        let samples: Vec<f64> = match values {
            ColumnValues::Bool(v) => v.iter().map(|b| if *b { 1.0 } else { 0.0 }).collect(),
            ColumnValues::Int(v) => v.iter().map(|i| *i as f64).collect(),
            ColumnValues::Float(v) => v.iter().map(|f| *f as f64).collect(),
            ColumnValues::Text(_) => return None,
        };
        Self::compute(&samples)
    }

    /// Non-finite statistics are left out; JSON cannot carry them.
    pub fn to_map(&self) -> IndexMap<String, f64> {
        [
            (STAT_MIN, self.min),
            (STAT_MAX, self.max),
            (STAT_MEAN, self.mean),
            (STAT_STD, self.std),
            (STAT_MEDIAN, self.median),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_finite())
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

pub fn encode_stats(stats: &StatsMap) -> Result<Vec<u8>, FileError> {
    Ok(serde_json::to_vec(stats)?)
}

/// `null` statistics (NaN in older writers) decode as absent.
pub fn decode_stats(bytes: &[u8]) -> Result<StatsMap, FileError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| FileError::Format(format!("stats block is not UTF-8: {e}")))?;
    let raw: IndexMap<String, IndexMap<String, Option<f64>>> = serde_json::from_str(text)
        .map_err(|e| FileError::Format(format!("invalid stats block: {e}")))?;

    Ok(raw
        .into_iter()
        .map(|(column, stats)| {
            let stats = stats
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v)))
                .collect();
            (column, stats)
        })
        .collect())
}
