use std::fmt;
use std::str::FromStr;

use serde_json::{Number, Value as JsonValue};

use crate::engine::errors::FileError;

/// Physical type of a stored column.
///
/// In the metadata block a type is written as a JSON sample value of that
/// type (`false`, `0`, `0.0`, `""`), which is the tag form existing files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Bool,
    Int,
    Float,
    Text,
}

impl ColumnType {
    pub const ALL: [ColumnType; 4] = [
        ColumnType::Bool,
        ColumnType::Int,
        ColumnType::Float,
        ColumnType::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Bool => "bool",
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
        }
    }

    /// Bytes per value for fixed-width types, `None` for text.
    pub fn width(&self) -> Option<usize> {
        match self {
            ColumnType::Bool => Some(1),
            ColumnType::Int | ColumnType::Float => Some(4),
            ColumnType::Text => None,
        }
    }

    pub fn has_stats(&self) -> bool {
        !matches!(self, ColumnType::Text)
    }

    pub fn to_tag(&self) -> JsonValue {
        match self {
            ColumnType::Bool => JsonValue::Bool(false),
            ColumnType::Int => JsonValue::Number(Number::from(0)),
            // 0.0 is always representable
            ColumnType::Float => Number::from_f64(0.0)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ColumnType::Text => JsonValue::String(String::new()),
        }
    }

    pub fn from_tag(tag: &JsonValue) -> Result<Self, FileError> {
        match tag {
            JsonValue::Bool(_) => Ok(ColumnType::Bool),
            JsonValue::Number(n) if n.is_i64() || n.is_u64() => Ok(ColumnType::Int),
            JsonValue::Number(_) => Ok(ColumnType::Float),
            JsonValue::String(_) => Ok(ColumnType::Text),
            other => Err(FileError::UnsupportedType(format!("type tag {other}"))),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Ok(ColumnType::Bool),
            "int" | "integer" | "i32" => Ok(ColumnType::Int),
            "float" | "f32" => Ok(ColumnType::Float),
            "text" | "str" | "string" => Ok(ColumnType::Text),
            _ => Err(FileError::UnsupportedType(s.to_string())),
        }
    }
}
