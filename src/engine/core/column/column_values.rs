use serde_json::Value as JsonValue;

use crate::engine::core::column::format::ColumnType;

/// One input cell handed to the writer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Float(f32),
    Text(String),
}

impl Value {
    /// Null and empty text count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Bool(b) => Some(*b as i32),
            Value::Text(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f32),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => s.trim().parse::<f32>().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(i) => Some(*i != 0),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(num) => match num.as_i64() {
                Some(i) if i32::try_from(i).is_ok() => Value::Int(i as i32),
                _ => num
                    .as_f64()
                    .map(|f| Value::Float(f as f32))
                    .unwrap_or_else(|| Value::Text(num.to_string())),
            },
            JsonValue::String(s) => Value::Text(s),
            other @ (JsonValue::Array(_) | JsonValue::Object(_)) => Value::Text(other.to_string()),
        }
    }
}

/// A fully decoded column, values in stored order.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Bool(Vec<bool>),
    Int(Vec<i32>),
    Float(Vec<f32>),
    Text(Vec<String>),
}

impl ColumnValues {
    pub fn empty(ty: ColumnType) -> Self {
        match ty {
            ColumnType::Bool => ColumnValues::Bool(Vec::new()),
            ColumnType::Int => ColumnValues::Int(Vec::new()),
            ColumnType::Float => ColumnValues::Float(Vec::new()),
            ColumnType::Text => ColumnValues::Text(Vec::new()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnValues::Bool(_) => ColumnType::Bool,
            ColumnValues::Int(_) => ColumnType::Int,
            ColumnValues::Float(_) => ColumnType::Float,
            ColumnValues::Text(_) => ColumnType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Bool(v) => v.len(),
            ColumnValues::Int(v) => v.len(),
            ColumnValues::Float(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_bool_at(&self, idx: usize) -> Option<bool> {
        match self {
            ColumnValues::Bool(v) => v.get(idx).copied(),
            _ => None,
        }
    }

    pub fn get_i32_at(&self, idx: usize) -> Option<i32> {
        match self {
            ColumnValues::Int(v) => v.get(idx).copied(),
            _ => None,
        }
    }

    pub fn get_f32_at(&self, idx: usize) -> Option<f32> {
        match self {
            ColumnValues::Float(v) => v.get(idx).copied(),
            _ => None,
        }
    }

    pub fn get_str_at(&self, idx: usize) -> Option<&str> {
        match self {
            ColumnValues::Text(v) => v.get(idx).map(String::as_str),
            _ => None,
        }
    }

    /// Cell at `idx` lifted back into an input `Value`.
    pub fn value_at(&self, idx: usize) -> Option<Value> {
        match self {
            ColumnValues::Bool(v) => v.get(idx).map(|b| Value::Bool(*b)),
            ColumnValues::Int(v) => v.get(idx).map(|i| Value::Int(*i)),
            ColumnValues::Float(v) => v.get(idx).map(|f| Value::Float(*f)),
            ColumnValues::Text(v) => v.get(idx).map(|s| Value::Text(s.clone())),
        }
    }
}
