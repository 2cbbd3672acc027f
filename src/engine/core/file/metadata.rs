use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::engine::core::column::format::ColumnType;
use crate::engine::core::file::header::block_len;
use crate::engine::core::file::schema::Schema;
use crate::engine::errors::FileError;

#[derive(Serialize, Deserialize)]
struct RawMetadata {
    columns: Vec<String>,
    types: Vec<JsonValue>,
}

/// Column names and types in block order.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub columns: Vec<String>,
    pub types: Vec<ColumnType>,
}

impl FileMetadata {
    pub fn from_schema(schema: &Schema) -> Self {
        Self {
            columns: schema.names().map(str::to_string).collect(),
            types: schema.types().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.types.iter().copied())
    }

    pub fn type_of(&self, name: &str) -> Option<ColumnType> {
        self.iter().find(|(n, _)| *n == name).map(|(_, t)| t)
    }

    pub fn encode(&self) -> Result<Vec<u8>, FileError> {
        let raw = RawMetadata {
            columns: self.columns.clone(),
            types: self.types.iter().map(ColumnType::to_tag).collect(),
        };
        let bytes = serde_json::to_vec(&raw)?;
        block_len(bytes.len(), "metadata block")?;
        Ok(bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, FileError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| FileError::Format(format!("metadata is not UTF-8: {e}")))?;
        let raw: RawMetadata = serde_json::from_str(text)
            .map_err(|e| FileError::Format(format!("invalid metadata: {e}")))?;

        if raw.columns.len() != raw.types.len() {
            return Err(FileError::Format(format!(
                "metadata lists {} columns but {} types",
                raw.columns.len(),
                raw.types.len()
            )));
        }

        let mut seen = HashSet::with_capacity(raw.columns.len());
        for name in &raw.columns {
            if !seen.insert(name.as_str()) {
                return Err(FileError::Format(format!(
                    "metadata repeats column name {name}"
                )));
            }
        }

        let types = raw
            .types
            .iter()
            .map(ColumnType::from_tag)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            columns: raw.columns,
            types,
        })
    }
}
