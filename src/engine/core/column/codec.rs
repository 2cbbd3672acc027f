use crate::engine::core::column::column_values::{ColumnValues, Value};
use crate::engine::core::column::format::ColumnType;
use crate::engine::errors::FileError;

const NUL: u8 = 0;

/// Turns one column of input cells into its fixed on-disk encoding.
pub struct ColumnEncoder;

impl ColumnEncoder {
    pub fn encode<'a, I>(column: &str, ty: ColumnType, values: I) -> Result<Vec<u8>, FileError>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        let mut buffer = Vec::with_capacity(lower * ty.width().unwrap_or(8));

        for (row, value) in values.enumerate() {
            match ty {
                ColumnType::Bool => {
                    let b = value
                        .as_bool()
                        .ok_or_else(|| mismatch(column, row, ty, value))?;
                    buffer.push(b as u8);
                }
                ColumnType::Int => {
                    let n = if value.is_missing() {
                        0
                    } else {
                        value
                            .as_i32()
                            .ok_or_else(|| mismatch(column, row, ty, value))?
                    };
                    buffer.extend_from_slice(&n.to_le_bytes());
                }
                ColumnType::Float => {
                    let f = if value.is_missing() {
                        0.0f32
                    } else {
                        value
                            .as_f32()
                            .ok_or_else(|| mismatch(column, row, ty, value))?
                    };
                    buffer.extend_from_slice(&f.to_le_bytes());
                }
                ColumnType::Text => {
                    let s = value
                        .as_str()
                        .ok_or_else(|| mismatch(column, row, ty, value))?;
                    if s.as_bytes().contains(&NUL) {
                        return Err(FileError::InvalidInput(format!(
                            "column {column} row {row}: text contains a NUL byte"
                        )));
                    }
                    buffer.extend_from_slice(s.as_bytes());
                    buffer.push(NUL);
                }
            }
        }

        Ok(buffer)
    }
}

fn mismatch(column: &str, row: usize, ty: ColumnType, value: &Value) -> FileError {
    FileError::InvalidInput(format!(
        "column {column} row {row}: cannot store {value:?} as {ty}"
    ))
}

/// Inverse of [`ColumnEncoder`] for a decompressed block.
pub struct ColumnDecoder;

impl ColumnDecoder {
    pub fn decode(bytes: &[u8], ty: ColumnType) -> Result<ColumnValues, FileError> {
        if let Some(width) = ty.width() {
            if bytes.len() % width != 0 {
                return Err(FileError::Format(format!(
                    "{ty} block of {} bytes is not a multiple of {width}",
                    bytes.len()
                )));
            }
        }

        let values = match ty {
            ColumnType::Bool => ColumnValues::Bool(bytes.iter().map(|b| *b != 0).collect()),
            ColumnType::Int => ColumnValues::Int(
                bytes
                    .chunks_exact(4)
                    .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect(),
            ),
            ColumnType::Float => ColumnValues::Float(
                bytes
                    .chunks_exact(4)
                    .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect(),
            ),
            ColumnType::Text => ColumnValues::Text(Self::decode_text(bytes)?),
        };
        Ok(values)
    }

    fn decode_text(bytes: &[u8]) -> Result<Vec<String>, FileError> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        let Some((&NUL, body)) = bytes.split_last() else {
            return Err(FileError::Format(
                "text block is missing its final NUL terminator".into(),
            ));
        };
        body.split(|b| *b == NUL)
            .map(|segment| {
                String::from_utf8(segment.to_vec())
                    .map_err(|e| FileError::Format(format!("text block is not UTF-8: {e}")))
            })
            .collect()
    }
}
