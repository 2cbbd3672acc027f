use crate::engine::core::column::column_values::Value;
use crate::engine::core::column::format::ColumnType;
use crate::engine::core::file::schema::Schema;

pub struct RowsFactory {
    rows: Vec<Vec<Value>>,
}

impl RowsFactory {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(row);
        self
    }

    /// Rows matching [`super::SchemaFactory::mixed`].
    pub fn mixed() -> Vec<Vec<Value>> {
        Self::new()
            .with_row(vec![1.into(), "a".into(), 0.0f32.into(), true.into()])
            .with_row(vec![3.into(), "f".into(), 1.0f32.into(), false.into()])
            .create()
    }

    /// Deterministic rows for any schema.
    pub fn generated(schema: &Schema, count: usize) -> Vec<Vec<Value>> {
        (0..count)
            .map(|i| {
                schema
                    .types()
                    .map(|ty| match ty {
                        ColumnType::Bool => Value::Bool(i % 3 == 0),
                        ColumnType::Int => Value::Int(i as i32 * 7 - 50),
                        ColumnType::Float => Value::Float(i as f32 * 0.5),
                        ColumnType::Text => Value::Text(format!("row-{i}")),
                    })
                    .collect()
            })
            .collect()
    }

    pub fn create(self) -> Vec<Vec<Value>> {
        self.rows
    }
}
