use crate::engine::core::column::format::ColumnType;
use crate::engine::core::file::schema::Schema;

pub struct SchemaFactory {
    columns: Vec<(String, ColumnType)>,
}

impl SchemaFactory {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, name: &str, ty: ColumnType) -> Self {
        self.columns.push((name.to_string(), ty));
        self
    }

    /// `{a: int, b: text, c: float, d: bool}`
    pub fn mixed() -> Schema {
        Self::new()
            .with_column("a", ColumnType::Int)
            .with_column("b", ColumnType::Text)
            .with_column("c", ColumnType::Float)
            .with_column("d", ColumnType::Bool)
            .create()
    }

    pub fn create(self) -> Schema {
        let mut builder = Schema::builder();
        for (name, ty) in self.columns {
            builder = builder.column(name, ty);
        }
        builder.build().expect("valid test schema")
    }
}
