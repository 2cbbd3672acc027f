use indexmap::IndexMap;

use crate::engine::core::column::format::ColumnType;
use crate::engine::errors::FileError;

/// Ordered, name-unique column list. Row fields line up with this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    columns: IndexMap<String, ColumnType>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Builds a schema from `(name, type name)` pairs; unknown type names are
    /// rejected as unsupported.
    pub fn from_pairs<N, T>(pairs: impl IntoIterator<Item = (N, T)>) -> Result<Self, FileError>
    where
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut schema = Self::new();
        for (name, ty) in pairs {
            schema.push(name, ty.as_ref().parse()?)?;
        }
        Ok(schema)
    }

    pub fn push(&mut self, name: impl Into<String>, ty: ColumnType) -> Result<(), FileError> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(FileError::InvalidInput(format!(
                "duplicate column name: {name}"
            )));
        }
        self.columns.insert(name, ty);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<ColumnType> {
        self.columns.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn types(&self) -> impl Iterator<Item = ColumnType> + '_ {
        self.columns.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.columns.iter().map(|(n, t)| (n.as_str(), *t))
    }
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<(String, ColumnType)>,
}

impl SchemaBuilder {
    pub fn column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.push((name.into(), ty));
        self
    }

    pub fn bool(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnType::Bool)
    }

    pub fn int(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnType::Int)
    }

    pub fn float(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnType::Float)
    }

    pub fn text(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnType::Text)
    }

    pub fn build(self) -> Result<Schema, FileError> {
        let mut schema = Schema::new();
        for (name, ty) in self.columns {
            schema.push(name, ty)?;
        }
        Ok(schema)
    }
}
