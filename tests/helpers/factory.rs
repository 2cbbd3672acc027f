pub use super::factories::{ColumnFileFactory, RowsFactory, SchemaFactory};

pub struct Factory;

impl Factory {
    pub fn schema() -> SchemaFactory {
        SchemaFactory::new()
    }

    pub fn rows() -> RowsFactory {
        RowsFactory::new()
    }

    pub fn column_file() -> ColumnFileFactory {
        ColumnFileFactory::new()
    }
}
