pub mod column_file_factory;
pub mod rows_factory;
pub mod schema_factory;

pub use column_file_factory::ColumnFileFactory;
pub use rows_factory::RowsFactory;
pub use schema_factory::SchemaFactory;

#[cfg(test)]
mod column_file_factory_test;
