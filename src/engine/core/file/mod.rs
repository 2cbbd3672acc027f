pub mod header;
pub mod metadata;
pub mod reader;
pub mod schema;
pub mod view;
pub mod writer;

pub use metadata::FileMetadata;
pub use reader::{ColumnFileReader, Projection};
pub use schema::{Schema, SchemaBuilder};
pub use view::{ResultView, Selection};
pub use writer::ColumnFileWriter;

#[cfg(test)]
mod metadata_test;
#[cfg(test)]
mod view_test;
