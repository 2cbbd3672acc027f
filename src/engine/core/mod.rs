pub mod column;
pub mod file;
pub mod stats;

pub use column::column_values::{ColumnValues, Value};
pub use column::compression::CodecKind;
pub use column::format::ColumnType;
pub use file::{
    ColumnFileReader, ColumnFileWriter, FileMetadata, Projection, ResultView, Schema, Selection,
};
pub use stats::{ColumnStats, StatsMap};
