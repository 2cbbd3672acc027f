pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::core::{
    CodecKind, ColumnFileReader, ColumnFileWriter, ColumnStats, ColumnType, ColumnValues,
    FileMetadata, Projection, ResultView, Schema, Selection, StatsMap, Value,
};
pub use engine::errors::{FileError, Result};


#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
