use std::path::PathBuf;

use tempfile::TempDir;

use crate::engine::core::column::column_values::Value;
use crate::engine::core::column::compression::CodecKind;
use crate::engine::core::file::reader::ColumnFileReader;
use crate::engine::core::file::schema::Schema;
use crate::engine::core::file::writer::ColumnFileWriter;
use crate::engine::core::stats::StatsMap;

use super::{RowsFactory, SchemaFactory};

/// Writes a container file into an isolated temp dir.
/// The dir is removed when the factory is dropped.
pub struct ColumnFileFactory {
    schema: Schema,
    rows: Vec<Vec<Value>>,
    codec: CodecKind,
    file_name: String,
    _tempdir: TempDir, // keep it alive
}

impl ColumnFileFactory {
    pub fn new() -> Self {
        Self {
            schema: SchemaFactory::mixed(),
            rows: RowsFactory::mixed(),
            codec: CodecKind::Lz4,
            file_name: "test.cestus".to_string(),
            _tempdir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_rows(mut self, rows: Vec<Vec<Value>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_codec(mut self, codec: CodecKind) -> Self {
        self.codec = codec;
        self
    }

    pub fn path(&self) -> PathBuf {
        self._tempdir.path().join(&self.file_name)
    }

    pub fn writer(&self) -> ColumnFileWriter {
        ColumnFileWriter::new(self.path()).with_codec(self.codec)
    }

    pub fn reader(&self) -> ColumnFileReader {
        ColumnFileReader::new(self.path()).with_codec(self.codec)
    }

    /// Writes the file and returns the stats the writer reported.
    pub fn write(&self) -> StatsMap {
        self.writer()
            .write(&self.rows, &self.schema)
            .expect("write test file")
    }

    pub fn bytes(&self) -> Vec<u8> {
        std::fs::read(self.path()).expect("read test file")
    }
}
