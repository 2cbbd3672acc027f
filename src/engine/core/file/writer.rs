use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::engine::core::column::codec::{ColumnDecoder, ColumnEncoder};
use crate::engine::core::column::column_values::Value;
use crate::engine::core::column::compression::CodecKind;
use crate::engine::core::file::header::{write_block, write_magic};
use crate::engine::core::file::metadata::FileMetadata;
use crate::engine::core::file::schema::Schema;
use crate::engine::core::stats::{ColumnStats, StatsMap, encode_stats};
use crate::engine::errors::FileError;
use crate::shared::config::CONFIG;

/// Writes a whole dataset into a single container file in one pass.
pub struct ColumnFileWriter {
    path: PathBuf,
    codec: CodecKind,
}

impl ColumnFileWriter {
    /// Uses the block codec from the global configuration.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            codec: CONFIG.format.codec_kind(),
        }
    }

    pub fn with_codec(mut self, codec: CodecKind) -> Self {
        self.codec = codec;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `rows` (fields in schema order) and returns the statistics that
    /// were stored in the file. Each call starts from an empty stats map.
    pub fn write<R>(&self, rows: &[R], schema: &Schema) -> Result<StatsMap, FileError>
    where
        R: AsRef<[Value]>,
    {
        self.write_file(rows, schema).inspect_err(|e| e.log_error())
    }

    fn write_file<R>(&self, rows: &[R], schema: &Schema) -> Result<StatsMap, FileError>
    where
        R: AsRef<[Value]>,
    {
        for (idx, row) in rows.iter().enumerate() {
            let width = row.as_ref().len();
            if width != schema.len() {
                return Err(FileError::InvalidInput(format!(
                    "row {idx} has {width} fields, schema has {} columns",
                    schema.len()
                )));
            }
        }

        let metadata = FileMetadata::from_schema(schema).encode()?;
        let codec = self.codec.codec();

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        let mut out = BufWriter::new(file);

        write_magic(&mut out)?;
        write_block(&mut out, &metadata, "metadata block")?;

        let mut stats = StatsMap::new();
        for (idx, (name, ty)) in schema.iter().enumerate() {
            let column = rows.iter().map(move |row| &row.as_ref()[idx]);

            let encoded = ColumnEncoder::encode(name, ty, column)?;
            let compressed = codec.compress(&encoded)?;
            write_block(&mut out, &compressed, name)?;

            debug!(
                target: "column_file_writer::write",
                column = name,
                column_type = %ty,
                encoded_len = encoded.len(),
                block_len = compressed.len(),
                "Column block written"
            );

            if ty.has_stats() {
                // Stats describe the block contents, not the raw input cells.
                let stored = ColumnDecoder::decode(&encoded, ty)?;
                let column_stats = ColumnStats::from_column(&stored)
                    .map(|s| s.to_map())
                    .unwrap_or_default();
                stats.insert(name.to_string(), column_stats);
            }
        }

        let stats_bytes = encode_stats(&stats)?;
        write_block(&mut out, &stats_bytes, "stats block")?;

        out.flush()?;
        let file = out.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;

        info!(
            target: "column_file_writer::write",
            path = %self.path.display(),
            rows = rows.len(),
            columns = schema.len(),
            codec = %self.codec,
            "Column file written"
        );

        Ok(stats)
    }
}
