use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::engine::core::column::codec::ColumnDecoder;
use crate::engine::core::column::compression::CodecKind;
use crate::engine::core::file::header::{
    read_and_validate_magic, read_block, read_len, read_payload, skip_payload,
};
use crate::engine::core::file::metadata::FileMetadata;
use crate::engine::core::file::view::ResultView;
use crate::engine::core::stats::decode_stats;
use crate::engine::errors::FileError;
use crate::shared::config::CONFIG;

/// Columns to decode during a read. An empty list means every column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    All,
    Columns(Vec<String>),
}

impl Projection {
    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Columns(names.into_iter().map(Into::into).collect())
    }

    fn requested<'a>(&'a self, meta: &'a FileMetadata) -> Result<HashSet<&'a str>, FileError> {
        match self {
            Projection::Columns(names) if !names.is_empty() => names
                .iter()
                .map(|name| {
                    if meta.type_of(name).is_some() {
                        Ok(name.as_str())
                    } else {
                        Err(FileError::UnknownColumn(name.clone()))
                    }
                })
                .collect(),
            _ => Ok(meta.columns.iter().map(String::as_str).collect()),
        }
    }
}

/// Reads a container file in a single forward pass.
pub struct ColumnFileReader {
    path: PathBuf,
    codec: CodecKind,
}

impl ColumnFileReader {
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

    pub fn read_all(&self) -> Result<ResultView, FileError> {
        self.read(&Projection::All)
    }

    /// Validates the header and returns the metadata without touching any block.
    pub fn read_metadata(&self) -> Result<FileMetadata, FileError> {
        let mut input = BufReader::new(File::open(&self.path)?);
        read_and_validate_magic(&mut input)?;
        FileMetadata::decode(&read_block(&mut input)?)
    }

    pub fn read(&self, projection: &Projection) -> Result<ResultView, FileError> {
        self.read_file(projection).inspect_err(|e| e.log_error())
    }

    fn read_file(&self, projection: &Projection) -> Result<ResultView, FileError> {
        let mut input = BufReader::new(File::open(&self.path)?);

        read_and_validate_magic(&mut input)?;
        let meta = FileMetadata::decode(&read_block(&mut input)?)?;
        let requested = projection.requested(&meta)?;
        let codec = self.codec.codec();

        // Blocks carry no name: position in the metadata is the only link.
        let mut frame = IndexMap::with_capacity(requested.len());
        for (name, ty) in meta.iter() {
            let len = read_len(&mut input)?;
            if !requested.contains(name) {
                skip_payload(&mut input, len)?;
                debug!(
                    target: "column_file_reader::read",
                    column = name,
                    block_len = len,
                    "Column block skipped"
                );
                continue;
            }

            let compressed = read_payload(&mut input, len)?;
            let encoded = codec.decompress(&compressed)?;
            let values = ColumnDecoder::decode(&encoded, ty)?;
            debug!(
                target: "column_file_reader::read",
                column = name,
                column_type = %ty,
                block_len = len,
                rows = values.len(),
                "Column block decoded"
            );
            frame.insert(name.to_string(), values);
        }

        let stats = decode_stats(&read_block(&mut input)?)?;

        info!(
            target: "column_file_reader::read",
            path = %self.path.display(),
            columns = frame.len(),
            stored_columns = meta.len(),
            "Column file read"
        );

        Ok(ResultView::new(frame, stats))
    }
}
