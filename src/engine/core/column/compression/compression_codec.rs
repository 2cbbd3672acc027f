use std::fmt;
use std::str::FromStr;

use crate::engine::errors::FileError;

use lz4_flex::block::{
    compress_prepend_size as lz4_compress, decompress_size_prepended as lz4_decompress,
};

pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Opaque, lossless transform applied to every column block.
pub trait CompressionCodec {
    fn name(&self) -> &'static str;
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, FileError>;
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, FileError>;
}

pub struct Lz4Codec;

impl CompressionCodec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, FileError> {
        Ok(lz4_compress(input))
    }
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, FileError> {
        lz4_decompress(input).map_err(|e| FileError::Compression(format!("lz4 decompress: {e}")))
    }
}

pub struct ZstdCodec {
    pub level: i32,
}

impl CompressionCodec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, FileError> {
        zstd::encode_all(input, self.level)
            .map_err(|e| FileError::Compression(format!("zstd compress: {e}")))
    }
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, FileError> {
        zstd::decode_all(input).map_err(|e| FileError::Compression(format!("zstd decompress: {e}")))
    }
}

/// Codec selection; the container carries no codec tag, so readers must use
/// the kind the file was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    Lz4,
    Zstd { level: i32 },
}

impl Default for CodecKind {
    fn default() -> Self {
        CodecKind::Lz4
    }
}

impl CodecKind {
    pub fn from_parts(algorithm: &str, level: i32) -> Result<Self, FileError> {
        match algorithm.parse::<CodecKind>()? {
            CodecKind::Zstd { .. } => Ok(CodecKind::Zstd { level }),
            kind => Ok(kind),
        }
    }

    pub fn codec(&self) -> Box<dyn CompressionCodec> {
        match *self {
            CodecKind::Lz4 => Box::new(Lz4Codec),
            CodecKind::Zstd { level } => Box::new(ZstdCodec { level }),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecKind::Lz4 => f.write_str("lz4"),
            CodecKind::Zstd { level } => write!(f, "zstd(level={level})"),
        }
    }
}

impl FromStr for CodecKind {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lz4" => Ok(CodecKind::Lz4),
            "zstd" => Ok(CodecKind::Zstd {
                level: DEFAULT_ZSTD_LEVEL,
            }),
            other => Err(FileError::InvalidInput(format!(
                "unknown compression algorithm: {other}"
            ))),
        }
    }
}
