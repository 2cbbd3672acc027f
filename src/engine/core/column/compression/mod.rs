pub mod compression_codec;

pub use compression_codec::{CodecKind, CompressionCodec, Lz4Codec, ZstdCodec};
