pub mod codec;
pub mod column_values;
pub mod compression;
pub mod format;
