use std::io::{BufReader, Read, Seek, Write};

use crate::engine::errors::FileError;

pub const MAGIC: [u8; 4] = *b"CCF6";
pub const LEN_PREFIX: usize = 4;

pub fn write_magic<W: Write>(mut writer: W) -> Result<(), FileError> {
    writer.write_all(&MAGIC)?;
    Ok(())
}

pub fn read_and_validate_magic<R: Read>(mut reader: R) -> Result<(), FileError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(FileError::Format(format!(
            "invalid magic {:?}, expected {:?}",
            String::from_utf8_lossy(&magic),
            String::from_utf8_lossy(&MAGIC)
        )));
    }
    Ok(())
}

/// Length of a block as stored in its 4-byte prefix.
pub fn block_len(len: usize, what: &str) -> Result<u32, FileError> {
    u32::try_from(len).map_err(|_| {
        FileError::Format(format!(
            "{what} of {len} bytes does not fit a 4-byte length prefix"
        ))
    })
}

/// Writes `[u32 len][bytes]`, returning the number of bytes written.
pub fn write_block<W: Write>(mut writer: W, bytes: &[u8], what: &str) -> Result<usize, FileError> {
    let len = block_len(bytes.len(), what)?;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(bytes)?;
    Ok(LEN_PREFIX + bytes.len())
}

pub fn read_len<R: Read>(mut reader: R) -> Result<u32, FileError> {
    let mut buf4 = [0u8; 4];
    reader.read_exact(&mut buf4)?;
    Ok(u32::from_le_bytes(buf4))
}

pub fn read_payload<R: Read>(reader: R, len: u32) -> Result<Vec<u8>, FileError> {
    let mut payload = Vec::new();
    // take() keeps a bogus length from pre-allocating more than the file holds
    let read = reader.take(len as u64).read_to_end(&mut payload)?;
    if read != len as usize {
        return Err(FileError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("block declares {len} bytes but only {read} remain"),
        )));
    }
    Ok(payload)
}

pub fn read_block<R: Read>(mut reader: R) -> Result<Vec<u8>, FileError> {
    let len = read_len(&mut reader)?;
    read_payload(reader, len)
}

/// Moves past a payload without reading it, keeping the buffered bytes when
/// the target is already buffered. Seeking beyond the end is allowed by the
/// OS; the next read then reports the short file.
pub fn skip_payload<R: Read + Seek>(reader: &mut BufReader<R>, len: u32) -> Result<(), FileError> {
    reader.seek_relative(len as i64)?;
    Ok(())
}
