//! Blocking bounded copy.
//!
//! Each read asks for no more than the bytes still owed, so the source is never
//! consumed past `maximum_bytes`; end-of-source before the cap is a normal stop.

use std::io::{self, Read, Write};
use tracing::debug;

use crate::errors::{DirexError, Result};

use super::{DEFAULT_BUFFER_SIZE, next_chunk};

/// Copy at most `maximum_bytes` from `source` to `destination` with the default buffer.
/// Returns the number of bytes copied.
pub fn copy_at_most<R, W>(source: &mut R, destination: &mut W, maximum_bytes: u64) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    copy_at_most_with_buffer(source, destination, maximum_bytes, DEFAULT_BUFFER_SIZE)
}

/// Copy at most `maximum_bytes` using one reusable buffer of `buffer_size` bytes.
pub fn copy_at_most_with_buffer<R, W>(
    source: &mut R,
    destination: &mut W,
    maximum_bytes: u64,
    buffer_size: usize,
) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if buffer_size == 0 {
        return Err(DirexError::InvalidBufferSize);
    }
    let mut buffer = vec![0u8; buffer_size];
    let mut copied: u64 = 0;

    while copied < maximum_bytes {
        let want = next_chunk(buffer_size, maximum_bytes - copied);
        let read = match source.read(&mut buffer[..want]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(DirexError::Stream { op: "read source", source }),
        };
        let to_copy = next_chunk(read, maximum_bytes - copied);
        destination
            .write_all(&buffer[..to_copy])
            .map_err(|source| DirexError::Stream { op: "write destination", source })?;
        copied += to_copy as u64;
    }

    debug!(copied, maximum_bytes, buffer_size, "Bounded copy finished");
    Ok(copied)
}
