//! Async bounded copy with cooperative cancellation.
//! The token is checked before every read and every write; an operation already
//! awaiting is allowed to finish.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::errors::{DirexError, Result};

use super::{DEFAULT_BUFFER_SIZE, next_chunk};

/// Async [`copy_at_most`](super::copy_at_most) with the default buffer.
pub async fn copy_at_most_async<R, W>(
    source: &mut R,
    destination: &mut W,
    maximum_bytes: u64,
    cancel: &CancelToken,
) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    copy_at_most_async_with_buffer(source, destination, maximum_bytes, DEFAULT_BUFFER_SIZE, cancel)
        .await
}

pub async fn copy_at_most_async_with_buffer<R, W>(
    source: &mut R,
    destination: &mut W,
    maximum_bytes: u64,
    buffer_size: usize,
    cancel: &CancelToken,
) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    if buffer_size == 0 {
        return Err(DirexError::InvalidBufferSize);
    }
    let mut buffer = vec![0u8; buffer_size];
    let mut copied: u64 = 0;

    while copied < maximum_bytes {
        cancel.check().inspect_err(|_| debug!(copied, "Bounded copy cancelled before read"))?;
        let want = next_chunk(buffer_size, maximum_bytes - copied);
        let read = source
            .read(&mut buffer[..want])
            .await
            .map_err(|source| DirexError::Stream { op: "read source", source })?;
        if read == 0 {
            break;
        }
        let to_copy = next_chunk(read, maximum_bytes - copied);
        cancel.check().inspect_err(|_| debug!(copied, "Bounded copy cancelled before write"))?;
        destination
            .write_all(&buffer[..to_copy])
            .await
            .map_err(|source| DirexError::Stream { op: "write destination", source })?;
        copied += to_copy as u64;
    }

    debug!(copied, maximum_bytes, buffer_size, "Bounded async copy finished");
    Ok(copied)
}
