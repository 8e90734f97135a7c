//! Async bounded copy and cancellation.

use direx::{CancelToken, DirexError, copy_at_most_async, copy_at_most_async_with_buffer};
use tokio::io::AsyncReadExt;

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[tokio::test]
async fn copies_exact_prefix() {
    let data = pattern(100);
    let mut src = &data[..];
    let mut dst = Vec::new();

    let n = copy_at_most_async(&mut src, &mut dst, 60, &CancelToken::new()).await.unwrap();
    assert_eq!(n, 60);
    assert_eq!(dst, &data[..60]);
    assert_eq!(src.len(), 40, "40 bytes remain unread");
}

#[tokio::test]
async fn short_source_is_not_an_error() {
    let data = pattern(30);
    let mut src = &data[..];
    let mut dst = Vec::new();
    let n = copy_at_most_async(&mut src, &mut dst, 100, &CancelToken::new()).await.unwrap();
    assert_eq!(n, 30);
    assert_eq!(dst, data);
}

#[tokio::test]
async fn result_is_independent_of_buffer_size() {
    let data = pattern(500);
    for buffer_size in [1, 16, 81920] {
        let mut src = &data[..];
        let mut dst = Vec::new();
        let n = copy_at_most_async_with_buffer(&mut src, &mut dst, 333, buffer_size, &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(n, 333);
        assert_eq!(dst, &data[..333]);
    }
}

#[tokio::test]
async fn pre_cancelled_copy_reports_cancelled() {
    let data = pattern(100);
    let mut src = &data[..];
    let mut dst = Vec::new();
    let token = CancelToken::new();
    token.cancel();

    let err = copy_at_most_async(&mut src, &mut dst, 100, &token).await.unwrap_err();
    assert!(matches!(err, DirexError::Cancelled));
    assert!(dst.is_empty());
    assert_eq!(src.len(), 100, "nothing read after cancellation");
}

#[tokio::test]
async fn works_over_duplex_pipe() {
    let (mut client, mut server) = tokio::io::duplex(64);
    let data = pattern(4096);
    let writer = {
        let data = data.clone();
        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;
            let mut src = &data[..];
            let n = copy_at_most_async_with_buffer(&mut src, &mut client, 1000, 128, &CancelToken::new())
                .await
                .unwrap();
            client.shutdown().await.unwrap();
            n
        })
    };
    let mut received = Vec::new();
    server.read_to_end(&mut received).await.unwrap();
    assert_eq!(writer.await.unwrap(), 1000);
    assert_eq!(received, &data[..1000]);
}
