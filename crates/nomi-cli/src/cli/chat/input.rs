//! Line reading for the chat loop.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read one line, without its `\n` or `\r\n` terminator.
///
/// Returns `None` once the stream is exhausted. Invalid UTF-8 is replaced
/// rather than treated as an error, so a stray byte never ends the session.
pub async fn read_line<R: AsyncBufRead + Unpin>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
