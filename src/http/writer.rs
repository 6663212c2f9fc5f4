use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Byte sent after every body, beyond its advertised length.
const BODY_TERMINATOR: u8 = 0;

fn serialize_response(resp: &Response) -> BytesMut {
    let mut buf = BytesMut::with_capacity(resp.header.len() + resp.body.len() + 1);

    buf.put_slice(resp.header.as_bytes());
    buf.put_slice(&resp.body);
    buf.put_u8(BODY_TERMINATOR);

    buf
}

/// Writes a serialized response: header, then body, then the terminator byte.
pub struct ResponseWriter {
    buffer: BytesMut,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Total number of bytes this writer puts on the wire.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
