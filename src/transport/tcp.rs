use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Default timeout for writing one frame (30 seconds).
const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum frame size (64 KiB). A READY with a full fleet is a few hundred bytes.
const MAX_MESSAGE_SIZE: u32 = 64 * 1024;

/// Length-prefixed bincode frames over a TCP stream.
///
/// Receives never time out: a player may think about a move as long as
/// they like. A closed or reset stream surfaces as a `recv` error.
pub struct TcpTransport {
    stream: TcpStream,
    send_timeout: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            send_timeout: DEFAULT_SEND_TIMEOUT,
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }

    pub fn with_config(stream: TcpStream, send_timeout: Duration, max_message_size: u32) -> Self {
        Self {
            stream,
            send_timeout,
            max_message_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn map_io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe => {
            anyhow::anyhow!("Connection closed by peer")
        }
        ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data = bincode::serialize(&msg)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
        if data.len() as u64 > self.max_message_size as u64 {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                data.len(),
                self.max_message_size
            ));
        }

        let send_timeout = self.send_timeout;
        let stream = &mut self.stream;
        let send_op = async move {
            let len = (data.len() as u32).to_be_bytes();
            stream.write_all(&len).await.map_err(map_io_error)?;
            stream.write_all(&data).await.map_err(map_io_error)?;
            stream.flush().await.map_err(map_io_error)?;
            anyhow::Ok(())
        };

        timeout(send_timeout, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", send_timeout))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let mut len_buf = [0u8; 4];
        self.stream
            .read_exact(&mut len_buf)
            .await
            .map_err(map_io_error)?;

        let len = u32::from_be_bytes(len_buf);
        if len == 0 {
            return Err(anyhow::anyhow!("Invalid message length: 0"));
        }
        if len > self.max_message_size {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                len,
                self.max_message_size
            ));
        }

        let mut buf = vec![0u8; len as usize];
        self.stream.read_exact(&mut buf).await.map_err(map_io_error)?;

        bincode::deserialize(&buf).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
    }
}
