use crate::domain::ports::SerialIssuer;
use crate::error::{MintError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Issues serials from a process-local counter.
///
/// The default issuer when no remote endpoint is configured. Serials embed
/// the currency code and variant label so they stay readable in logs.
#[derive(Debug, Default)]
pub struct SequentialSerialIssuer {
    next: AtomicU64,
}

impl SequentialSerialIssuer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SerialIssuer for SequentialSerialIssuer {
    async fn issue(&self, code: &str, variant: &str) -> Result<String> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(format!("{code}-{variant}-{n:08}"))
    }
}

/// Client for a remote issuance service speaking a newline-delimited
/// protocol: the request line is `<code> <variant>`, the reply line is the
/// serial.
#[derive(Debug, Clone)]
pub struct RemoteSerialIssuer {
    endpoint: String,
}

impl RemoteSerialIssuer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SerialIssuer for RemoteSerialIssuer {
    async fn issue(&self, code: &str, variant: &str) -> Result<String> {
        let mut stream = TcpStream::connect(self.endpoint.as_str()).await?;
        stream
            .write_all(format!("{code} {variant}\n").as_bytes())
            .await?;

        let mut reply = String::new();
        let mut reader = BufReader::new(stream);
        reader.read_line(&mut reply).await?;

        let serial = reply.trim();
        if serial.is_empty() {
            return Err(MintError::SerialError(format!(
                "empty reply from {}",
                self.endpoint
            )));
        }
        Ok(serial.to_string())
    }
}

/// Refuses every request. Stands in for an unreachable issuance service in
/// tests of the pipeline's best-effort stamping.
#[derive(Debug, Default, Clone, Copy)]
pub struct RefusingSerialIssuer;

#[async_trait]
impl SerialIssuer for RefusingSerialIssuer {
    async fn issue(&self, code: &str, variant: &str) -> Result<String> {
        Err(MintError::SerialError(format!(
            "issuance refused for {code} {variant}"
        )))
    }
}
