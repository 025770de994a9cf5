use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of the rare-event decisions behind the quality gates.
///
/// Implementations must be swappable with a deterministic source so tests
/// can force or forbid failures.
pub trait Randomizer: Send + Sync {
    /// True when a one-in-`odds` rare event occurs now.
    fn one_in(&self, odds: u32) -> bool;
}

/// Remote serial-number issuance service.
///
/// Failures are non-fatal to the production pipeline: the caller logs and
/// continues without a serial.
#[async_trait]
pub trait SerialIssuer: Send + Sync {
    /// Returns a unique serial for a coin, keyed by currency code and
    /// variant label.
    async fn issue(&self, code: &str, variant: &str) -> Result<String>;
}

pub type SharedRandomizer = Arc<dyn Randomizer>;
pub type SharedSerialIssuer = Arc<dyn SerialIssuer>;
