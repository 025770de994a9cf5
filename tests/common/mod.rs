use coinmint::application::mint::{Mint, MintRegistry};
use coinmint::domain::currency::Currency;
use coinmint::infrastructure::random::NoRareEvents;
use coinmint::infrastructure::serial::SequentialSerialIssuer;
use std::sync::Arc;

/// A registry whose gates always pass and whose serials come from a local
/// counter.
pub fn flawless_registry() -> MintRegistry {
    MintRegistry::new(
        Arc::new(NoRareEvents),
        Arc::new(SequentialSerialIssuer::new()),
    )
}

/// A single mint with always-passing gates.
pub fn flawless_mint(currency: Currency) -> Mint {
    Mint::new(
        currency,
        Arc::new(NoRareEvents),
        Arc::new(SequentialSerialIssuer::new()),
    )
}
