//! Application layer containing the production pipeline orchestration.
//!
//! This module defines the [`mint::Mint`] driving each coin through its
//! manufacturing steps, and the [`mint::MintRegistry`] mapping currencies
//! to their mints.

pub mod mint;
