//! # Strategy Config Contract
//!
//! Read-only registry of the constants a yield strategy deployment needs:
//! governance multisig, want / LP component / reward token addresses,
//! fees in basis points and the multichain registry address.
//!
//! ## Overview
//!
//! 1. `instantiate` validates every address and fee and stores the config.
//!    Any invalid value fails the whole instantiation.
//! 2. Queries expose each value by name, plus the derived protected token
//!    list and fee list.
//! 3. There are no execute messages; the config never changes.
//!
//! ## Addresses
//!
//! Addresses are EVM style (`0x` + 40 hex digits) and are kept in the casing
//! they were configured with.
//!

pub mod contract;
pub mod error;
pub mod msg;
pub mod query;
pub mod state;
pub mod utils;
#[cfg(test)]
mod testing;
