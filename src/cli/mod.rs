//! Command-line handling for the `persent` binary.
//!
//! - [`arguments`]: positional repository arguments and flag filtering
//! - [`ranking`]: wires configuration into the ranking pipeline

pub mod arguments;
pub mod ranking;
