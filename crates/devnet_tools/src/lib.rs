//! Command-line utilities and test helpers for interacting with a
//! Starknet-like devnet: declaring contract classes through the gateway,
//! computing class hashes and smoke-testing a local deploy/invoke/call API.

pub mod artifact;
pub mod config;
pub mod crypto;
pub mod declare;
pub mod devnet_api;
