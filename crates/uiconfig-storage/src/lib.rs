#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultStorageClient is meant to be used through the KeyValueStorePort
// trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultStorageClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, StorageClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use httpmock as _;
#[cfg(test)]
use tokio_test as _;
