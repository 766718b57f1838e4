//! Core components of the `etf-snapshot` crate.
//!
//! This module contains the foundational building blocks shared by both sources:
//! - The [`EtfClient`] and its builder.
//! - The primary [`EtfError`] type.
//! - The abbreviated-number normalizer.
//! - Building a source URL from a base and a ticker.
//! - Internal networking helpers.

/// The client (`EtfClient`), builder, and default endpoints.
pub mod client;
/// The primary error type (`EtfError`) for the crate.
pub mod error;
/// Parsing of abbreviated display numbers such as `"$123.45M"`.
pub mod normalize;
/// Source URLs for a ticker.
pub mod urls;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::EtfClient`
pub use client::{EtfClient, EtfClientBuilder};
pub use error::EtfError;
pub use normalize::parse_abbreviated_number;
