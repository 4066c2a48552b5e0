//! Core components of the `hawkiz-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`HawkizClient`] and its builder.
//! - The primary [`HawkizError`] type.
//! - Internal networking helpers shared by every API module.

/// The main client (`HawkizClient`), builder, and configuration.
pub mod client;
/// The primary error type (`HawkizError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::HawkizClient`
pub use client::{HawkizClient, HawkizClientBuilder};
pub use error::HawkizError;
