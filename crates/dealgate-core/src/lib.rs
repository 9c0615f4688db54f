//! dealgate core: transport-agnostic error types, the request metrics model,
//! and the upstream CRM wire envelopes.
//!
//! This crate is shared by the gateway and by integration tests. It carries no
//! HTTP server or client dependency so the metrics store and error surface can
//! be exercised in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `DealGateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod protocol;

/// Shared result type.
pub use error::{DealGateError, Result};
