//! dealgate gateway library entry.
//!
//! Thin HTTP gateway in front of the Pipedrive deals API: forwards deal CRUD
//! calls with the configured token and records per-request latency. Consumed
//! by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod upstream;
