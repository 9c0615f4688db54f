//! Client-facing proxy endpoints.

pub mod deals;

pub use deals::UpstreamLatency;
