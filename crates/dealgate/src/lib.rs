//! Top-level facade crate for dealgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use dealgate_core::*;
}

pub mod gateway {
    pub use dealgate_gateway::*;
}
