//! Upstream CRM wire formats.
//!
//! The upstream wraps every response in a `{success, data}` envelope and every
//! failure in a `{success, error}` envelope. The gateway forwards bodies
//! verbatim, so only the handful of fields it branches on are modelled here.

pub mod pipedrive;
