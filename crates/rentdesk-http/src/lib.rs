//! rentdesk-http - HTTP transport for the rentdesk back office.
//!
//! [`HttpTransport`] implements [`rentdesk_core::Transport`] with reqwest
//! against the REST endpoints served under an [`ApiUrl`](rentdesk_core::ApiUrl).

mod client;

pub use client::{HttpTransport, HttpTransportBuilder};
