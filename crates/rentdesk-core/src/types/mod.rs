//! Core rentdesk types.
//!
//! These types enforce their invariants at construction time.

mod api_url;
mod record_id;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use record_id::RecordId;
