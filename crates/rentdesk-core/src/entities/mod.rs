//! The four back-office entities.
//!
//! Field names follow the remote API, so they stay in French on the wire.

mod agency;
mod car;
mod client;
mod rental;

pub use agency::Agency;
pub use car::Car;
pub use client::Client;
pub use rental::Rental;

use crate::error::ValidationError;
use crate::types::RecordId;

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

fn require_ref(field: &'static str, id: RecordId) -> Result<(), ValidationError> {
    if id.is_zero() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}
