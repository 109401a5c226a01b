//! Entity contract.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// An entity type served by one remote collection endpoint.
pub trait Resource: Serialize + DeserializeOwned + Clone + PartialEq + Debug + Send + Sync {
    /// Path segment of the remote collection, e.g. `Voiture`.
    const PATH: &'static str;

    /// Human-readable singular name used in logs and error messages.
    const LABEL: &'static str;

    /// Check the required-field contract before anything is sent.
    fn validate(&self) -> Result<(), ValidationError>;
}
