//! Transport trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

/// Remote collection endpoint access.
///
/// Paths are relative to the API base (see [`endpoints`](crate::endpoints)).
/// Bodies travel as JSON values so the trait stays object safe and one
/// transport can serve every entity type.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a path and return the decoded JSON body.
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    /// POST a JSON body and return the decoded JSON response.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// PUT a JSON body and return the decoded JSON response.
    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// DELETE a path. Any response body is ignored.
    async fn delete(&self, path: &str) -> Result<(), TransportError>;
}
