//! Client entity.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::traits::Resource;

use super::require_text;

/// A customer renting cars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub nom: String,
    pub email: String,
    pub telephone: String,
}

impl Resource for Client {
    const PATH: &'static str = "Client";
    const LABEL: &'static str = "client";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.nom)?;
        require_text("email", &self.email)?;
        require_text("telephone", &self.telephone)?;
        check_email(self.email.trim())
    }
}

/// Syntactic check only: one `@`, a local part, and a dotted domain.
fn check_email(email: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &str| Err(ValidationError::invalid("email", reason));

    if email.chars().any(char::is_whitespace) {
        return invalid("must not contain whitespace");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return invalid("missing '@'");
    };

    if local.is_empty() {
        return invalid("missing name before '@'");
    }
    if domain.contains('@') {
        return invalid("more than one '@'");
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return invalid("malformed domain");
    }
    if !domain.contains('.') {
        return invalid("domain must contain a dot");
    }

    Ok(())
}
