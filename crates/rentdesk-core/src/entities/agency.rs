//! Agency entity.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::traits::Resource;

use super::require_text;

/// A rental agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub nom: String,
    pub adresse: String,
}

impl Resource for Agency {
    const PATH: &'static str = "Agence";
    const LABEL: &'static str = "agency";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.nom)?;
        require_text("adresse", &self.adresse)
    }
}
