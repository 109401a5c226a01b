//! Car entity.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::traits::Resource;

use super::require_text;

/// A car of the rental fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub marque: String,
    pub modele: String,
    pub prix_par_jour: f64,
}

impl Car {
    /// Display label, e.g. `Toyota Yaris`.
    pub fn label(&self) -> String {
        format!("{} {}", self.marque, self.modele)
    }
}

impl Resource for Car {
    const PATH: &'static str = "Voiture";
    const LABEL: &'static str = "car";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("marque", &self.marque)?;
        require_text("modele", &self.modele)?;

        if !self.prix_par_jour.is_finite() {
            return Err(ValidationError::invalid("prixParJour", "must be a number"));
        }
        if self.prix_par_jour < 0.0 {
            return Err(ValidationError::invalid("prixParJour", "must not be negative"));
        }
        if self.prix_par_jour == 0.0 {
            return Err(ValidationError::Missing {
                field: "prixParJour",
            });
        }
        Ok(())
    }
}
