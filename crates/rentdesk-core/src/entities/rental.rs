//! Rental entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::traits::Resource;
use crate::types::RecordId;

use super::require_ref;

/// A car rented by a client over a date range.
///
/// `client_id` and `voiture_id` are weak references: nothing here checks
/// that the referenced records still exist. Servers that expand the
/// referenced `client`/`voiture` objects inline are accepted; the
/// expansions are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    #[serde(rename = "dateDebut")]
    pub date_debut: NaiveDate,

    #[serde(rename = "dateFin")]
    pub date_fin: NaiveDate,

    pub client_id: RecordId,

    pub voiture_id: RecordId,
}

impl Resource for Rental {
    const PATH: &'static str = "Location";
    const LABEL: &'static str = "rental";

    fn validate(&self) -> Result<(), ValidationError> {
        require_ref("client_id", self.client_id)?;
        require_ref("voiture_id", self.voiture_id)?;

        if self.date_fin < self.date_debut {
            return Err(ValidationError::invalid(
                "dateFin",
                format!("{} is before {}", self.date_fin, self.date_debut),
            ));
        }
        Ok(())
    }
}
