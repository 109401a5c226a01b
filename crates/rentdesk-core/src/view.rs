//! Read-time join of rentals with their client and car.

use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::{Car, Client, Rental};
use crate::record::{Collection, Record};
use crate::types::RecordId;

/// Shown in place of a client name or car label whose record is missing.
pub const UNKNOWN: &str = "unknown";

/// A rental ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalView {
    pub id: Option<RecordId>,
    pub client_name: String,
    pub car_label: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
}

impl RentalView {
    /// Resolve the client and car a rental points at.
    ///
    /// A reference to a deleted or not yet loaded record resolves to
    /// [`UNKNOWN`]; it is never an error.
    pub fn resolve(
        rental: &Record<Rental>,
        clients: &Collection<Client>,
        cars: &Collection<Car>,
    ) -> Self {
        Self {
            id: rental.id,
            client_name: client_name(rental.fields.client_id, clients),
            car_label: car_label(rental.fields.voiture_id, cars),
            date_debut: rental.fields.date_debut,
            date_fin: rental.fields.date_fin,
        }
    }

    /// Resolve every rental of a collection, in display order.
    pub fn resolve_all(
        rentals: &Collection<Rental>,
        clients: &Collection<Client>,
        cars: &Collection<Car>,
    ) -> Vec<Self> {
        rentals
            .iter()
            .map(|rental| Self::resolve(rental, clients, cars))
            .collect()
    }
}

pub fn client_name(id: RecordId, clients: &Collection<Client>) -> String {
    clients
        .get(id)
        .map(|r| r.fields.nom.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn car_label(id: RecordId, cars: &Collection<Car>) -> String {
    cars.get(id)
        .map(|r| r.fields.label())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
