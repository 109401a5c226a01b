//! The four stores of the back office over one transport.

use std::sync::Arc;

use tracing::instrument;

use crate::Result;
use crate::entities::{Agency, Car, Client, Rental};
use crate::store::ResourceStore;
use crate::traits::Transport;
use crate::view::RentalView;

/// One store per entity type, all talking to the same API.
#[derive(Debug)]
pub struct BackOffice {
    pub cars: ResourceStore<Car>,
    pub clients: ResourceStore<Client>,
    pub agencies: ResourceStore<Agency>,
    pub rentals: ResourceStore<Rental>,
}

impl BackOffice {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            cars: ResourceStore::new(transport.clone()),
            clients: ResourceStore::new(transport.clone()),
            agencies: ResourceStore::new(transport.clone()),
            rentals: ResourceStore::new(transport),
        }
    }

    /// Load what the rentals listing needs: clients, cars, then rentals.
    ///
    /// Stops at the first failure; stores loaded before it keep their data.
    #[instrument(skip(self))]
    pub async fn load_rentals_page(&mut self) -> Result<()> {
        self.clients.load().await?;
        self.cars.load().await?;
        self.rentals.load().await?;
        Ok(())
    }

    /// Every loaded rental with its client and car resolved.
    pub fn rental_rows(&self) -> Vec<RentalView> {
        RentalView::resolve_all(
            self.rentals.records(),
            self.clients.records(),
            self.cars.records(),
        )
    }
}
