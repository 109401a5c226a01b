//! rentdesk-core - client-side state for the car-rental back office.
//!
//! The back office manages four remote collections (cars, clients, agencies
//! and rentals) through the same REST layout. A [`ResourceStore`] keeps a
//! local copy of one collection in sync with the server; the network is
//! reached through an injected [`Transport`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rentdesk_core::{Car, ResourceStore, Transport};
//!
//! # async fn example(transport: Arc<dyn Transport>) -> rentdesk_core::Result<()> {
//! let mut cars: ResourceStore<Car> = ResourceStore::new(transport);
//! cars.load().await?;
//!
//! let created = cars
//!     .create(Car {
//!         marque: "Renault".into(),
//!         modele: "Clio".into(),
//!         prix_par_jour: 25.0,
//!     })
//!     .await?;
//! println!("created car {:?}", created.id);
//! # Ok(())
//! # }
//! ```

pub mod endpoints;
pub mod entities;
pub mod error;
pub mod office;
pub mod record;
pub mod store;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(test)]
mod fake;

pub use entities::{Agency, Car, Client, Rental};
pub use error::{Error, TransportError, ValidationError};
pub use office::BackOffice;
pub use record::{Collection, Record};
pub use store::{LoadState, ResourceStore};
pub use traits::{Resource, Transport};
pub use types::{ApiUrl, RecordId};
pub use view::RentalView;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
