//! Client-side cache of one remote collection.
//!
//! A [`ResourceStore`] owns the local [`Collection`] for one entity type and
//! is the only thing that mutates it. Every mutation goes to the server
//! first; the collection changes only after the server confirms, so a failed
//! call leaves it exactly as it was.

mod state;

pub use state::LoadState;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::endpoints;
use crate::error::{Error, PreconditionError, TransportError, WriteOperation};
use crate::record::{Collection, Record};
use crate::traits::{Resource, Transport};
use crate::types::RecordId;
use crate::Result;

/// Local copy of one remote collection, kept in sync through CRUD calls.
///
/// Operations take `&mut self`: one store has a single writer, and the
/// outcome of each call is applied before the next one can start.
pub struct ResourceStore<T: Resource> {
    transport: Arc<dyn Transport>,
    records: Collection<T>,
    state: LoadState,
}

impl<T: Resource> ResourceStore<T> {
    /// Create an empty store in the `Loading` phase.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            records: Collection::new(),
            state: LoadState::Loading,
        }
    }

    /// The current local collection.
    pub fn records(&self) -> &Collection<T> {
        &self.records
    }

    /// Phase driven by the last `load()`.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn get(&self, id: RecordId) -> Option<&Record<T>> {
        self.records.get(id)
    }

    /// Fetch the whole remote collection and replace the local one.
    ///
    /// On failure the local collection is untouched and the state becomes
    /// [`LoadState::Errored`].
    #[instrument(skip(self), fields(resource = T::LABEL))]
    pub async fn load(&mut self) -> Result<&Collection<T>> {
        self.state = LoadState::Loading;
        debug!("Loading collection");

        match self.fetch().await {
            Ok(records) => {
                info!(count = records.len(), "Collection loaded");
                self.records = records;
                self.state = LoadState::Ready;
                Ok(&self.records)
            }
            Err(source) => {
                warn!(error = %source, "Failed to load collection");
                let err = Error::Fetch {
                    resource: T::LABEL,
                    source,
                };
                self.state = LoadState::Errored(err.to_string());
                Err(err)
            }
        }
    }

    /// Create a record and append the server's copy to the collection.
    ///
    /// The entity is validated first; a rejected entity never reaches the
    /// network.
    #[instrument(skip(self, entity), fields(resource = T::LABEL))]
    pub async fn create(&mut self, entity: T) -> Result<Record<T>> {
        validate(&entity)?;
        debug!("Creating record");

        let record = self
            .send_create(&entity)
            .await
            .map_err(|source| write_error::<T>(WriteOperation::Create, source))?;

        info!(id = ?record.id, "Record created");
        self.records.upsert(record.clone());
        Ok(record)
    }

    /// Replace the fields of an existing record.
    ///
    /// Fails with [`PreconditionError::MissingId`] when `id` is `None`. If the
    /// returned record matches nothing locally it is dropped, and the server's
    /// copy is still returned.
    #[instrument(skip(self, entity), fields(resource = T::LABEL))]
    pub async fn update(&mut self, id: Option<RecordId>, entity: T) -> Result<Record<T>> {
        let id = id.ok_or(PreconditionError::MissingId {
            resource: T::LABEL,
        })?;
        validate(&entity)?;
        debug!(%id, "Updating record");

        let record = self
            .send_update(id, &entity)
            .await
            .map_err(|source| write_error::<T>(WriteOperation::Update, source))?;

        if !self.records.replace(record.clone()) {
            warn!(id = ?record.id, "Updated record is not in the local collection, dropping it");
        }
        Ok(record)
    }

    /// Delete a record. Without an id this is a no-op, not an error.
    #[instrument(skip(self), fields(resource = T::LABEL))]
    pub async fn delete(&mut self, id: Option<RecordId>) -> Result<()> {
        let Some(id) = id else {
            debug!("Delete without id ignored");
            return Ok(());
        };
        debug!(%id, "Deleting record");

        self.transport
            .delete(&endpoints::delete(T::PATH, id))
            .await
            .map_err(|source| write_error::<T>(WriteOperation::Delete, source))?;

        if self.records.remove(id).is_none() {
            debug!(%id, "Deleted record was not loaded locally");
        }
        info!(%id, "Record deleted");
        Ok(())
    }

    async fn fetch(&self) -> std::result::Result<Collection<T>, TransportError> {
        let body = self.transport.get(&endpoints::data(T::PATH)).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn send_create(&self, entity: &T) -> std::result::Result<Record<T>, TransportError> {
        let body = encode(entity)?;
        let response = self
            .transport
            .post(&endpoints::submit(T::PATH), &body)
            .await?;

        let record: Record<T> = serde_json::from_value(response)?;
        if record.id.is_none() {
            return Err(TransportError::decode("created record carries no id"));
        }
        Ok(record)
    }

    async fn send_update(
        &self,
        id: RecordId,
        entity: &T,
    ) -> std::result::Result<Record<T>, TransportError> {
        let body = encode(entity)?;
        let response = self
            .transport
            .put(&endpoints::update(T::PATH, id), &body)
            .await?;

        let mut record: Record<T> = serde_json::from_value(response)?;
        record.id.get_or_insert(id);
        Ok(record)
    }
}

impl<T: Resource> std::fmt::Debug for ResourceStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("resource", &T::LABEL)
            .field("records", &self.records)
            .field("state", &self.state)
            .finish()
    }
}

fn validate<T: Resource>(entity: &T) -> Result<()> {
    entity.validate().map_err(|source| {
        debug!(error = %source, "Rejected before sending");
        Error::Validation {
            resource: T::LABEL,
            source,
        }
    })
}

fn encode<T: Resource>(entity: &T) -> std::result::Result<Value, TransportError> {
    serde_json::to_value(entity).map_err(|e| TransportError::Encode {
        message: e.to_string(),
    })
}

fn write_error<T: Resource>(operation: WriteOperation, source: TransportError) -> Error {
    warn!(%operation, error = %source, "Remote write failed");
    Error::Write {
        resource: T::LABEL,
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Car, Client};
    use crate::error::ValidationError;
    use crate::fake::FakeTransport;
    use serde_json::json;

    fn car(marque: &str, modele: &str, prix: f64) -> Car {
        Car {
            marque: marque.to_string(),
            modele: modele.to_string(),
            prix_par_jour: prix,
        }
    }

    fn id(n: u64) -> RecordId {
        RecordId::new(n)
    }

    async fn loaded_cars(fake: &Arc<FakeTransport>) -> ResourceStore<Car> {
        fake.respond(
            "GET",
            "Voiture/data",
            json!([
                {"id": 1, "marque": "Toyota", "modele": "Yaris", "prixParJour": 30.0},
                {"id": 2, "marque": "Renault", "modele": "Clio", "prixParJour": 25.0}
            ]),
        );
        let mut store = ResourceStore::new(fake.clone());
        store.load().await.unwrap();
        store
    }

    #[test]
    fn new_store_is_loading_and_empty() {
        let store: ResourceStore<Car> = ResourceStore::new(FakeTransport::shared());
        assert_eq!(store.state(), &LoadState::Loading);
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn load_replaces_collection() {
        let fake = FakeTransport::shared();
        let store = loaded_cars(&fake).await;

        assert_eq!(store.state(), &LoadState::Ready);
        assert_eq!(store.records().ids(), vec![id(1), id(2)]);
        assert_eq!(store.get(id(2)).unwrap().fields.modele, "Clio");
    }

    #[tokio::test]
    async fn failed_load_keeps_records_and_reports_error() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let before = store.records().clone();

        fake.fail("GET", "Voiture/data", 500);
        let err = store.load().await.unwrap_err();

        assert!(matches!(err, Error::Fetch { resource: "car", .. }));
        assert_eq!(store.records(), &before);
        assert!(store.state().error().unwrap().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_fetch_error() {
        let fake = FakeTransport::shared();
        fake.respond("GET", "Voiture/data", json!({"not": "a list"}));
        let mut store: ResourceStore<Car> = ResourceStore::new(fake.clone());

        let err = store.load().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Fetch {
                source: TransportError::Decode { .. },
                ..
            }
        ));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn reload_recovers_from_errored() {
        let fake = FakeTransport::shared();
        fake.fail("GET", "Voiture/data", 503);
        let mut store: ResourceStore<Car> = ResourceStore::new(fake.clone());
        assert!(store.load().await.is_err());
        assert!(store.state().error().is_some());

        fake.respond("GET", "Voiture/data", json!([]));
        store.load().await.unwrap();
        assert_eq!(store.state(), &LoadState::Ready);
    }

    #[tokio::test]
    async fn create_appends_server_record() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        fake.respond(
            "POST",
            "Voiture/submit",
            json!({"id": 3, "marque": "Peugeot", "modele": "208", "prixParJour": 28.0}),
        );

        let created = store.create(car("Peugeot", "208", 28.0)).await.unwrap();

        assert_eq!(created.id, Some(id(3)));
        assert_eq!(store.records().len(), 3);
        assert_eq!(store.records().as_slice()[2], created);
        assert_eq!(
            fake.last_body("POST", "Voiture/submit"),
            Some(json!({"marque": "Peugeot", "modele": "208", "prixParJour": 28.0}))
        );
    }

    #[tokio::test]
    async fn create_with_known_id_replaces_instead_of_duplicating() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        fake.respond(
            "POST",
            "Voiture/submit",
            json!({"id": 1, "marque": "Toyota", "modele": "Aygo", "prixParJour": 20.0}),
        );

        store.create(car("Toyota", "Aygo", 20.0)).await.unwrap();

        assert_eq!(store.records().ids(), vec![id(1), id(2)]);
        assert_eq!(store.get(id(1)).unwrap().fields.modele, "Aygo");
    }

    #[tokio::test]
    async fn invalid_create_makes_no_call() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let calls = fake.calls().len();

        let err = store.create(car("", "208", 28.0)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation {
                source: ValidationError::Missing { field: "marque" },
                ..
            }
        ));
        assert!(err.is_local());
        assert_eq!(fake.calls().len(), calls);
        assert_eq!(store.records().len(), 2);
    }

    #[tokio::test]
    async fn zero_price_create_makes_no_call() {
        let fake = FakeTransport::shared();
        let mut store: ResourceStore<Car> = ResourceStore::new(fake.clone());

        assert!(store.create(car("Fiat", "500", 0.0)).await.is_err());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_create_leaves_collection() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let before = store.records().clone();
        fake.fail("POST", "Voiture/submit", 400);

        let err = store.create(car("Peugeot", "208", 28.0)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Write {
                operation: WriteOperation::Create,
                ..
            }
        ));
        assert_eq!(store.records(), &before);
    }

    #[tokio::test]
    async fn create_response_without_id_is_rejected() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        fake.respond(
            "POST",
            "Voiture/submit",
            json!({"marque": "Peugeot", "modele": "208", "prixParJour": 28.0}),
        );

        let err = store.create(car("Peugeot", "208", 28.0)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Write {
                source: TransportError::Decode { .. },
                ..
            }
        ));
        assert_eq!(store.records().len(), 2);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        fake.respond(
            "PUT",
            "Voiture/update/1",
            json!({"id": 1, "marque": "Toyota", "modele": "Corolla", "prixParJour": 35.0}),
        );

        let updated = store
            .update(Some(id(1)), car("Toyota", "Corolla", 35.0))
            .await
            .unwrap();

        assert_eq!(updated.fields.modele, "Corolla");
        assert_eq!(store.records().ids(), vec![id(1), id(2)]);
        assert_eq!(store.get(id(1)), Some(&updated));
        assert_eq!(store.get(id(2)).unwrap().fields.modele, "Clio");
    }

    #[tokio::test]
    async fn update_without_id_is_a_precondition_error() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let calls = fake.calls().len();

        let err = store
            .update(None, car("Toyota", "Corolla", 35.0))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Precondition(PreconditionError::MissingId { resource: "car" })
        ));
        assert_eq!(fake.calls().len(), calls);
    }

    #[tokio::test]
    async fn update_of_unknown_record_is_dropped() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let before = store.records().clone();
        fake.respond(
            "PUT",
            "Voiture/update/7",
            json!({"id": 7, "marque": "Dacia", "modele": "Sandero", "prixParJour": 18.0}),
        );

        let updated = store
            .update(Some(id(7)), car("Dacia", "Sandero", 18.0))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id(7)));
        assert_eq!(store.records(), &before);
    }

    #[tokio::test]
    async fn update_response_without_id_keeps_requested_id() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        fake.respond(
            "PUT",
            "Voiture/update/2",
            json!({"marque": "Renault", "modele": "Megane", "prixParJour": 32.0}),
        );

        let updated = store
            .update(Some(id(2)), car("Renault", "Megane", 32.0))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id(2)));
        assert_eq!(store.get(id(2)).unwrap().fields.modele, "Megane");
    }

    #[tokio::test]
    async fn failed_update_leaves_collection() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let before = store.records().clone();
        fake.fail("PUT", "Voiture/update/1", 404);

        let err = store
            .update(Some(id(1)), car("Toyota", "Corolla", 35.0))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to update car: HTTP 404");
        assert_eq!(store.records(), &before);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        fake.respond("DELETE", "Voiture/delete/1", json!(null));

        store.delete(Some(id(1))).await.unwrap();

        assert_eq!(store.records().ids(), vec![id(2)]);
    }

    #[tokio::test]
    async fn delete_without_id_is_silent() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let calls = fake.calls().len();

        store.delete(None).await.unwrap();

        assert_eq!(store.records().len(), 2);
        assert_eq!(fake.calls().len(), calls);
    }

    #[tokio::test]
    async fn failed_delete_leaves_collection() {
        let fake = FakeTransport::shared();
        let mut store = loaded_cars(&fake).await;
        let before = store.records().clone();

        // No route mounted: the fake reports a connection failure.
        let err = store.delete(Some(id(2))).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Write {
                operation: WriteOperation::Delete,
                source: TransportError::Connection { .. },
                ..
            }
        ));
        assert_eq!(store.records(), &before);
    }

    #[tokio::test]
    async fn scenario_create_update_delete() {
        let fake = FakeTransport::shared();
        fake.respond(
            "GET",
            "Voiture/data",
            json!([{"id": 1, "marque": "Toyota", "modele": "Yaris", "prixParJour": 30}]),
        );
        fake.respond(
            "POST",
            "Voiture/submit",
            json!({"id": 2, "marque": "Renault", "modele": "Clio", "prixParJour": 25}),
        );
        fake.respond(
            "PUT",
            "Voiture/update/1",
            json!({"id": 1, "marque": "Toyota", "modele": "Corolla", "prixParJour": 35}),
        );
        fake.respond("DELETE", "Voiture/delete/1", json!(null));

        let mut store: ResourceStore<Car> = ResourceStore::new(fake.clone());
        store.load().await.unwrap();

        let created = store.create(car("Renault", "Clio", 25.0)).await.unwrap();
        assert_eq!(created.id, Some(id(2)));
        assert_eq!(store.records().ids(), vec![id(1), id(2)]);

        store
            .update(Some(id(1)), car("Toyota", "Corolla", 35.0))
            .await
            .unwrap();
        assert_eq!(
            store.records().as_slice()[0],
            Record::persisted(id(1), car("Toyota", "Corolla", 35.0))
        );
        assert_eq!(store.records().as_slice()[1], created);

        store.delete(Some(id(1))).await.unwrap();
        assert_eq!(store.records().as_slice(), &[created]);
    }

    #[tokio::test]
    async fn stores_share_one_transport() {
        let fake = FakeTransport::shared();
        fake.respond("GET", "Voiture/data", json!([]));
        fake.respond(
            "GET",
            "Client/data",
            json!([{"id": 5, "nom": "Jean", "email": "jean@example.fr", "telephone": "0600"}]),
        );

        let mut cars: ResourceStore<Car> = ResourceStore::new(fake.clone());
        let mut clients: ResourceStore<Client> = ResourceStore::new(fake.clone());
        cars.load().await.unwrap();
        clients.load().await.unwrap();

        assert!(cars.records().is_empty());
        assert_eq!(clients.records().ids(), vec![id(5)]);
        assert_eq!(fake.calls(), vec!["GET Voiture/data", "GET Client/data"]);
    }
}
