//! Subcommand implementations.
//!
//! Each resource module parses its own fields and hands the entity to the
//! shared helpers below, which drive a [`ResourceStore`] and print notices.

pub mod agencies;
pub mod cars;
pub mod clients;
pub mod config;
pub mod rentals;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use rentdesk_core::{Record, RecordId, Resource, ResourceStore, Transport};
use rentdesk_http::HttpTransport;

use crate::cli::{Cli, Commands};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    let api = cli.api.as_deref();
    match cli.command {
        Commands::Cars(cmd) => cars::handle(cmd, connect(api)?).await,
        Commands::Clients(cmd) => clients::handle(cmd, connect(api)?).await,
        Commands::Agencies(cmd) => agencies::handle(cmd, connect(api)?).await,
        Commands::Rentals(cmd) => rentals::handle(cmd, connect(api)?).await,
        Commands::Config(cmd) => config::handle(cmd, api),
    }
}

/// Build the transport every store of this invocation shares.
fn connect(argument: Option<&str>) -> Result<Arc<dyn Transport>> {
    let (api, source) = crate::config::resolve_api(argument)?;
    debug!(%api, source = source.describe(), "Using API");

    let transport = HttpTransport::new(api).context("Failed to build HTTP client")?;
    Ok(Arc::new(transport))
}

/// How a record is shown in a listing.
pub trait Row {
    fn row(&self) -> String;
}

/// Load a collection. A failure is reported like the inline page message.
pub async fn load<T: Resource>(store: &mut ResourceStore<T>) -> Result<()> {
    store
        .load()
        .await
        .with_context(|| format!("Could not load the {} list", T::LABEL))?;
    Ok(())
}

/// Load and print a whole collection.
pub async fn list<T: Resource + Row>(mut store: ResourceStore<T>, json: bool) -> Result<()> {
    load(&mut store).await?;

    if json {
        return output::json_pretty(store.records());
    }

    print_rows(store.records().iter().map(|r| (r.id, r.fields.row())), T::LABEL);
    Ok(())
}

pub fn print_rows(rows: impl Iterator<Item = (Option<RecordId>, String)>, label: &str) {
    let mut empty = true;
    for (id, text) in rows {
        empty = false;
        let id = id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
        output::row(&id, &text);
    }
    if empty {
        output::note(&format!("No {label} records found."));
    }
}

pub async fn create<T: Resource + Row>(mut store: ResourceStore<T>, entity: T) -> Result<()> {
    let record = store
        .create(entity)
        .await
        .with_context(|| format!("Could not add the {}", T::LABEL))?;

    announce(&record, "added");
    Ok(())
}

/// Load the collection, apply `edit` to the current record, and send it.
///
/// This is the edit-form flow: unchanged fields keep their current values.
pub async fn update<T, F>(mut store: ResourceStore<T>, id: RecordId, edit: F) -> Result<()>
where
    T: Resource + Row,
    F: FnOnce(T) -> Result<T>,
{
    load(&mut store).await?;

    let current = store
        .get(id)
        .with_context(|| format!("No {} with id {}", T::LABEL, id))?
        .fields
        .clone();
    let edited = edit(current)?;

    let record = store
        .update(Some(id), edited)
        .await
        .with_context(|| format!("Could not update the {}", T::LABEL))?;

    announce(&record, "updated");
    Ok(())
}

pub async fn delete<T: Resource>(mut store: ResourceStore<T>, id: RecordId) -> Result<()> {
    store
        .delete(Some(id))
        .await
        .with_context(|| format!("Could not delete the {}", T::LABEL))?;

    output::success(&format!("{} {} deleted", capitalize(T::LABEL), id));
    Ok(())
}

fn announce<T: Resource + Row>(record: &Record<T>, verb: &str) {
    let id = record
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    output::success(&format!("{} {} {}", capitalize(T::LABEL), id, verb));
    output::row(&id, &record.fields.row());
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
