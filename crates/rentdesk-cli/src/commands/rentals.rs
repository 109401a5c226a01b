//! Rental commands.
//!
//! Listing rentals needs clients and cars too: each rental is shown with the
//! name of its client and the label of its car.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use rentdesk_core::{BackOffice, RecordId, Rental, RentalView, ResourceStore, Transport};

use super::Row;
use crate::output;

#[derive(Args, Debug)]
pub struct RentalsCommand {
    #[command(subcommand)]
    pub command: RentalsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RentalsSubcommand {
    /// List rentals with client names and cars
    List {
        /// Print the resolved rentals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a rental
    Create(CreateRentalArgs),

    /// Change fields of an existing rental
    Update(UpdateRentalArgs),

    /// Remove a rental
    Delete {
        /// Id of the rental
        id: RecordId,
    },
}

#[derive(Args, Debug)]
pub struct CreateRentalArgs {
    /// Id of the renting client
    #[arg(long)]
    pub client: RecordId,

    /// Id of the rented car
    #[arg(long)]
    pub car: RecordId,

    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    pub to: NaiveDate,
}

#[derive(Args, Debug)]
pub struct UpdateRentalArgs {
    /// Id of the rental
    pub id: RecordId,

    #[arg(long)]
    pub client: Option<RecordId>,

    #[arg(long)]
    pub car: Option<RecordId>,

    #[arg(long)]
    pub from: Option<NaiveDate>,

    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl Row for Rental {
    fn row(&self) -> String {
        format!(
            "client #{} - car #{} - {} au {}",
            self.client_id, self.voiture_id, self.date_debut, self.date_fin
        )
    }
}

impl Row for RentalView {
    fn row(&self) -> String {
        format!(
            "Client: {} | Voiture: {} | {} au {}",
            self.client_name, self.car_label, self.date_debut, self.date_fin
        )
    }
}

pub async fn handle(cmd: RentalsCommand, transport: Arc<dyn Transport>) -> Result<()> {
    match cmd.command {
        RentalsSubcommand::List { json } => list(transport, json).await,
        RentalsSubcommand::Create(args) => {
            let rental = Rental {
                date_debut: args.from,
                date_fin: args.to,
                client_id: args.client,
                voiture_id: args.car,
            };
            super::create(ResourceStore::new(transport), rental).await
        }
        RentalsSubcommand::Update(args) => {
            let store: ResourceStore<Rental> = ResourceStore::new(transport);
            super::update(store, args.id, |mut rental| {
                if let Some(client) = args.client {
                    rental.client_id = client;
                }
                if let Some(car) = args.car {
                    rental.voiture_id = car;
                }
                if let Some(from) = args.from {
                    rental.date_debut = from;
                }
                if let Some(to) = args.to {
                    rental.date_fin = to;
                }
                Ok(rental)
            })
            .await
        }
        RentalsSubcommand::Delete { id } => {
            let store: ResourceStore<Rental> = ResourceStore::new(transport);
            super::delete(store, id).await
        }
    }
}

async fn list(transport: Arc<dyn Transport>, json: bool) -> Result<()> {
    let mut office = BackOffice::new(transport);
    office
        .load_rentals_page()
        .await
        .context("Could not load rentals")?;

    let rows = office.rental_rows();
    if json {
        return output::json_pretty(&rows);
    }

    super::print_rows(rows.iter().map(|view| (view.id, view.row())), "rental");
    Ok(())
}
