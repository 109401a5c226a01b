//! Car commands.

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};

use rentdesk_core::{Car, RecordId, ResourceStore, Transport};

use super::Row;

#[derive(Args, Debug)]
pub struct CarsCommand {
    #[command(subcommand)]
    pub command: CarsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CarsSubcommand {
    /// List all cars
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a car to the fleet
    Create(CreateCarArgs),

    /// Change fields of an existing car
    Update(UpdateCarArgs),

    /// Remove a car
    Delete {
        /// Id of the car
        id: RecordId,
    },
}

#[derive(Args, Debug)]
pub struct CreateCarArgs {
    /// Make, e.g. Renault
    #[arg(long)]
    pub marque: String,

    /// Model, e.g. Clio
    #[arg(long)]
    pub modele: String,

    /// Daily price
    #[arg(long = "prix")]
    pub prix_par_jour: f64,
}

#[derive(Args, Debug)]
pub struct UpdateCarArgs {
    /// Id of the car
    pub id: RecordId,

    #[arg(long)]
    pub marque: Option<String>,

    #[arg(long)]
    pub modele: Option<String>,

    #[arg(long = "prix")]
    pub prix_par_jour: Option<f64>,
}

impl Row for Car {
    fn row(&self) -> String {
        format!("{} - {:.2} €/jour", self.label(), self.prix_par_jour)
    }
}

pub async fn handle(cmd: CarsCommand, transport: Arc<dyn Transport>) -> Result<()> {
    let store: ResourceStore<Car> = ResourceStore::new(transport);

    match cmd.command {
        CarsSubcommand::List { json } => super::list(store, json).await,
        CarsSubcommand::Create(args) => {
            let car = Car {
                marque: args.marque,
                modele: args.modele,
                prix_par_jour: args.prix_par_jour,
            };
            super::create(store, car).await
        }
        CarsSubcommand::Update(args) => {
            super::update(store, args.id, |mut car| {
                if let Some(marque) = args.marque {
                    car.marque = marque;
                }
                if let Some(modele) = args.modele {
                    car.modele = modele;
                }
                if let Some(prix) = args.prix_par_jour {
                    car.prix_par_jour = prix;
                }
                Ok(car)
            })
            .await
        }
        CarsSubcommand::Delete { id } => super::delete(store, id).await,
    }
}
