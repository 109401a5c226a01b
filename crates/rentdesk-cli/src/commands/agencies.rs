//! Agency commands.

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};

use rentdesk_core::{Agency, RecordId, ResourceStore, Transport};

use super::Row;

#[derive(Args, Debug)]
pub struct AgenciesCommand {
    #[command(subcommand)]
    pub command: AgenciesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AgenciesSubcommand {
    /// List all agencies
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open an agency
    Create {
        #[arg(long)]
        nom: String,

        /// Postal address
        #[arg(long)]
        adresse: String,
    },

    /// Change fields of an existing agency
    Update {
        /// Id of the agency
        id: RecordId,

        #[arg(long)]
        nom: Option<String>,

        #[arg(long)]
        adresse: Option<String>,
    },

    /// Remove an agency
    Delete {
        /// Id of the agency
        id: RecordId,
    },
}

impl Row for Agency {
    fn row(&self) -> String {
        format!("{} - {}", self.nom, self.adresse)
    }
}

pub async fn handle(cmd: AgenciesCommand, transport: Arc<dyn Transport>) -> Result<()> {
    let store: ResourceStore<Agency> = ResourceStore::new(transport);

    match cmd.command {
        AgenciesSubcommand::List { json } => super::list(store, json).await,
        AgenciesSubcommand::Create { nom, adresse } => {
            super::create(store, Agency { nom, adresse }).await
        }
        AgenciesSubcommand::Update { id, nom, adresse } => {
            super::update(store, id, |mut agency| {
                if let Some(nom) = nom {
                    agency.nom = nom;
                }
                if let Some(adresse) = adresse {
                    agency.adresse = adresse;
                }
                Ok(agency)
            })
            .await
        }
        AgenciesSubcommand::Delete { id } => super::delete(store, id).await,
    }
}
