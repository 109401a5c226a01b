//! Client commands.

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};

use rentdesk_core::{Client, RecordId, ResourceStore, Transport};

use super::Row;

#[derive(Args, Debug)]
pub struct ClientsCommand {
    #[command(subcommand)]
    pub command: ClientsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ClientsSubcommand {
    /// List all clients
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a client
    Create(CreateClientArgs),

    /// Change fields of an existing client
    Update(UpdateClientArgs),

    /// Remove a client
    Delete {
        /// Id of the client
        id: RecordId,
    },
}

#[derive(Args, Debug)]
pub struct CreateClientArgs {
    /// Full name
    #[arg(long)]
    pub nom: String,

    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub telephone: String,
}

#[derive(Args, Debug)]
pub struct UpdateClientArgs {
    /// Id of the client
    pub id: RecordId,

    #[arg(long)]
    pub nom: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub telephone: Option<String>,
}

impl Row for Client {
    fn row(&self) -> String {
        format!("{} - {} - {}", self.nom, self.email, self.telephone)
    }
}

pub async fn handle(cmd: ClientsCommand, transport: Arc<dyn Transport>) -> Result<()> {
    let store: ResourceStore<Client> = ResourceStore::new(transport);

    match cmd.command {
        ClientsSubcommand::List { json } => super::list(store, json).await,
        ClientsSubcommand::Create(args) => {
            let client = Client {
                nom: args.nom,
                email: args.email,
                telephone: args.telephone,
            };
            super::create(store, client).await
        }
        ClientsSubcommand::Update(args) => {
            super::update(store, args.id, |mut client| {
                if let Some(nom) = args.nom {
                    client.nom = nom;
                }
                if let Some(email) = args.email {
                    client.email = email;
                }
                if let Some(telephone) = args.telephone {
                    client.telephone = telephone;
                }
                Ok(client)
            })
            .await
        }
        ClientsSubcommand::Delete { id } => super::delete(store, id).await,
    }
}
