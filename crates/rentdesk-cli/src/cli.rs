//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{agencies, cars, clients, config, rentals};

/// Car-rental back office: manage cars, clients, agencies and rentals.
#[derive(Parser, Debug)]
#[command(name = "rentdesk")]
#[command(author, version = env!("RENTDESK_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Base URL of the back-office API (overrides the saved configuration)
    #[arg(long, env = "RENTDESK_API", global = true)]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the car fleet
    Cars(cars::CarsCommand),

    /// Manage clients
    Clients(clients::ClientsCommand),

    /// Manage agencies
    Agencies(agencies::AgenciesCommand),

    /// Manage rentals
    Rentals(rentals::RentalsCommand),

    /// Show or change the saved configuration
    Config(config::ConfigCommand),
}
