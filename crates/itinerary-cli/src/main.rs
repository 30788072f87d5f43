//! Itinerary CLI application.
//!
//! Command-line interface for planning trips: transportation, lodging and
//! activities, with advisory checks that a trip's dates cover its records.

mod args;
mod cli;
mod renderer;
mod time;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use itinerary_core::ItineraryBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let itinerary = ItineraryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize itinerary")?;

    info!("Using database {}", itinerary.database_path().display());
    let cli = Cli::new(itinerary, TerminalRenderer::new(!no_color));

    match command {
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        Some(Org { command }) => cli.handle_org_command(command).await,
        Some(Attachment { command }) => cli.handle_attachment_command(command).await,
        None => cli.list_trips().await,
    }
}
