//! Nearsell Marketplace CLI

use std::process;

use clap::Parser;

mod api;
mod commands;
mod render;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = commands::Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
