mod api;
mod cli;
mod config;
mod import;
mod logging;
mod masterlist;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::ImportArgs::parse();
    logging::init_logger();

    cli::handle_import_command(args).await
}
