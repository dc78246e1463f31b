#[macro_use]
extern crate log;

mod cli;
mod config;

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;

use actdb_db_mem::{seed, Connections};
use actdb_webserver as webserver;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;

    let catalog = match &cfg.catalog.file {
        Some(file) => config::load_catalog_from_file(file)?,
        None => seed::mergington_catalog(),
    };
    let connections = Connections::init(catalog);

    let address = args.bind.unwrap_or(cfg.webserver.address);
    let port = args.port.unwrap_or(cfg.webserver.port);
    let bind = SocketAddr::new(address, port);
    let enable_cors = args.enable_cors || cfg.webserver.cors;
    let web_cfg = webserver::Cfg {
        enforce_capacity: cfg.roster.enforce_capacity,
    };

    info!("Starting web server on {bind}");
    webserver::run(connections, enable_cors, web_cfg, bind).await;
    Ok(())
}
