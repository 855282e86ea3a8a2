#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the county crime dashboard server.

use clap::Parser;
use hu_crime_map_server::ServerConfig;

#[actix_web::main]
async fn main() {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::parse();

    if let Err(e) = hu_crime_map_server::run_server(config).await {
        log::error!("{e}");
        std::process::exit(1);
    }
}
