//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use hu_crime_map_dataset::DataPaths;

/// Serve the Hungarian county crime dashboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "hu_crime_map_server")]
#[command(about = "Serve the Hungarian county crime dashboard")]
pub struct ServerConfig {
    /// Directory holding the boundary `GeoJSON` and the three CSV tables.
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Address to bind the HTTP listener to.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1")]
    pub bind_addr: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8050)]
    pub port: u16,
}

impl ServerConfig {
    /// Input file locations under [`data_dir`](Self::data_dir).
    #[must_use]
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::in_dir(&self.data_dir)
    }
}
