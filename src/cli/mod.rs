use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "retroplan")]
#[command(about = "Retrofit planner API server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Directory holding the planner result and home JSON documents
        #[arg(long, env = "RETROPLAN_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,

        /// Address the HTTP server binds to
        #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8000")]
        bind_address: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_dir,
                bind_address,
            } => {
                serve(&data_dir, &bind_address).await?;
            }
        }
        Ok(())
    }
}
