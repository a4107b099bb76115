//! Fairkick CLI
//!
//! Reads an assignment request JSON, balances the teams, writes the
//! response JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use fairkick_core::generate_teams_json;

#[derive(Parser)]
#[command(name = "fairkick")]
#[command(about = "Split a pickup roster into two balanced teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate balanced teams from a request JSON
    Generate {
        /// Input request JSON file (stdin when omitted)
        #[arg(long)]
        r#in: Option<PathBuf>,

        /// Output response JSON file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { r#in, out } => {
            let request = match &r#in {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read request from {:?}", path))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read request from stdin")?;
                    buf
                }
            };

            let response = generate_teams_json(&request).map_err(|e| anyhow!(e))?;

            match &out {
                Some(path) => std::fs::write(path, &response)
                    .with_context(|| format!("Failed to write response to {:?}", path))?,
                None => println!("{}", response),
            }

            Ok(())
        }
    }
}
