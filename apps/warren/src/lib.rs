//! Warren CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use search::{SearchConfig, TavilyClient};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};
pub use {
    chat::{ChatCmd, SendCmd, build_runtime},
    config::Config,
};

mod chat;
pub mod config;
pub mod tree;

/// Warren CLI
#[derive(Debug, Parser)]
#[command(name = "warren", version, about)]
pub struct App {
    /// Path to the config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (use -v, -vv, -vvv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Chat with the agent tree
    Chat(ChatCmd),

    /// Send one message and print the answer
    Send(SendCmd),

    /// Print the agent tree
    Tree,

    /// Look up the mock weather report for a city
    Weather {
        /// City name
        city: String,
    },

    /// Search the web with Tavily
    Search {
        /// Search query
        query: String,
    },

    /// Generate the configuration file
    Generate,
}

impl App {
    /// Initialize tracing subscriber based on verbosity
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = match self.verbose {
                0 => "info",
                1 => "warren=debug",
                2 => "warren=trace",
                3 => "debug",
                _ => "trace",
            };
            EnvFilter::new(directive)
        });

        fmt()
            .without_time()
            .with_env_filter(filter)
            .with_target(self.verbose != 0)
            .init();
    }

    /// Resolve the config file path
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::default_path(),
        }
    }

    /// Run the selected command
    pub async fn run(self) -> Result<()> {
        let path = self.config_path()?;
        match &self.command {
            Command::Generate => Config::default().save(&path),
            Command::Weather { city } => {
                let record = weather::lookup(city);
                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(())
            }
            Command::Tree => {
                let config = Config::load(&path)?;
                let tree = tree::build(config.weather.mock)?;
                print!("{}", tree::render(&tree, &config.default_model));
                Ok(())
            }
            Command::Search { query } => {
                let config = Config::load(&path)?;
                search(config.search, query).await
            }
            Command::Chat(cmd) => cmd.run(&Config::load(&path)?).await,
            Command::Send(cmd) => cmd.run(&Config::load(&path)?).await,
        }
    }
}

async fn search(config: SearchConfig, query: &str) -> Result<()> {
    let client = TavilyClient::new(config, Default::default())?;
    let response = client.search(query).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
