//! Chat and send commands

use crate::{Config, tree};
use anyhow::Result;
use clap::Args;
use model::ProviderManager;
use runtime::{Chat, Runtime};
use search::TavilyClient;
use std::io::{BufRead, Write};
use wcore::model::{General, Message, Registry};

/// Interactive chat arguments
#[derive(Debug, Args)]
pub struct ChatCmd {
    /// The agent to talk to
    #[arg(short, long, default_value = tree::ROOT)]
    pub agent: String,
}

/// One-shot send arguments
#[derive(Debug, Args)]
pub struct SendCmd {
    /// The message to send
    pub message: String,

    /// The agent to talk to
    #[arg(short, long, default_value = tree::ROOT)]
    pub agent: String,
}

/// Build a runtime with the tools and the mounted agent tree.
pub fn build_runtime(config: &Config) -> Result<Runtime<ProviderManager>> {
    let manager = ProviderManager::from_configs(&config.usable_providers(), &config.default_model)?;
    let client = manager.client();
    let mut runtime = Runtime::new(General::default(), manager);

    match TavilyClient::new(config.search.clone(), client) {
        Ok(search) => search::tool::register(&mut runtime, search),
        Err(e) => tracing::warn!("web search disabled: {e}"),
    }
    if config.weather.mock {
        weather::register(&mut runtime);
    }

    let tree = tree::build(config.weather.mock)?;
    runtime.mount(&tree)?;
    tracing::info!(
        "mounted {} agents, default model {}",
        tree.len(),
        runtime.registry().active_model()
    );
    Ok(runtime)
}

impl ChatCmd {
    /// Run the interactive chat
    pub async fn run(&self, config: &Config) -> Result<()> {
        let runtime = build_runtime(config)?;
        let mut chat = runtime.chat(&self.agent)?;

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            print!("> ");
            stdout.flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }

            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            if input == "/quit" || input == "/exit" {
                break;
            }

            if let Err(e) = send(&runtime, &mut chat, input).await {
                eprintln!("error: {e:#}");
            }
        }

        Ok(())
    }
}

impl SendCmd {
    /// Send one message and print the answer
    pub async fn run(&self, config: &Config) -> Result<()> {
        let runtime = build_runtime(config)?;
        let mut chat = runtime.chat(&self.agent)?;
        send(&runtime, &mut chat, &self.message).await
    }
}

async fn send(runtime: &Runtime<ProviderManager>, chat: &mut Chat, input: &str) -> Result<()> {
    let response = runtime.send(chat, Message::user(input)).await?;
    match response.content() {
        Some(content) => println!("{content}"),
        None => tracing::warn!("model returned no content"),
    }
    tracing::debug!(
        "{} messages in session, ~{} tokens",
        chat.len(),
        runtime.estimate_tokens(chat)
    );
    Ok(())
}
