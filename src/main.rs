//! ollama-chat - Main CLI Entry Point

use anyhow::Result;
use tracing::debug;
use ollama_chat::{
    cli::{Args, Config},
    logging,
    repl::{stdin_source, ChatLoop},
    OllamaClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;

    let args = Args::parse_args();
    let config = Config::from_args(&args);

    debug!(url = %config.chat_url(), model = %config.model, "starting chat session");

    let client = OllamaClient::with_base_url(&config.ollama_url)?;
    let mut chat = ChatLoop::new(client, stdin_source(), std::io::stdout(), config.model);

    chat.run().await;

    Ok(())
}
