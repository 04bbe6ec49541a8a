mod cli;
mod config;
mod llm;
mod logging;
mod server;
mod store;
mod tools;
mod types;
mod ui;
mod weather;

#[cfg(test)]
mod tests;

use crate::cli::Args;
use crate::config::Settings;
use crate::llm::GeminiClient;
use crate::server::MessageHandler;
use crate::store::SupabaseStore;
use crate::tools::core::ToolRegistry;
use crate::weather::ForecastClient;
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    logging::setup_logging(args.verbose);

    let settings = Settings::from_env()?;
    let port = args.port.unwrap_or(settings.port);

    let store = SupabaseStore::new(settings.supabase_url, settings.supabase_key);
    let generator = GeminiClient::new(settings.gemini_key, settings.gemini_model);
    let forecast = ForecastClient::new();

    let handler = MessageHandler::new(
        ToolRegistry::with_default_tools(),
        Box::new(store),
        Box::new(generator),
        forecast,
    );

    server::serve(handler, port, settings.service_api_key).await
}
