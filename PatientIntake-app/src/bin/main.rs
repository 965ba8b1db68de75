use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use patient_intake_app::console::Console;
use patient_intake_client::api::create_client;
use patient_intake_client::config::ClientConfig;
use patient_intake_client::session::{InMemorySession, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging with environment settings
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Backend origin comes from the environment or the default
    let config = ClientConfig::from_env();
    info!("Using backend at {}", config.base_url);

    let api = create_client(config);

    // One session shared by every page, like a browser tab's storage
    let store = InMemorySession::new();
    info!("Session {} started", store.session_id());
    let session: Session = Arc::new(store);

    let console = Console::new(api, session);
    console.run().await?;

    Ok(())
}
