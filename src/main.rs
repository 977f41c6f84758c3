use tracing_subscriber::EnvFilter;
use whosin::commands::Cli;
use whosin::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // In debug mode the message macros route through tracing, so a
    // subscriber has to be installed before the first message.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu().await
}
