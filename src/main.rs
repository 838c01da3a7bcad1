use anyhow::Result;
use quickadd::commands::Cli;
use quickadd::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured log output only in debug mode; normal runs keep the
    // console clean for the message macros.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu()
}
