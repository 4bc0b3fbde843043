pub mod config;
pub mod error;
pub mod io_struct;
pub mod middleware;
pub mod relay_state;
pub mod server;
pub mod transcript;
pub mod upstream;

use config::RelayConfig;
use relay_state::RelayState;
use tokio::signal;

/// Builds the relay and serves it until the server stops or Ctrl+C is received.
pub async fn run(config: RelayConfig) -> anyhow::Result<()> {
    let relay_state = RelayState::new(&config)?;

    tokio::select! {
        res = server::startup(config, relay_state) => {
            res?;
        }
        _ = signal::ctrl_c() => {
            log::info!("Received Ctrl+C, shutting down");
        }
    }
    Ok(())
}
