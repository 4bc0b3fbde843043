use chat_relay::config::{CliArgs, RelayConfig};
use chat_relay::server::init_logging;
use clap::Parser;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    if let Err(e) = dotenv {
        log::warn!(".env file not loaded: {}", e);
    }

    let config = match RelayConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    chat_relay::run(config).await
}
