mod game_handler;
mod logger;
mod server_config;
mod web_server;

use clap::Parser;

use server_config::ServerConfig;

#[derive(Parser)]
#[command(name = "tic_tac_toe_server")]
struct Args {
    /// Path to the YAML config file; defaults are used when it is absent.
    #[arg(long, default_value = "server_config.yaml")]
    config: String,

    /// Overrides the configured port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_logger();

    let mut config = ServerConfig::load_from_file(&args.config)?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    web_server::run_web_server(config).await;

    Ok(())
}
