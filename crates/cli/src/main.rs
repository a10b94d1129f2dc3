use captive_dns_domain::{CliOverrides, LocalRecordConfig};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "captive-dns")]
#[command(version)]
#[command(about = "Captive DNS - answers every lookup from a small local record table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// TTL of answers, in seconds
    #[arg(long)]
    ttl: Option<u32>,

    /// Extra record, may be repeated (e.g. `--record '*=192.168.4.1'`)
    #[arg(short = 'r', long = "record", value_name = "NAME=IP")]
    records: Vec<LocalRecordConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        ttl: cli.ttl,
        records: cli.records,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Captive DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
            }
            shutdown.cancel();
        }
    });

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(bind_addr, dns_services, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
