use clap::Parser;
use exec_gateway::{GatewayConfig, Provider};
use exec_gateway_server::{create_app, run_server};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to listen on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Provider binding to forward executions to
    #[arg(long, default_value = "direct")]
    provider: Provider,

    /// API key for the selected binding
    #[arg(long, env = "ONECOMPILER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the provider endpoint URL
    #[arg(long, env = "ONECOMPILER_API_URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = GatewayConfig::new(args.provider, args.api_key);
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }

    let app = create_app(config)?;
    run_server(app, args.addr).await?;

    Ok(())
}
