use anyhow::Result;
use clap::{Parser, Subcommand};

use orderd::cli::{self, OutputFormat};
use orderd::config::Config;

#[derive(Parser)]
#[command(name = "orderd")]
#[command(about = "Order-status fulfillment webhook for conversational agents", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fulfillment webhook server
    Serve {
        /// Port to listen on (falls back to PORT, then 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Order-status API endpoint (falls back to ORDER_API_URL)
        #[arg(long)]
        api_url: Option<String>,
        /// Timeout for each outbound lookup, in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Look up a single order the way the webhook would
    Lookup {
        /// Order id to look up
        #[arg(long)]
        order_id: String,
        /// Order-status API endpoint (falls back to ORDER_API_URL)
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orderd=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match cli.command {
        Commands::Serve {
            port,
            api_url,
            timeout_secs,
        } => {
            let config = Config::resolve(port, api_url.as_deref(), timeout_secs)?;
            orderd::server::run_server(config).await?;
        }
        Commands::Lookup { order_id, api_url } => {
            let config = Config::resolve(None, api_url.as_deref(), None)?;
            cli::run_lookup(&order_id, &config, format).await?;
        }
    }

    Ok(())
}
