use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use web_calculator::calculator::{Calculator, Operation};
use web_calculator::config::Config;
use web_calculator::{logging, observability, server};

#[derive(Parser)]
#[command(name = "web_calculator")]
#[command(about = "Four-function calculator served over HTTP")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Disable the Prometheus /metrics endpoint
        #[arg(long)]
        no_metrics: bool,
    },
    /// Evaluate a single operation and print the result
    Eval {
        /// One of: add, subtract, multiply, divide
        operation: Operation,
        /// First operand (JSON value, e.g. 5 or 2.5)
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second operand
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
}

/// Operands arrive as text; anything that isn't valid JSON is kept as a string
/// so the calculator rejects it as non-numeric.
fn parse_operand(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env()?;

    let _guard = logging::init_logging(&config.logging)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_metrics,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if no_metrics {
                config.metrics.enabled = false;
            }

            if config.metrics.enabled {
                if let Err(e) = observability::init() {
                    warn!("Metrics disabled: {}", e);
                }
            }

            info!(host = %config.server.host, port = config.server.port, "Starting calculator server");
            let calculator = Arc::new(Calculator::with_tracing());
            server::start_server(&config, calculator).await?;
        }
        Commands::Eval { operation, a, b } => {
            let calculator = Calculator::with_tracing();
            let result = calculator.evaluate(operation, &parse_operand(&a), &parse_operand(&b))?;
            println!("{}", result);
        }
    }

    Ok(())
}
