//! Plain-text toy API entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use miniapi::api::{create_router, AppState};
use miniapi::config::Config;
use miniapi::dice::roll_batch;
use miniapi::metrics;
use miniapi::random::RandomSource;
use miniapi::utils::shutdown_signal;
use miniapi::AppError;

/// Plain-text clock, dice and sentence API.
#[derive(Parser, Debug)]
#[command(name = "miniapi")]
#[command(about = "Serve clock, dice and sentence toys over plain-text HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Roll one batch locally and print it.
    Roll {
        /// Die label (d2, d4, d6, d8, d10, d12, d20, d100). All dice when omitted.
        #[arg(short = 't', long = "type")]
        die_type: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let mut config = Config::load()?;
    config.verbose |= args.verbose;

    // Initialize logging
    let filter = if config.verbose {
        EnvFilter::new("miniapi=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(config.log_json.then(|| fmt::layer().json()))
        .with((!config.log_json).then(|| fmt::layer()))
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Roll { die_type }) => cmd_roll(config, die_type),
        Some(Command::Run { port }) => cmd_run(config, port.or(args.port)).await,
        None => cmd_run(config, args.port).await,
    }
}

fn random_source(config: &Config) -> RandomSource {
    match config.rng_seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_clock(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("MINIAPI - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.listen_addr());
    println!("  Log Filter: {}", config.rust_log);
    println!("  Verbose: {}", config.verbose);
    println!("  Log Format: {}", if config.log_json { "json" } else { "text" });
    match config.rng_seed {
        Some(seed) => println!("  RNG Seed: {} (deterministic)", seed),
        None => println!("  RNG Seed: clock"),
    }
    match config.metrics_addr() {
        Some(addr) => println!("  Metrics: http://{}/metrics", addr),
        None => println!("  Metrics: Disabled"),
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Roll one batch without starting the server.
fn cmd_roll(config: Config, die_type: Option<String>) -> anyhow::Result<()> {
    let source = random_source(&config);
    let batch = roll_batch(&source, die_type.as_deref())?;
    println!("{}", batch);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_run(mut config: Config, port_override: Option<u16>) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e).into());
    }

    if let Some(addr) = config.metrics_addr() {
        metrics::install_prometheus(addr).map_err(AppError::from)?;
    }
    // Descriptions only reach a recorder installed before them.
    metrics::init_metrics();

    let random = random_source(&config);
    info!(seed = random.seed(), "Random source ready");
    let app_state = AppState::new(random);

    // Start HTTP server
    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr).await.map_err(AppError::from)?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::from)?;

    info!("HTTP server stopped");
    Ok(())
}
