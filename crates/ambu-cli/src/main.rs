use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use ambu_core::search::Engine;
use ambu_infrastructure::AmbuPaths;

mod app;
mod commands;
mod render;

#[derive(Parser)]
#[command(name = "ambu")]
#[command(about = "AMBU - find the phone number of a clinic or medical practice", long_about = None)]
struct Cli {
    /// Remote service address; overrides config and AMBU_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        /// Username; prompted when omitted
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Show configuration and session state
    Status,
    /// Look up a phone number
    Search {
        /// Clinic or practice name
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Lookup engine: local or deepsearch
        #[arg(short, long)]
        engine: Option<Engine>,

        /// Show the per-source breakdown
        #[arg(short, long)]
        details: bool,
    },
    /// Interactive search session
    Repl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AmbuPaths::new(None)?;
    let _guard = init_logging(&paths, cli.verbose);

    let app = app::App::bootstrap(paths, cli.base_url)?;

    match cli.command {
        Commands::Login { username } => commands::login::run(&app, username).await?,
        Commands::Logout => commands::logout::run(&app)?,
        Commands::Status => commands::status::run(&app),
        Commands::Search {
            query,
            engine,
            details,
        } => commands::search::run(&app, &query.join(" "), engine, details).await?,
        Commands::Repl => commands::repl::run(app).await?,
    }

    Ok(())
}

/// Stderr for the user, a daily file under the config directory for later.
///
/// The returned guard flushes the file writer and must outlive `main`'s work.
fn init_logging(paths: &AmbuPaths, verbose: u8) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let stderr_filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    } else {
        EnvFilter::new(default_filter)
    };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    let log_dir = paths.logs_dir();
    let (file_layer, guard) = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&log_dir, "ambu.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
