//! Ledger Web CLI
//!
//! Command-line interface for the Ledger Analytics web shells:
//! - Serve an app shell over HTTP
//! - Print a route table
//! - Render a single path to stdout
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ledger_web::app::{AppShell, Navigation, ShellKind};
use ledger_web::config::{generate_default_config, Config};
use ledger_web::logging;
use ledger_web::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "ledger-web")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Server-rendered web shells for Ledger Analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve an app shell over HTTP
    Serve {
        /// App shell (pages, plots)
        #[arg(long)]
        shell: Option<ShellKind>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the route table
    Routes {
        /// App shell (pages, plots)
        #[arg(long)]
        shell: Option<ShellKind>,
        #[arg(short, long, value_enum, default_value = "table")]
        format: RoutesFormat,
    },

    /// Resolve a path and print the rendered document
    Render {
        /// Request path, e.g. /plot
        path: String,
        /// App shell (pages, plots)
        #[arg(long)]
        shell: Option<ShellKind>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RoutesFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    logging::init(&loaded.config.logging);
    loaded.report();
    let mut config = loaded.config;

    match cli.command {
        Commands::Serve { shell, host, port } => {
            if let Some(shell) = shell {
                config.app.shell = shell;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Starting ledger-web v{}", env!("CARGO_PKG_VERSION"));

            let app = build_app(&config, None);
            serve(AppState::new(app), &config.server)
                .await
                .context("server failed")?;
        }

        Commands::Routes { shell, format } => {
            let app = build_app(&config, shell);
            match format {
                RoutesFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&app.table().summaries())?);
                }
                RoutesFormat::Table => {
                    println!("{:<12} {:<12} {}", "PATH", "NAME", "COMPONENT");
                    for entry in app.table() {
                        println!(
                            "{:<12} {:<12} {}",
                            entry.path,
                            entry.name,
                            entry.component.name()
                        );
                    }
                }
            }
        }

        Commands::Render { path, shell } => {
            let app = build_app(&config, shell);
            match app.navigate(&path) {
                Navigation::Page { status, document } => {
                    if status != 200 {
                        eprintln!("{} {}: no matching route", status, path);
                    }
                    println!("{}", document.to_html());
                }
                Navigation::Redirect { location } => {
                    println!("Redirect: {} -> {}", path, location);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn build_app(config: &Config, shell: Option<ShellKind>) -> AppShell {
    AppShell::new(
        shell.unwrap_or(config.app.shell),
        config.metadata.clone(),
        config.app.font.clone(),
        config.app.not_found,
    )
}
