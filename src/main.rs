//! CLI entry point for codenpixel

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "codenpixel")]
#[command(version)]
#[command(about = "An htmx blog server for game development and graphics programming", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "0.0.0.0")]
        ip: String,
    },

    /// List site information
    List {
        /// Type of content to list (posts, tags, categories)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.debug {
        "codenpixel=debug,tower_http=debug,info"
    } else {
        "codenpixel=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    match cli.command {
        Commands::Serve { port, ip } => {
            let site = codenpixel::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            site.serve(&ip, port).await?;
        }

        Commands::List { r#type } => {
            let site = codenpixel::Site::new(&base_dir)?;
            site.list(&r#type)?;
        }

        Commands::Version => {
            println!("codenpixel version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
