//! CLI entry point for space-traveling

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "space-traveling")]
#[command(version)]
#[command(about = "Static blog generator backed by a Prismic repository", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Serve the existing public folder without generating first
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List all posts in the repository
    List,

    /// Show a single post
    Show {
        /// Post UID
        uid: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "space_traveling=debug,info"
    } else {
        "space_traveling=info"
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
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let site = space_traveling::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, r#static } => {
            let site = space_traveling::Site::new(&base_dir)?;
            let client = site.connect().await?;

            if !r#static {
                tracing::info!("Generating static files...");
                space_traveling::commands::generate::run_with_source(&site, &client).await?;
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            space_traveling::server::start(&site, Arc::new(client), &ip, port).await?;
        }

        Commands::Clean => {
            let site = space_traveling::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = space_traveling::Site::new(&base_dir)?;
            space_traveling::commands::list::run(&site).await?;
        }

        Commands::Show { uid } => {
            let site = space_traveling::Site::new(&base_dir)?;
            space_traveling::commands::show::run(&site, &uid).await?;
        }

        Commands::Version => {
            println!("space-traveling version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
