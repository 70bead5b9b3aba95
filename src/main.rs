//! CLI entry point for postdeck

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postdeck")]
#[command(version)]
#[command(about = "Load, list and render markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Read posts from this directory instead of the configured one
    #[arg(long, global = true)]
    posts_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every post identifier
    Slugs,

    /// Render a single post
    Show {
        /// Identifier of the post (file name without `.md`)
        slug: String,

        /// Print the whole post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postdeck=debug,info"
    } else {
        "postdeck=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let open = || -> Result<postdeck::Blog> {
        let blog = postdeck::Blog::new(&base_dir)?;
        Ok(match &cli.posts_dir {
            Some(dir) => blog.with_posts_dir(dir),
            None => blog,
        })
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { json } => {
            let blog = open()?;
            tracing::debug!("Listing posts in {:?}", blog.posts_dir());
            postdeck::commands::list::run(&blog, json, &mut out)?;
        }

        Commands::Slugs => {
            let blog = open()?;
            postdeck::commands::slugs::run(&blog, &mut out)?;
        }

        Commands::Show { slug, json } => {
            let blog = open()?;
            postdeck::commands::show::run(&blog, &slug, json, &mut out).await?;
        }

        Commands::Version => {
            writeln!(out, "postdeck version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    out.flush()?;
    Ok(())
}
