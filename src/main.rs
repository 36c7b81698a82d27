//! Photo Gallery - terminal gallery with click-to-cycle ordering
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use gallery_core::logging;
use photo_gallery::EngineOptions;

/// Photo Gallery - browse a photo collection by date or any grouping key
#[derive(Parser, Debug)]
#[command(name = "gallery")]
#[command(about = "Browse a photo collection by date or any grouping key", long_about = None)]
struct Args {
    /// Gallery project directory (holds .gallery/, collections/, dictionary/)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Collection to show instead of the configured one
    #[arg(long, short)]
    collection: Option<String>,

    /// Language for group labels and control captions
    #[arg(long)]
    lang: Option<String>,

    /// Run in headless mode (NDJSON output, commands on stdin)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let options = EngineOptions {
        collection: args.collection,
        language: args.lang,
    };

    if args.headless {
        photo_gallery::run_headless(&project_path, options).await?;
    } else {
        photo_gallery::run_with_project(&project_path, options).await?;
    }

    Ok(())
}
