use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use recipebook::core::catalog::Catalog;
use recipebook::core::favorites::{FavoritesBook, JsonFileStorage};
use recipebook::core::session::Session;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Browse, search and favorite recipes")]
struct Cli {
    /// Override the favorites storage file
    #[arg(long, value_name = "FILE")]
    favorites_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "recipebook=debug"
    } else {
        "recipebook=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let storage = match args.favorites_file {
        Some(path) => JsonFileStorage::new(path),
        None => JsonFileStorage::default_location()?,
    };
    tracing::debug!("Favorites stored at {:?}", storage.path());

    let catalog = Catalog::builtin()?;
    let favorites = FavoritesBook::open(storage);
    let session = Session::new(catalog, favorites);

    run(session)
}

#[cfg(feature = "gui")]
fn run(session: Session<JsonFileStorage>) -> anyhow::Result<()> {
    recipebook::gui::run(session)
        .map_err(|err| anyhow::anyhow!("Failed to run the application: {err}"))
}

#[cfg(not(feature = "gui"))]
fn run(_session: Session<JsonFileStorage>) -> anyhow::Result<()> {
    anyhow::bail!("recipebook was built without the `gui` feature")
}
