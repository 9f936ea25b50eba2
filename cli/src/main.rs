use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cinescramble_core as game;
use clap::Parser;

mod render;
mod repl;

#[derive(Parser, Debug)]
#[command(name = "cinescramble", version, about = "Guess the movie from its plot and a scrambled letter grid")]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Movie catalog file, JSON when it ends in `.json`, TOML otherwise
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Print the session as JSON after each command
    #[arg(long)]
    json: bool,
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<game::Catalog> {
    let Some(path) = path else {
        return Ok(game::Catalog::builtin());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read catalog {}", path.display()))?;
    let catalog = if path.extension().is_some_and(|ext| ext == "json") {
        game::Catalog::from_json_str(&text)
            .with_context(|| format!("Could not parse catalog {}", path.display()))?
    } else {
        let file: game::CatalogFile = toml::from_str(&text)
            .with_context(|| format!("Could not parse catalog {}", path.display()))?;
        game::Catalog::try_from(file)?
    };
    log::info!("loaded {} movies from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let catalog = load_catalog(args.catalog.as_deref())?;
    let rng = match args.seed {
        Some(seed) => game::seeded_rng(seed),
        None => game::entropy_rng(),
    };
    let mut session = game::Session::new(catalog, rng);

    let format = if args.json {
        repl::OutputFormat::Json
    } else {
        repl::OutputFormat::Text
    };
    let stdin = io::stdin();
    repl::run_with_io(&mut session, &mut stdin.lock(), &mut io::stdout(), format)?;

    log::debug!("final score: {}", session.score());
    Ok(())
}
