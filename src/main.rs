use clap::Parser;
use ingredient_match::{
    catalog::{Catalog, DEMO_QUERY},
    cli::{commands, Cli, Commands},
    config::{recipes::load_catalog, Settings},
    Result,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,ingredient_match=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            debug!("Running demonstration search");
            commands::demo(
                &mut out,
                &Catalog::builtin(),
                DEMO_QUERY,
                &settings.search_options(),
            )?;
        }
        Commands::Search {
            query,
            recipes,
            normalization,
            delimiter,
            json,
        } => {
            let options =
                settings.resolve_search_options(normalization, delimiter.as_deref())?;
            let catalog = open_catalog(&settings, recipes)?;
            commands::search(&mut out, &catalog, &query, &options, json)?;
        }
        Commands::Show { id, recipes, json } => {
            let catalog = open_catalog(&settings, recipes)?;
            commands::show(&mut out, &catalog, id, json)?;
        }
        Commands::List { ingredient, recipes } => {
            let catalog = open_catalog(&settings, recipes)?;
            commands::list(&mut out, &catalog, ingredient.as_deref())?;
        }
        Commands::Validate { path } => {
            commands::validate(&mut out, &path)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn open_catalog(settings: &Settings, recipes: Option<PathBuf>) -> Result<Catalog> {
    let path = recipes.or_else(|| settings.catalog.path.clone());
    load_catalog(path.as_deref())
}
