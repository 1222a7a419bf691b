/// Maxiplay CLI - replay playback intents against a catalog snapshot
use anyhow::Context;
use clap::{Parser, Subcommand};
use maxiplay_cli::{CliConfig, ListSource, Player, SnapshotCatalog};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "maxiplay-cli")]
#[command(about = "Headless Maxiplay playback driver", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./maxiplay.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run transport actions and print the session after each one
    Play {
        /// Catalog snapshot (JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// List pressed items come from: latest, recommended, uploads,
        /// favorites, recently-played or playlist:<id>
        #[arg(short, long)]
        list: Option<String>,

        /// press:<id>[@<list>], toggle, next, prev, seek:<secs>,
        /// skip:<±secs>, skip:+, skip:-, rate:<x>
        #[arg(required = true)]
        actions: Vec<String>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maxiplay=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Play {
            catalog,
            list,
            actions,
        } => {
            play(config, catalog, list, &actions).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn play(
    config: CliConfig,
    catalog: Option<PathBuf>,
    list: Option<String>,
    actions: &[String],
) -> anyhow::Result<()> {
    let path = catalog
        .or_else(|| config.catalog.snapshot.clone())
        .context("missing --catalog or catalog.snapshot setting")?;
    let catalog = SnapshotCatalog::open(&path)
        .with_context(|| format!("failed to load catalog snapshot {}", path.display()))?;

    let list: ListSource = list
        .as_deref()
        .unwrap_or(&config.catalog.default_list)
        .parse()?;

    tracing::info!("Catalog: {}", path.display());
    tracing::info!("Default list: {:?}", list);

    let player = Player::new(Arc::new(catalog), list, config.playback)?;

    for action in actions {
        let report = player.run(action).await;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
