use clap::{Parser, Subcommand};
use esqui_core::{AppConfig, ResortCatalog, ResortSlug};
use esqui_scraper::ResortClient;

#[derive(Debug, Parser)]
#[command(name = "esqui-cli")]
#[command(about = "Ski resort status scraper command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape resorts and print their status records as JSON
    Scrape {
        /// Resort slugs to scrape, in order (e.g. sierra-nevada)
        #[arg(value_parser = parse_slug, required_unless_present = "all")]
        slugs: Vec<ResortSlug>,
        /// Scrape every resort in the catalog
        #[arg(long, conflicts_with = "slugs")]
        all: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the resort catalog
    Resorts,
}

fn parse_slug(raw: &str) -> Result<ResortSlug, String> {
    ResortSlug::parse(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = esqui_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scrape { slugs, all, pretty } => run_scrape(&config, slugs, all, pretty).await,
        Commands::Resorts => {
            let catalog = esqui_core::load_resorts(&config.resorts_path)?;
            print!("{}", render_catalog(&catalog));
            Ok(())
        }
    }
}

async fn run_scrape(
    config: &AppConfig,
    slugs: Vec<ResortSlug>,
    all: bool,
    pretty: bool,
) -> anyhow::Result<()> {
    let slugs = if all {
        esqui_core::load_resorts(&config.resorts_path)?
            .slugs()
            .cloned()
            .collect()
    } else {
        slugs
    };

    let client = ResortClient::from_config(config)?;
    tracing::info!(count = slugs.len(), source = client.base_url(), "scraping resorts");
    let records = client.extract_all(&slugs).await;

    let output = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{output}");

    let failed = records.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        tracing::warn!(failed, total = records.len(), "some resorts could not be scraped");
    }
    Ok(())
}

fn render_catalog(catalog: &ResortCatalog) -> String {
    let width = catalog
        .slugs()
        .map(|s| s.as_str().len())
        .max()
        .unwrap_or(0);

    catalog
        .iter()
        .map(|r| {
            format!(
                "{:<width$}  {}{}\n",
                r.slug.as_str(),
                r.slug.display_name(),
                r.region
                    .as_deref()
                    .map(|region| format!(" ({region})"))
                    .unwrap_or_default(),
            )
        })
        .collect()
}
