//! Batch entry point: fetch the national daily-cases dataset and write it
//! to `stats.csv`.

use tracing::info;
use tracing_subscriber::EnvFilter;
use ukcovid_dl::{Config, DatasetFetcher, FilterSet, Structure, output};

#[tokio::main]
async fn main() -> ukcovid_dl::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::default();

    let filters = FilterSet::new().with("areaType=overview");
    let structure = Structure::new()
        .field("date", "date")
        .field("daily", "newCasesByPublishDate");

    let fetcher = DatasetFetcher::new(&config)?;
    let csv = fetcher.fetch(&filters, &structure).await?;

    info!(lines = csv.lines().count(), "dataset fetched");
    output::write_dataset(&config.output_path, &csv).await?;

    Ok(())
}
