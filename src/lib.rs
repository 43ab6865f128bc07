//! # ukcovid-dl
//!
//! Downloader for the UK coronavirus dashboard API (v1). Requests a dataset
//! page by page, detects the end of pagination, and assembles the pages into
//! a single CSV string with the repeated column header removed from every
//! page after the first.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ukcovid_dl::{Config, DatasetFetcher, FilterSet, Structure};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!
//!     let filters = FilterSet::new().with("areaType=overview");
//!     let structure = Structure::new()
//!         .field("date", "date")
//!         .field("daily", "newCasesByPublishDate");
//!
//!     let fetcher = DatasetFetcher::new(&config)?;
//!     let csv = fetcher.fetch(&filters, &structure).await?;
//!
//!     ukcovid_dl::output::write_dataset(&config.output_path, &csv).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Paginated dataset fetching
pub mod fetcher;
/// Dataset file writing
pub mod output;
/// Query parameter types (filters and structure)
pub mod query;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::DatasetFetcher;
pub use query::{FilterSet, Structure};
