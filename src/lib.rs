pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::JmaPageFetcher;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use self::core::{etl::EtlEngine, pipeline::JmaPipeline};
pub use domain::model::{DateRange, PageKey, RawTable, RawTableRow, WeatherRecord};
pub use utils::error::{EtlError, Result};
