pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use self::core::{catalog::Catalog, regions::RegionEntry, resolver::RateResolver};
pub use domain::model::{Money, Rate, Selection, TaxMode, ValidationPolicy};
pub use domain::ports::SettingsProvider;
pub use utils::error::{Result, ShippingError};
