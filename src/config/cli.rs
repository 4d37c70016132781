use crate::domain::model::{Money, ValidationPolicy, DEFAULT_TITLE};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pickup-shipping")]
#[command(about = "Flat-rate shipping quotes for region/city pickup locations")]
pub struct CliConfig {
    #[arg(long, help = "Region identifier, e.g. 'Bayern'")]
    pub region: Option<String>,

    #[arg(long, help = "Pickup city within the region")]
    pub city: Option<String>,

    #[arg(long, default_value = DEFAULT_TITLE, help = "Label shown on the rate")]
    pub title: String,

    #[arg(long, default_value = "10.00", help = "Flat cost in major currency units")]
    pub cost: Money,

    #[arg(long, help = "Skip catalog cross-validation of the city")]
    pub permissive: bool,

    #[arg(long, value_name = "FILE", help = "Load settings from a TOML file instead of flags")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "List all regions with their city counts")]
    pub list_regions: bool,

    #[arg(long, value_name = "REGION", help = "List the cities of one region")]
    pub cities: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("title", &self.title)?;
        validation::validate_range("cost", self.cost.major(), 0.0, 100_000.0)?;
        Ok(())
    }
}

impl SettingsProvider for CliConfig {
    // Invoking the quote command implies the method is on; `enabled` is a
    // storefront toggle and only configurable through the settings file.
    fn enabled(&self) -> bool {
        true
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn cost(&self) -> Money {
        self.cost
    }

    fn validation_policy(&self) -> ValidationPolicy {
        if self.permissive {
            ValidationPolicy::Permissive
        } else {
            ValidationPolicy::Strict
        }
    }
}
