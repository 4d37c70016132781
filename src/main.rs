use clap::Parser;
use pickup_shipping::utils::{logger, validation::Validate};
use pickup_shipping::{Catalog, CliConfig, RateResolver, Selection, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pickup-shipping CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let catalog = Catalog::global();

    if config.list_regions {
        for entry in catalog.regions() {
            println!("{} ({} cities)", entry.id, entry.cities.len());
        }
        return Ok(());
    }

    if let Some(region) = &config.cities {
        for city in catalog.cities_of(region) {
            println!("{}", city);
        }
        return Ok(());
    }

    let selection = Selection::new(
        config.region.clone().unwrap_or_default(),
        config.city.clone().unwrap_or_default(),
    );
    let settings_file = config.config.clone();

    let rate = match settings_file {
        Some(path) => {
            let file_config = match TomlConfig::from_file(&path) {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("❌ Failed to load settings from {}: {}", path.display(), e);
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
            };
            if let Err(e) = file_config.validate_config() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
            RateResolver::new(catalog, file_config).quote(&selection)
        }
        None => RateResolver::new(catalog, config).quote(&selection),
    };

    match rate {
        Some(rate) => {
            tracing::info!("✅ Rate resolved: {} ({})", rate.label, rate.cost);
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }
        None => {
            tracing::info!("No rate for selection: {:?}", selection);
            eprintln!("No shipping rate available for this selection");
            std::process::exit(1);
        }
    }

    Ok(())
}
