use crate::domain::model::{Money, ValidationPolicy};

/// Settings surface exposed to the storefront/admin layer. Implemented by
/// both the CLI flags and the TOML settings file.
pub trait SettingsProvider: Send + Sync {
    fn enabled(&self) -> bool;
    fn title(&self) -> &str;
    fn cost(&self) -> Money;
    fn validation_policy(&self) -> ValidationPolicy;
}
