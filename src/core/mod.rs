pub mod catalog;
pub mod regions;
pub mod resolver;

pub use crate::domain::model::{Money, Rate, Selection, TaxMode, ValidationPolicy};
pub use crate::domain::ports::SettingsProvider;
pub use crate::utils::error::Result;
