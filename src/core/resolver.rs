use crate::core::catalog::Catalog;
use crate::domain::model::{Rate, Selection, TaxMode, ValidationPolicy, METHOD_ID};
use crate::domain::ports::SettingsProvider;

/// Turns an untrusted buyer selection into either a rate or "no rate".
///
/// A single-shot validate-then-compute transformation: no state, no side
/// effects, safe to share across threads. When validation fails the rate is
/// withheld entirely rather than emitted with a zero cost, so the checkout
/// never shows a free shipping line by accident.
pub struct RateResolver<C: SettingsProvider> {
    catalog: &'static Catalog,
    settings: C,
}

impl<C: SettingsProvider> RateResolver<C> {
    pub fn new(catalog: &'static Catalog, settings: C) -> Self {
        Self { catalog, settings }
    }

    pub fn quote(&self, selection: &Selection) -> Option<Rate> {
        if !self.settings.enabled() {
            tracing::debug!("shipping method disabled, no rate");
            return None;
        }

        let region = selection.region.trim();
        let city = selection.city.trim();

        if region.is_empty() {
            tracing::debug!("no region selected, no rate");
            return None;
        }
        if city.is_empty() {
            tracing::debug!(region, "no city selected, no rate");
            return None;
        }
        if self.settings.validation_policy() == ValidationPolicy::Strict
            && !self.catalog.is_valid_city(region, city)
        {
            tracing::debug!(region, city, "city not in region, no rate");
            return None;
        }

        Some(Rate {
            id: METHOD_ID,
            label: self.settings.title().to_string(),
            cost: self.settings.cost(),
            calc_tax: TaxMode::PerItem,
        })
    }
}
