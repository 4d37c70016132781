use crate::core::regions::{RegionEntry, REGIONS, SELECT_REGION_PROMPT};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Read-only view over the region→cities reference table.
///
/// Built once per process and shared freely afterwards; there are no mutation
/// operations. Lookups are permissive: an unknown or empty region id yields
/// an empty city list, never an error.
#[derive(Debug)]
pub struct Catalog {
    regions: &'static [RegionEntry],
    by_id: HashMap<&'static str, &'static RegionEntry>,
}

impl Catalog {
    /// The process-wide catalog over the built-in region table.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(REGIONS))
    }

    fn new(regions: &'static [RegionEntry]) -> Self {
        let by_id = regions.iter().map(|entry| (entry.id, entry)).collect();
        Self { regions, by_id }
    }

    /// All regions in canonical display order. The "no selection" sentinel is
    /// not included here.
    pub fn regions(&self) -> &'static [RegionEntry] {
        self.regions
    }

    /// `(id, name)` pairs for rendering a region picker, prefixed with the
    /// empty-identifier "no selection" entry.
    pub fn region_options(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        std::iter::once(("", SELECT_REGION_PROMPT))
            .chain(self.regions.iter().map(|entry| (entry.id, entry.name)))
    }

    pub fn get(&self, region_id: &str) -> Option<&'static RegionEntry> {
        self.by_id.get(region_id).copied()
    }

    /// Cities of a region; empty slice for an unknown or empty id.
    pub fn cities_of(&self, region_id: &str) -> &'static [&'static str] {
        self.get(region_id).map_or(&[], |entry| entry.cities)
    }

    /// True iff `city` appears in `cities_of(region_id)`.
    pub fn is_valid_city(&self, region_id: &str, city: &str) -> bool {
        self.cities_of(region_id).contains(&city)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
