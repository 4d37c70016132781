use pickup_shipping::Catalog;
use std::collections::HashSet;

#[test]
fn test_every_region_has_unique_nonempty_cities() {
    let catalog = Catalog::global();
    for entry in catalog.regions() {
        assert!(!entry.cities.is_empty(), "{} has no cities", entry.id);
        let unique: HashSet<_> = entry.cities.iter().collect();
        assert_eq!(
            unique.len(),
            entry.cities.len(),
            "{} has duplicate cities",
            entry.id
        );
    }
}

#[test]
fn test_every_catalog_pair_is_valid() {
    let catalog = Catalog::global();
    for entry in catalog.regions() {
        for city in entry.cities {
            assert!(
                catalog.is_valid_city(entry.id, city),
                "{} / {} should validate",
                entry.id,
                city
            );
        }
    }
}

#[test]
fn test_foreign_city_is_invalid() {
    let catalog = Catalog::global();
    assert!(!catalog.is_valid_city("Bayern", "Paris"));
    // "Berlin-Mitte" exists, but under Berlin rather than Bayern.
    assert!(!catalog.is_valid_city("Bayern", "Berlin-Mitte"));
    assert!(catalog.is_valid_city("Berlin", "Berlin-Mitte"));
}

#[test]
fn test_unknown_region_lookups_return_empty() {
    let catalog = Catalog::global();
    assert!(catalog.cities_of("").is_empty());
    assert!(catalog.cities_of("nonexistent-region").is_empty());
    assert!(!catalog.is_valid_city("nonexistent-region", "Passau"));
}

#[test]
fn test_canonical_order_and_count() {
    let catalog = Catalog::global();
    assert_eq!(catalog.len(), 16);
    assert!(!catalog.is_empty());

    let ids: Vec<_> = catalog.regions().iter().map(|r| r.id).collect();
    assert_eq!(ids.first(), Some(&"Baden-Württemberg"));
    assert_eq!(ids.last(), Some(&"Thüringen"));
    assert!(ids.contains(&"Mecklenburg-Vorpommern"));
}

#[test]
fn test_sentinel_appears_only_in_region_options() {
    let catalog = Catalog::global();
    assert!(catalog.regions().iter().all(|r| !r.id.is_empty()));

    let mut options = catalog.region_options();
    assert_eq!(options.next(), Some(("", "Select a Region")));
    assert_eq!(options.next(), Some(("Baden-Württemberg", "Baden-Württemberg")));
}

#[test]
fn test_city_matching_is_exact() {
    let catalog = Catalog::global();
    // City names are matched verbatim, casing quirks included.
    assert!(catalog.is_valid_city("Bremen", "bremen-habenhausen"));
    assert!(!catalog.is_valid_city("Bremen", "Bremen-Habenhausen"));
    assert!(catalog.is_valid_city("Bayern", "Nürnberg-City"));
    assert!(catalog.is_valid_city("Niedersachsen", "Dein MediaMarkt Wolfsburg-City"));
}
