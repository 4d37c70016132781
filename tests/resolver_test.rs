use pickup_shipping::{Catalog, Money, RateResolver, Selection, TaxMode, TomlConfig};

fn resolver_with(settings: &str) -> RateResolver<TomlConfig> {
    let config = TomlConfig::from_toml_str(settings).expect("settings should parse");
    config.validate_config().expect("settings should validate");
    RateResolver::new(Catalog::global(), config)
}

#[test]
fn test_valid_selection_yields_flat_rate() {
    let resolver = resolver_with("");
    let rate = resolver
        .quote(&Selection::new("Bayern", "Nürnberg-City"))
        .expect("valid selection should produce a rate");

    assert_eq!(rate.id, "custom_shipping_method");
    assert_eq!(rate.label, "Custom Shipping");
    assert_eq!(rate.cost, Money::from_cents(1000));
    assert_eq!(rate.calc_tax, TaxMode::PerItem);
}

#[test]
fn test_incomplete_selection_yields_no_rate() {
    let resolver = resolver_with("");
    assert!(resolver.quote(&Selection::new("", "")).is_none());
    assert!(resolver.quote(&Selection::new("Bayern", "")).is_none());
    assert!(resolver.quote(&Selection::new("", "Nürnberg-City")).is_none());
}

#[test]
fn test_whitespace_only_input_counts_as_empty() {
    let resolver = resolver_with("");
    assert!(resolver.quote(&Selection::new("   ", "Nürnberg-City")).is_none());
    assert!(resolver.quote(&Selection::new("Bayern", "\t")).is_none());
}

#[test]
fn test_strict_policy_cross_validates_against_catalog() {
    let resolver = resolver_with("[validation]\npolicy = \"strict\"\n");
    assert!(resolver.quote(&Selection::new("Bayern", "Paris")).is_none());
    assert!(resolver.quote(&Selection::new("Atlantis", "Passau")).is_none());
}

#[test]
fn test_permissive_policy_only_requires_non_empty_fields() {
    let resolver = resolver_with("[validation]\npolicy = \"permissive\"\n");
    let rate = resolver.quote(&Selection::new("Bayern", "Paris"));
    assert!(rate.is_some());
}

#[test]
fn test_disabled_method_never_quotes() {
    let resolver = resolver_with("[method]\nenabled = false\n");
    assert!(resolver
        .quote(&Selection::new("Bayern", "Nürnberg-City"))
        .is_none());
}

#[test]
fn test_configured_label_and_cost_flow_into_rate() {
    let resolver = resolver_with(
        r#"
[method]
title = "Store Pickup"

[rate]
cost = 4.99
"#,
    );
    let rate = resolver
        .quote(&Selection::new("Hessen", "Kassel"))
        .unwrap();
    assert_eq!(rate.label, "Store Pickup");
    assert_eq!(rate.cost, Money::from_cents(499));
}

#[test]
fn test_quote_is_idempotent() {
    let resolver = resolver_with("");
    let selection = Selection::new("Sachsen", "Plauen");
    let first = resolver.quote(&selection);
    let second = resolver.quote(&selection);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_rate_serializes_with_fixed_point_cost() {
    let resolver = resolver_with("");
    let rate = resolver
        .quote(&Selection::new("Berlin", "Berlin-Mitte"))
        .unwrap();
    let json = serde_json::to_value(&rate).unwrap();

    assert_eq!(json["id"], "custom_shipping_method");
    assert_eq!(json["label"], "Custom Shipping");
    assert_eq!(json["cost"], "10.00");
    assert_eq!(json["calc_tax"], "per_item");
}
