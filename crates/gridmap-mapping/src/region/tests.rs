use super::*;
use crate::marker::{ClassSource, Marker};

fn region_marker(kind: RegionMarkerKind, value: &str) -> Marker {
    Marker::new(kind.as_str()).with_attribute(VALUE_ATTRIBUTE, value)
}

#[test]
fn declared_value_wins() {
    let marker = region_marker(RegionMarkerKind::Region, "Foo");

    assert_eq!(resolve_region_name("Invoice", Some(&marker)), "Foo");
}

#[test]
fn empty_value_falls_back_to_ident() {
    let marker = region_marker(RegionMarkerKind::Region, "");

    assert_eq!(resolve_region_name("Invoice", Some(&marker)), "Invoice");
}

#[test]
fn unset_value_falls_back_to_ident() {
    let marker = Marker::new(RegionMarkerKind::Region.as_str());

    assert_eq!(resolve_region_name("Invoice", Some(&marker)), "Invoice");
}

#[test]
fn absent_marker_falls_back_to_ident() {
    assert_eq!(resolve_region_name("Invoice", None), "Invoice");
}

#[test]
fn registry_resolves_first_kind_in_priority_order() {
    let class = ClassSource::new("acme::Order")
        .with_marker(region_marker(RegionMarkerKind::PartitionRegion, "Partitioned"))
        .with_marker(region_marker(RegionMarkerKind::ClientRegion, "ClientSide"));

    let (kind, marker) = RegionMarkerRegistry::default()
        .resolve(&class.markers)
        .unwrap();

    assert_eq!(kind, RegionMarkerKind::ClientRegion);
    assert_eq!(marker.string_attribute(VALUE_ATTRIBUTE), Some("ClientSide"));
}

#[test]
fn reordered_registry_changes_priority() {
    let class = ClassSource::new("acme::Order")
        .with_marker(region_marker(RegionMarkerKind::PartitionRegion, "Partitioned"))
        .with_marker(region_marker(RegionMarkerKind::ClientRegion, "ClientSide"));

    let registry = RegionMarkerRegistry::new([
        RegionMarkerKind::PartitionRegion,
        RegionMarkerKind::ClientRegion,
    ]);
    let (kind, _) = registry.resolve(&class.markers).unwrap();

    assert_eq!(kind, RegionMarkerKind::PartitionRegion);
}

#[test]
fn registry_ignores_unrecognized_kinds() {
    let class = ClassSource::new("acme::Order").with_marker(Marker::new("Entity"));

    assert!(RegionMarkerRegistry::default().resolve(&class.markers).is_none());
}

#[test]
fn kind_round_trips_through_str() {
    for kind in REGION_MARKER_PRIORITY {
        let parsed: RegionMarkerKind = kind.as_str().parse().unwrap();
        assert_eq!(parsed, kind);
    }
}
