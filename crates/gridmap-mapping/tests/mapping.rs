//! End-to-end mapping pass over the shared fixtures: one builder per
//! class, properties registered in discovery order.

use gridmap_mapping::prelude::*;
use gridmap_test_fixtures::{metadata, model};

fn build(class: &ClassSource, sources: Vec<PropertySource>) -> EntityDescriptor {
    let mut builder = EntityBuilder::new(class, &RegionMarkerRegistry::default());

    for source in sources {
        builder.register(source).expect("mapping fixture");
    }

    builder.finish()
}

#[test]
fn person_maps_to_the_people_region() {
    let entity = build(&metadata::person_class(), metadata::person_properties());

    assert_eq!(entity.region_name(), "People");
    assert_eq!(entity.region_marker_kind(), Some(RegionMarkerKind::Region));
    assert_eq!(entity.path(), "gridmap_test_fixtures::model::Person");
    assert_eq!(entity.ident(), "Person");
}

#[test]
fn person_id_is_the_explicit_field() {
    let entity = build(&metadata::person_class(), metadata::person_properties());
    let id = entity.id_property().expect("person has an id");

    assert_eq!(id.name(), "id");
    assert!(id.is_explicit_id());
    assert!(id.is_simple_type());
}

#[test]
fn person_derived_property_uses_accessors() {
    let entity = build(&metadata::person_class(), metadata::person_properties());
    let full_name = entity.get("full_name").expect("derived property");

    assert!(full_name.uses_accessor_methods());
    assert!(full_name.association().target.is_none());
}

#[test]
fn person_field_backed_properties_use_field_access() {
    let entity = build(&metadata::person_class(), metadata::person_properties());

    for name in ["id", "first_name", "last_name", "birth_date", "gender"] {
        let property = entity.get(name).expect("declared property");
        assert!(!property.uses_accessor_methods(), "{name} should use its field");
    }
}

#[test]
fn person_gender_is_not_a_simple_type() {
    let entity = build(&metadata::person_class(), metadata::person_properties());

    assert!(!entity.get("gender").unwrap().is_simple_type());
    assert!(entity.get("birth_date").unwrap().is_simple_type());
}

#[test]
fn invoice_defaults_region_and_conventional_id() {
    let entity = build(&metadata::invoice_class(), metadata::invoice_properties());

    assert_eq!(entity.region_name(), "Invoice");
    assert!(entity.region_marker().is_none());

    let id = entity.id_property().expect("conventional id");
    assert_eq!(id.name(), "id");
    assert!(!id.is_explicit_id());
}

#[test]
fn fixture_model_agrees_with_its_metadata() {
    let person = model::Person::new(
        "Jon",
        "Doe",
        Some(model::birth_date(1974, 5, 5)),
        Some(model::Gender::Male),
    )
    .with_next_id();

    let entity = build(&metadata::person_class(), metadata::person_properties());

    // every metadata property except the derived one is a struct field
    for property in entity.properties() {
        if property.source().has_field {
            let json = serde_json::to_value(&person).expect("person serializes");
            assert!(
                json.get(property.name()).is_some(),
                "metadata names unknown field {}",
                property.name()
            );
        }
    }
}
