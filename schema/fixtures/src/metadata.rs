//! Prebuilt class and property metadata, shaped the way the scanning
//! framework would supply it.

use gridmap_mapping::{
    ID_MARKER_KIND,
    marker::{ClassSource, Marker, PropertySource},
    region::{RegionMarkerKind, VALUE_ATTRIBUTE},
};

/// Class metadata for [`crate::model::Person`]: region marker declaring
/// "People", explicit id on the `id` field.
#[must_use]
pub fn person_class() -> ClassSource {
    ClassSource::new("gridmap_test_fixtures::model::Person").with_marker(
        Marker::new(RegionMarkerKind::Region.as_str()).with_attribute(VALUE_ATTRIBUTE, "People"),
    )
}

/// Property metadata for [`crate::model::Person`], in declaration order.
#[must_use]
pub fn person_properties() -> Vec<PropertySource> {
    vec![
        PropertySource::field("id", "Uint64")
            .with_getter_setter()
            .with_marker(Marker::new(ID_MARKER_KIND)),
        PropertySource::field("first_name", "Text").with_getter(),
        PropertySource::field("last_name", "Text").with_getter(),
        PropertySource::field("birth_date", "Date").with_getter_setter(),
        PropertySource::field("gender", "Gender").with_getter_setter(),
        // derived, no backing field
        PropertySource::accessors("full_name", "Text"),
    ]
}

/// An unmarked class; its region name must default to the ident.
#[must_use]
pub fn invoice_class() -> ClassSource {
    ClassSource::new("gridmap_test_fixtures::model::Invoice")
}

/// Property metadata for the unmarked invoice class.
#[must_use]
pub fn invoice_properties() -> Vec<PropertySource> {
    vec![
        PropertySource::field("id", "Uint64").with_getter_setter(),
        PropertySource::field("total", "Decimal").with_getter_setter(),
        PropertySource::field("issued_at", "Timestamp").with_getter(),
    ]
}
