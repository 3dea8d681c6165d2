// Canonical flat record for one entity (organization, provider, or service)
//
// The record is the unifying format between producers and consumers: a
// scraper or spreadsheet import builds records with whatever raw fields it
// found, middleware normalizes them, and the persistence layer only ever
// sees records that validate. Producers never touch the database models and
// the database models are not shaped around any one scraper.
//
// Construction always succeeds, even with no name, so partially known data
// can be represented and validated later at the persistence boundary.

use crate::value::RawValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// WELL-KNOWN FLAG NAMES
// ============================================================================

/// Names of the boolean-like extension fields producers commonly supply.
///
/// The flag map accepts arbitrary names; these constants exist so producers
/// and consumers agree on spelling for the ones that already circulate.
pub mod flag_names {
    /// Provider follows the informed-consent (ICATH) model
    pub const IS_ICATH: &str = "is_icath";

    /// Provider follows WPATH standards of care
    pub const IS_WPATH: &str = "is_wpath";

    /// Sliding-scale fees offered
    pub const SLIDING_SCALE: &str = "sliding_scale";

    /// Premises are wheelchair accessible
    pub const WHEELCHAIR_ACCESSIBLE: &str = "wheelchair_accessible";
}

// ============================================================================
// RESOURCE RECORD
// ============================================================================

/// One entity gathered from a data source.
///
/// Core fields are flat strings; the schema has grown over time and new
/// fields must be `#[serde(default)]` and skip serialization when absent so
/// records written by an older, smaller schema still deserialize cleanly.
///
/// Two field pairs carry a dual representation: `category_name` /
/// `population_names` hold the raw `;`-delimited source string, while
/// `category_names` / `population_tags` hold the derived canonical set.
/// Normalization fills the derived slot only when it is empty, so curated
/// data is never overwritten by a re-derivation from the raw string.
///
/// Every transformation consumes the record and returns a successor value;
/// nothing mutates a record in place after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Entity name. The one field required for validity; may still be
    /// absent on a freshly scraped record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Full mailing address as one string, when the source does not break
    /// it into street/city/state components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Where this record came from (scraper name, import file, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Raw `;`-delimited category list from the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Derived category set. Order is not significant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_names: Vec<String>,

    /// Raw `;`-delimited population list from the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_names: Option<String>,

    /// Derived population tag set. Order is not significant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub population_tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    /// National Provider Identifier, for records describing a provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,

    /// Whether the record should be shown to end users. Defaults to true;
    /// after normalization this is always a concrete boolean, and an
    /// absent or unparseable value resolves to not-visible.
    #[serde(default = "default_visible")]
    pub visible: RawValue,

    /// Verification date as a raw `YYYY-MM-DD` string. Kept as text so a
    /// malformed value can be represented and rejected by validation
    /// instead of failing at construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_verified: Option<String>,

    /// Boolean-like extension fields (see [`flag_names`]). Every entry is
    /// coerced by the normalization pipeline; the set of names is open so
    /// the schema can grow without breaking changes.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub flags: HashMap<String, RawValue>,
}

fn default_visible() -> RawValue {
    RawValue::Bool(true)
}

impl Default for ResourceRecord {
    fn default() -> Self {
        ResourceRecord {
            name: None,
            organization: None,
            description: None,
            address: None,
            street: None,
            city: None,
            state: None,
            country: None,
            zipcode: None,
            email: None,
            phone: None,
            fax: None,
            url: None,
            source: None,
            notes: None,
            category_name: None,
            category_names: Vec::new(),
            population_names: None,
            population_tags: Vec::new(),
            procedure_type: None,
            hours: None,
            npi: None,
            visible: default_visible(),
            date_verified: None,
            flags: HashMap::new(),
        }
    }
}

impl ResourceRecord {
    /// Create a record with a name and every other field defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        ResourceRecord {
            name: Some(name.into()),
            ..ResourceRecord::default()
        }
    }

    // ========================================================================
    // BUILDER SETTERS
    // ========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_fax(mut self, fax: impl Into<String>) -> Self {
        self.fax = Some(fax.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_category_name(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = Some(category_name.into());
        self
    }

    pub fn with_category_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_population_names(mut self, population_names: impl Into<String>) -> Self {
        self.population_names = Some(population_names.into());
        self
    }

    pub fn with_population_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.population_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_procedure_type(mut self, procedure_type: impl Into<String>) -> Self {
        self.procedure_type = Some(procedure_type.into());
        self
    }

    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    pub fn with_npi(mut self, npi: impl Into<String>) -> Self {
        self.npi = Some(npi.into());
        self
    }

    pub fn with_visible(mut self, visible: impl Into<RawValue>) -> Self {
        self.visible = visible.into();
        self
    }

    pub fn with_date_verified(mut self, date_verified: impl Into<String>) -> Self {
        self.date_verified = Some(date_verified.into());
        self
    }

    /// Set a boolean-like extension flag (see [`flag_names`]).
    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Look up an extension flag by name.
    pub fn flag(&self, name: &str) -> Option<&RawValue> {
        self.flags.get(name)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_defaults_optional_fields() {
        let record = ResourceRecord::new("Some Hospital");

        assert_eq!(record.name.as_deref(), Some("Some Hospital"));
        assert!(record.city.is_none());
        assert!(record.category_name.is_none());
        assert!(record.category_names.is_empty());
        assert!(record.population_tags.is_empty());
        assert!(record.flags.is_empty());
    }

    #[test]
    fn test_visible_defaults_to_true() {
        let record = ResourceRecord::new("Clinic");
        assert_eq!(record.visible, RawValue::Bool(true));
    }

    #[test]
    fn test_construction_without_name_succeeds() {
        // Partially known data must be representable; validity is checked
        // later, at the persistence boundary.
        let record = ResourceRecord::default();
        assert!(record.name.is_none());
    }

    #[test]
    fn test_builder_setters() {
        let record = ResourceRecord::new("Other Hospital")
            .with_city("Chicago")
            .with_state("Illinois")
            .with_flag(flag_names::SLIDING_SCALE, "Yes");

        assert_eq!(record.city.as_deref(), Some("Chicago"));
        assert_eq!(record.state.as_deref(), Some("Illinois"));
        assert_eq!(
            record.flag(flag_names::SLIDING_SCALE),
            Some(&RawValue::Text("Yes".to_string()))
        );
        assert!(record.flag(flag_names::IS_WPATH).is_none());
    }

    #[test]
    fn test_transformations_return_new_values() {
        let original = ResourceRecord::new("Clinic");
        let updated = original.clone().with_city("Chicago");

        assert!(original.city.is_none());
        assert_eq!(updated.city.as_deref(), Some("Chicago"));
    }

    #[test]
    fn test_deserialize_older_schema() {
        // A record written before the flag fields existed must still load,
        // with the newer fields defaulted.
        let record: ResourceRecord =
            serde_json::from_str(r#"{"name": "Vida Sida", "city": "Chicago"}"#).unwrap();

        assert_eq!(record.name.as_deref(), Some("Vida Sida"));
        assert_eq!(record.visible, RawValue::Bool(true));
        assert!(record.flags.is_empty());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&ResourceRecord::new("Clinic")).unwrap();

        assert!(json.contains("\"name\""));
        assert!(json.contains("\"visible\""));
        assert!(!json.contains("\"fax\""));
        assert!(!json.contains("\"category_names\""));
    }
}
