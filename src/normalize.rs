// Normalization pipeline: raw delimited strings and loose flags become
// canonical derived fields. Every step is pure and idempotent, so records
// may flow through the pipeline any number of times.

use crate::record::ResourceRecord;
use crate::value::{convert_boolean, RawValue};

/// Delimiter used in raw list fields like `category_name`.
pub const LIST_DELIMITER: char = ';';

// ============================================================================
// DELIMITED LIST PARSER
// ============================================================================

/// Parse a raw `;`-delimited field into a deduplicated list.
///
/// Segments are trimmed and blank segments are dropped, so leading,
/// trailing, and consecutive delimiters all collapse to nothing.
/// Deduplication is exact and case-sensitive. The result is a set
/// materialized as a sequence; consumers must not rely on element order.
pub fn parse_delimited_list(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Vec::new(),
    };

    let mut items: Vec<String> = Vec::new();
    for segment in raw.split(LIST_DELIMITER) {
        let segment = segment.trim();
        if segment.is_empty() || items.iter().any(|seen| seen == segment) {
            continue;
        }
        items.push(segment.to_string());
    }
    items
}

// ============================================================================
// NORMALIZATION PIPELINE
// ============================================================================

impl ResourceRecord {
    /// Derive `category_names` from the raw `category_name` string.
    ///
    /// When `category_names` is already populated the record is returned
    /// unchanged: curated or previously derived data is never overwritten
    /// by a re-derivation from the raw string.
    pub fn normalize_categories(mut self) -> Self {
        if !self.category_names.is_empty() {
            return self;
        }
        self.category_names = parse_delimited_list(self.category_name.as_deref());
        self
    }

    /// Derive `population_tags` from the raw `population_names` string.
    /// Same guard as [`ResourceRecord::normalize_categories`].
    pub fn normalize_population(mut self) -> Self {
        if !self.population_tags.is_empty() {
            return self;
        }
        self.population_tags = parse_delimited_list(self.population_names.as_deref());
        self
    }

    /// Coerce every extension flag and `visible` to canonical form.
    ///
    /// Flags keep three-valued semantics: a recognized value becomes a
    /// concrete boolean, anything else becomes absent. `visible` alone is
    /// forced to a concrete boolean, with absent or unparseable input
    /// resolving to not-visible.
    pub fn coerce_flags(mut self) -> Self {
        for value in self.flags.values_mut() {
            *value = match convert_boolean(value) {
                Some(flag) => RawValue::Bool(flag),
                None => RawValue::Absent,
            };
        }
        self.visible = RawValue::Bool(convert_boolean(&self.visible).unwrap_or(false));
        self
    }

    /// Run the full pipeline: categories, then populations, then flags.
    pub fn normalize(self) -> Self {
        self.normalize_categories()
            .normalize_population()
            .coerce_flags()
    }
}

// ============================================================================
// TESTS
// ============================================================================
