// Resource Record - Core Library
// Canonical flat record format for entities (organizations, providers,
// services) gathered from heterogeneous sources, plus the validation and
// normalization pipeline applied before records reach persistence.

pub mod record;
pub mod value;
pub mod validate;
pub mod normalize;
pub mod import;

// Re-export commonly used types
pub use record::{flag_names, ResourceRecord};
pub use value::{convert_boolean, RawValue};
pub use validate::{ValidationError, ValidationResult, DATE_VERIFIED_FORMAT};
pub use normalize::{parse_delimited_list, LIST_DELIMITER};
pub use import::{load_csv, load_csv_reader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
