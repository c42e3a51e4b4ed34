//! Name derivation and validation for Trellis scaffolding.
//!
//! This crate turns raw user-supplied names into the derived forms the
//! generators emit (kebab-case file stems, PascalCase class names, suffixed
//! file names) and validates prompt answers before any file is written.
//! Everything here is pure; filesystem collaborators live in
//! `trellis-project`.

mod artifact;
mod case;
mod error;
mod ident;
mod slug;
mod validate;

// Artifact name derivation
pub use artifact::{
    ArtifactType, DerivedName, artifact_file_name, datasource_config_file_name, to_class_name,
    to_file_stem,
};
// Case conversions
pub use case::{to_camel_case, to_kebab_case, to_pascal_case};
pub use error::NameError;
// Identifier grammar
pub use ident::is_identifier;
// URL slugs
pub use slug::{to_url_slug, validate_url_slug};
// Prompt validators
pub use validate::{
    JsonType, RelationKind, Validity, check_property_name, validate_class_name,
    validate_relation_name, validate_required_name, validate_string_object,
};
