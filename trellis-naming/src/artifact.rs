//! Artifact kinds and the names derived for them.
//!
//! Generated TypeScript artifacts follow the `<stem>.<type>.ts` convention,
//! where the stem is the kebab-cased name with a trailing "-<digits>" group
//! collapsed onto the preceding word. Downstream collision checks compare
//! these file names verbatim, so the collapsing rule must never change.

use std::{fmt, str::FromStr};

use crate::{
    case::{to_camel_case, to_kebab_case, to_pascal_case},
    error::NameError,
};

/// Kinds of generated artifacts, each with its own file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    /// Domain model class (`.model.ts`)
    Model,
    /// Persistence repository (`.repository.ts`)
    Repository,
    /// Business-logic service (`.service.ts`)
    Service,
    /// Lifecycle observer (`.observer.ts`)
    Observer,
    /// Request interceptor (`.interceptor.ts`)
    Interceptor,
    /// REST endpoint configuration (`.rest-config.ts`)
    RestConfig,
    /// Datasource binding (`.datasource.ts`)
    DataSource,
}

impl ArtifactType {
    /// Every supported artifact kind, in the order generators offer them.
    pub const ALL: [ArtifactType; 7] = [
        ArtifactType::Model,
        ArtifactType::Repository,
        ArtifactType::Service,
        ArtifactType::Observer,
        ArtifactType::Interceptor,
        ArtifactType::RestConfig,
        ArtifactType::DataSource,
    ];

    /// Returns the file-name suffix for this artifact kind.
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactType::Model => "model",
            ArtifactType::Repository => "repository",
            ArtifactType::Service => "service",
            ArtifactType::Observer => "observer",
            ArtifactType::Interceptor => "interceptor",
            ArtifactType::RestConfig => "rest-config",
            ArtifactType::DataSource => "datasource",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for ArtifactType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "model" => Ok(ArtifactType::Model),
            "repository" => Ok(ArtifactType::Repository),
            "service" => Ok(ArtifactType::Service),
            "observer" => Ok(ArtifactType::Observer),
            "interceptor" => Ok(ArtifactType::Interceptor),
            "rest-config" => Ok(ArtifactType::RestConfig),
            "datasource" => Ok(ArtifactType::DataSource),
            _ => Err(format!(
                "unknown artifact type '{}', expected one of: model, repository, service, observer, interceptor, rest-config, datasource",
                s
            )),
        }
    }
}

/// Derive the kebab-case file stem for a raw name.
///
/// A trailing "-<digits>" group is collapsed onto the previous word so that
/// "Foo-2" and "foo2" both produce the stem "foo2".
pub fn to_file_stem(raw: &str) -> String {
    let kebab = to_kebab_case(raw);
    if let Some(idx) = kebab.rfind('-') {
        let tail = &kebab[idx + 1..];
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
            return format!("{}{}", &kebab[..idx], tail);
        }
    }
    kebab
}

/// Derive the PascalCase class name for a raw name.
///
/// The input is camel-cased first so that separator handling matches the
/// file-stem derivation, then pascal-cased.
pub fn to_class_name(raw: &str) -> Result<String, NameError> {
    if raw.is_empty() {
        return Err(NameError::EmptyInput);
    }
    let class_name = to_pascal_case(&to_camel_case(raw));
    if class_name.is_empty() {
        return Err(NameError::InvalidInput(raw.to_string()));
    }
    Ok(class_name)
}

/// Build the generated file name for a raw name and artifact kind,
/// e.g. `customer-order.model.ts`.
pub fn artifact_file_name(raw: &str, kind: ArtifactType) -> String {
    format!("{}.{}.ts", to_file_stem(raw), kind.suffix())
}

/// Build the JSON configuration file name for a datasource class.
///
/// A literal "Datasource" suffix on the class name is dropped before the
/// stem is computed, so `DbDatasource` maps to `db.datasource.config.json`.
pub fn datasource_config_file_name(class_name: &str) -> String {
    let base = class_name.strip_suffix("Datasource").unwrap_or(class_name);
    format!("{}.datasource.config.json", to_file_stem(base))
}

/// The full set of names derived from one raw input.
///
/// Always recomputed from the raw name, never cached, so the three fields
/// stay consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    /// Kebab-case stem shared by all files generated for this name.
    pub file_stem: String,
    /// PascalCase class name used inside the generated source.
    pub class_name: String,
    /// Full file name, `<stem>.<type>.ts`.
    pub file_name: String,
}

impl DerivedName {
    /// Derive every name form for the given raw input and artifact kind.
    pub fn derive(raw: &str, kind: ArtifactType) -> Result<Self, NameError> {
        let class_name = to_class_name(raw)?;
        Ok(Self {
            file_stem: to_file_stem(raw),
            class_name,
            file_name: artifact_file_name(raw, kind),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            ArtifactType::from_str("model").unwrap(),
            ArtifactType::Model
        );
        assert_eq!(
            ArtifactType::from_str("rest-config").unwrap(),
            ArtifactType::RestConfig
        );
        assert_eq!(
            ArtifactType::from_str("DataSource").unwrap(),
            ArtifactType::DataSource
        );
        assert!(ArtifactType::from_str("controller").is_err());
    }

    #[test]
    fn test_display_matches_suffix() {
        for kind in ArtifactType::ALL {
            assert_eq!(kind.to_string(), kind.suffix());
            assert_eq!(ArtifactType::from_str(kind.suffix()).unwrap(), kind);
        }
    }

    #[test]
    fn test_to_file_stem() {
        assert_eq!(to_file_stem("customerOrder"), "customer-order");
        assert_eq!(to_file_stem("CustomerOrder"), "customer-order");
        assert_eq!(to_file_stem("customer order"), "customer-order");
        assert_eq!(to_file_stem("customer_order"), "customer-order");
    }

    #[test]
    fn test_to_file_stem_collapses_trailing_digits() {
        assert_eq!(to_file_stem("Foo-2"), "foo2");
        assert_eq!(to_file_stem("foo2"), "foo2");
        assert_eq!(to_file_stem("Order99"), "order99");
        assert_eq!(to_file_stem("order-2-test"), "order-2-test");
    }

    #[test]
    fn test_to_file_stem_fixed_point_on_kebab_names() {
        for name in ["customer-order", "foo", "a-b-c", "foo2", "order99"] {
            let once = to_file_stem(name);
            assert_eq!(to_file_stem(&once), once);
        }
    }

    #[test]
    fn test_to_class_name() {
        assert_eq!(to_class_name("customer order").unwrap(), "CustomerOrder");
        assert_eq!(to_class_name("customer-order").unwrap(), "CustomerOrder");
        assert_eq!(to_class_name("customerOrder").unwrap(), "CustomerOrder");
        assert_eq!(to_class_name("foo-2").unwrap(), "Foo2");
    }

    #[test]
    fn test_to_class_name_empty_input() {
        assert_eq!(to_class_name(""), Err(NameError::EmptyInput));
    }

    #[test]
    fn test_to_class_name_no_identifier_characters() {
        assert_eq!(
            to_class_name("--"),
            Err(NameError::InvalidInput("--".to_string()))
        );
        assert_eq!(
            to_class_name("!!!"),
            Err(NameError::InvalidInput("!!!".to_string()))
        );
    }

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(
            artifact_file_name("customerOrder", ArtifactType::Model),
            "customer-order.model.ts"
        );
        assert_eq!(
            artifact_file_name("customerOrder", ArtifactType::RestConfig),
            "customer-order.rest-config.ts"
        );
        assert_eq!(
            artifact_file_name("Foo-2", ArtifactType::Repository),
            "foo2.repository.ts"
        );
    }

    #[test]
    fn test_datasource_config_file_name() {
        assert_eq!(
            datasource_config_file_name("DbDatasource"),
            "db.datasource.config.json"
        );
        assert_eq!(
            datasource_config_file_name("MyDsDatasource"),
            "my-ds.datasource.config.json"
        );
        // No suffix to strip: the stem comes from the full class name.
        assert_eq!(
            datasource_config_file_name("Postgres"),
            "postgres.datasource.config.json"
        );
    }

    #[test]
    fn test_derive() {
        let derived = DerivedName::derive("customer order", ArtifactType::Model).unwrap();
        assert_eq!(derived.file_stem, "customer-order");
        assert_eq!(derived.class_name, "CustomerOrder");
        assert_eq!(derived.file_name, "customer-order.model.ts");

        assert_eq!(
            DerivedName::derive("", ArtifactType::Model),
            Err(NameError::EmptyInput)
        );
    }
}
