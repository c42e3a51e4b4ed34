//! Name validation for prompt answers.
//!
//! Every validator returns a [`Validity`] value instead of raising: a
//! rejected name is a normal outcome that the prompt layer reports inline,
//! not an error. Each context (plain names, class names, relation names,
//! property names) layers its own rules over a shared per-character check,
//! and the first failing rule's message wins.

use std::{fmt, str::FromStr};

use crate::ident;

/// Outcome of a validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The input satisfies every rule for its context.
    Valid,
    /// The input broke a rule; the reason is shown to the user verbatim.
    Invalid(String),
}

impl Validity {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Validity::Invalid(reason.into())
    }

    /// Returns true for [`Validity::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Returns the rejection message, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validity::Valid => write!(f, "valid"),
            Validity::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}

/// Characters rejected in names besides whitespace and the literal dot.
const SPECIAL_CHARS: [char; 5] = ['/', '@', '+', '%', ':'];

fn has_special_char(name: &str) -> bool {
    name.chars()
        .any(|c| SPECIAL_CHARS.contains(&c) || c.is_whitespace())
}

/// Unreserved characters under `encodeURIComponent`, which pass through
/// URL encoding unchanged.
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

fn requires_uri_encoding(name: &str) -> bool {
    name.chars().any(|c| !is_unreserved(c))
}

/// Validate a name that will become part of a generated file or URL path.
///
/// Two gates run in order: the special-character class (`/@+%:.` and
/// whitespace), then a broader check for anything URL encoding would
/// rewrite. The second gate overlaps the first for the named characters
/// but also catches inputs like `müller` or `foo#bar`.
pub fn validate_required_name(name: &str) -> Validity {
    if name.is_empty() {
        return Validity::invalid("Name is required");
    }
    if name.contains('.') || has_special_char(name) {
        return Validity::invalid(format!(
            "Name cannot contain special characters (/@+%:. or whitespace): {}",
            name
        ));
    }
    if requires_uri_encoding(name) {
        return Validity::invalid(format!(
            "Name cannot contain characters that require URL encoding: {}",
            name
        ));
    }
    Validity::Valid
}

/// Per-character rules shared by the class, relation, and property
/// validators. Rules run in a fixed priority order so that the same bad
/// input always produces the same message.
fn check_name_characters(noun: &str, name: &str) -> Option<String> {
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Some(format!("{} cannot start with a number: {}", noun, name));
    }
    if name.contains('.') {
        return Some(format!("{} cannot contain a dot: {}", noun, name));
    }
    if name.contains(' ') {
        return Some(format!("{} cannot contain spaces: {}", noun, name));
    }
    if name.contains('-') {
        return Some(format!("{} cannot contain hyphens: {}", noun, name));
    }
    if has_special_char(name) {
        return Some(format!(
            "{} cannot contain special characters (/@+%:): {}",
            noun, name
        ));
    }
    None
}

/// Validate a class name.
///
/// Anything that already forms a full identifier is accepted outright,
/// bypassing the itemized checks. Inputs that fail the grammar fall through
/// to the ordered per-character rules, and when none of those fire either
/// the verdict is the generic "Class name is invalid". Some grammar-invalid
/// inputs (e.g. an embedded `!`) only ever reach that catch-all.
pub fn validate_class_name(name: &str) -> Validity {
    if name.is_empty() {
        return Validity::invalid("Class name is required");
    }
    if ident::is_identifier(name) {
        return Validity::Valid;
    }
    if let Some(reason) = check_name_characters("Class name", name) {
        return Validity::Invalid(reason);
    }
    Validity::invalid(format!("Class name is invalid: {}", name))
}

/// The relation kinds a model can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasMany,
    HasOne,
    ReferencesMany,
}

impl RelationKind {
    /// Returns the relation kind as the camelCase tag used in model
    /// definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::BelongsTo => "belongsTo",
            RelationKind::HasMany => "hasMany",
            RelationKind::HasOne => "hasOne",
            RelationKind::ReferencesMany => "referencesMany",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "belongsto" | "belongs-to" => Ok(RelationKind::BelongsTo),
            "hasmany" | "has-many" => Ok(RelationKind::HasMany),
            "hasone" | "has-one" => Ok(RelationKind::HasOne),
            "referencesmany" | "references-many" => Ok(RelationKind::ReferencesMany),
            _ => Err(format!(
                "unknown relation kind '{}', expected one of: belongsTo, hasMany, hasOne, referencesMany",
                s
            )),
        }
    }
}

/// Validate a relation name against its kind and the source key it points
/// through.
///
/// A belongs-to relation named after its own foreign key would shadow the
/// key property on the generated model, so that collision is rejected
/// before the per-character rules run.
pub fn validate_relation_name(
    name: &str,
    kind: RelationKind,
    foreign_key: Option<&str>,
) -> Validity {
    if name.is_empty() {
        return Validity::invalid("Relation name is required");
    }
    if kind == RelationKind::BelongsTo && foreign_key == Some(name) {
        return Validity::invalid(format!(
            "Relation name cannot be the same as the source key name: {}",
            name
        ));
    }
    if let Some(reason) = check_name_characters("Relation name", name) {
        return Validity::Invalid(reason);
    }
    Validity::Valid
}

/// Property names that would clash with members every generated class
/// already has.
const RESERVED_PROPERTY_NAMES: [&str; 1] = ["constructor"];

/// Validate a model property name.
pub fn check_property_name(name: &str) -> Validity {
    if name.is_empty() {
        return Validity::invalid("Property name is required");
    }
    if let Some(reason) = check_name_characters("Property name", name) {
        return Validity::Invalid(reason);
    }
    if RESERVED_PROPERTY_NAMES.contains(&name) {
        return Validity::invalid(format!(
            "{} is a reserved keyword. Please use another name",
            name
        ));
    }
    Validity::Valid
}

/// JSON value shapes accepted by [`validate_string_object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Object,
    Array,
}

impl JsonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Object => "object",
            JsonType::Array => "array",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JsonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "object" => Ok(JsonType::Object),
            "array" => Ok(JsonType::Array),
            _ => Err(format!(
                "unknown JSON type '{}', expected 'object' or 'array'",
                s
            )),
        }
    }
}

/// Build a validator for stringified JSON prompt answers.
///
/// Empty input is accepted, standing for "no value given". Non-empty input
/// must parse as JSON, and for [`JsonType::Array`] must parse to an array
/// specifically. For [`JsonType::Object`] any well-formed JSON passes.
pub fn validate_string_object(expected: JsonType) -> impl Fn(&str) -> Validity {
    move |raw: &str| {
        if raw.is_empty() {
            return Validity::Valid;
        }
        let message = format!("The value must be a stringified {}", expected);
        let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
            return Validity::invalid(message);
        };
        if expected == JsonType::Array && !value.is_array() {
            return Validity::invalid(message);
        }
        Validity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_accessors() {
        assert!(Validity::Valid.is_valid());
        assert_eq!(Validity::Valid.reason(), None);

        let invalid = Validity::invalid("nope");
        assert!(!invalid.is_valid());
        assert_eq!(invalid.reason(), Some("nope"));
        assert_eq!(invalid.to_string(), "nope");
    }

    #[test]
    fn test_validate_required_name_accepts_plain_names() {
        assert!(validate_required_name("customerOrder").is_valid());
        assert!(validate_required_name("customer-order").is_valid());
        assert!(validate_required_name("foo_bar").is_valid());
        // No leading-digit rule at this layer.
        assert!(validate_required_name("9abc").is_valid());
    }

    #[test]
    fn test_validate_required_name_empty() {
        assert_eq!(
            validate_required_name("").reason(),
            Some("Name is required")
        );
    }

    #[test]
    fn test_validate_required_name_special_characters() {
        for name in ["foo/bar", "foo@bar", "foo+bar", "foo%bar", "foo:bar", "foo bar", "foo.bar"] {
            assert_eq!(
                validate_required_name(name).reason(),
                Some(
                    format!(
                        "Name cannot contain special characters (/@+%:. or whitespace): {}",
                        name
                    )
                    .as_str()
                )
            );
        }
    }

    #[test]
    fn test_validate_required_name_url_encoding_gate() {
        // Not in the special-character class, but rewritten by URL encoding.
        for name in ["müller", "foo#bar", "foo?bar", "foo&bar"] {
            assert_eq!(
                validate_required_name(name).reason(),
                Some(
                    format!(
                        "Name cannot contain characters that require URL encoding: {}",
                        name
                    )
                    .as_str()
                )
            );
        }
        // Unreserved punctuation passes both gates.
        assert!(validate_required_name("foo!bar~(baz)*'!").is_valid());
    }

    #[test]
    fn test_validate_class_name_identifier_fast_path() {
        assert!(validate_class_name("CustomerOrder").is_valid());
        assert!(validate_class_name("$Gen").is_valid());
        assert!(validate_class_name("_Hidden").is_valid());
        assert!(validate_class_name("Café").is_valid());
        assert!(validate_class_name("日本語").is_valid());
    }

    #[test]
    fn test_validate_class_name_rejections() {
        assert_eq!(
            validate_class_name("").reason(),
            Some("Class name is required")
        );
        assert_eq!(
            validate_class_name("9Customer").reason(),
            Some("Class name cannot start with a number: 9Customer")
        );
        assert_eq!(
            validate_class_name("Customer.Order").reason(),
            Some("Class name cannot contain a dot: Customer.Order")
        );
        assert_eq!(
            validate_class_name("Customer Order").reason(),
            Some("Class name cannot contain spaces: Customer Order")
        );
        assert_eq!(
            validate_class_name("customer-order").reason(),
            Some("Class name cannot contain hyphens: customer-order")
        );
        assert_eq!(
            validate_class_name("Customer@Home").reason(),
            Some("Class name cannot contain special characters (/@+%:): Customer@Home")
        );
    }

    #[test]
    fn test_validate_class_name_vague_fallback() {
        // `!` fails the identifier grammar but none of the itemized rules.
        assert_eq!(
            validate_class_name("Foo!Bar").reason(),
            Some("Class name is invalid: Foo!Bar")
        );
        assert_eq!(
            validate_class_name("Foo#Bar").reason(),
            Some("Class name is invalid: Foo#Bar")
        );
    }

    #[test]
    fn test_relation_kind_from_str() {
        assert_eq!(
            RelationKind::from_str("belongsTo").unwrap(),
            RelationKind::BelongsTo
        );
        assert_eq!(
            RelationKind::from_str("has-many").unwrap(),
            RelationKind::HasMany
        );
        assert_eq!(
            RelationKind::from_str("referencesMany").unwrap(),
            RelationKind::ReferencesMany
        );
        assert!(RelationKind::from_str("embedsOne").is_err());
    }

    #[test]
    fn test_validate_relation_name() {
        assert!(validate_relation_name("orders", RelationKind::HasMany, None).is_valid());
        assert_eq!(
            validate_relation_name("", RelationKind::HasMany, None).reason(),
            Some("Relation name is required")
        );
        assert_eq!(
            validate_relation_name("9orders", RelationKind::HasMany, None).reason(),
            Some("Relation name cannot start with a number: 9orders")
        );
    }

    #[test]
    fn test_validate_relation_name_foreign_key_collision() {
        assert_eq!(
            validate_relation_name(
                "customerId",
                RelationKind::BelongsTo,
                Some("customerId")
            )
            .reason(),
            Some("Relation name cannot be the same as the source key name: customerId")
        );
        // Only belongs-to relations collide with their source key.
        assert!(
            validate_relation_name("customerId", RelationKind::HasMany, Some("customerId"))
                .is_valid()
        );
        assert!(
            validate_relation_name("customer", RelationKind::BelongsTo, Some("customerId"))
                .is_valid()
        );
    }

    #[test]
    fn test_check_property_name() {
        assert!(check_property_name("firstName").is_valid());
        assert_eq!(
            check_property_name("").reason(),
            Some("Property name is required")
        );
        assert_eq!(
            check_property_name("9lives").reason(),
            Some("Property name cannot start with a number: 9lives")
        );
        assert_eq!(
            check_property_name("first-name").reason(),
            Some("Property name cannot contain hyphens: first-name")
        );
    }

    #[test]
    fn test_check_property_name_reserved_keyword() {
        assert_eq!(
            check_property_name("constructor").reason(),
            Some("constructor is a reserved keyword. Please use another name")
        );
        // Character rules outrank the reserved-word check.
        assert_eq!(
            check_property_name("construc tor").reason(),
            Some("Property name cannot contain spaces: construc tor")
        );
    }

    #[test]
    fn test_json_type_from_str() {
        assert_eq!(JsonType::from_str("object").unwrap(), JsonType::Object);
        assert_eq!(JsonType::from_str("Array").unwrap(), JsonType::Array);
        assert!(JsonType::from_str("map").is_err());
    }

    #[test]
    fn test_validate_string_object() {
        let object = validate_string_object(JsonType::Object);
        assert!(object("").is_valid());
        assert!(object(r#"{"key": "value"}"#).is_valid());
        // Any well-formed JSON satisfies the object validator.
        assert!(object("[1, 2]").is_valid());
        assert_eq!(
            object("{not json}").reason(),
            Some("The value must be a stringified object")
        );
    }

    #[test]
    fn test_validate_string_array() {
        let array = validate_string_object(JsonType::Array);
        assert!(array("").is_valid());
        assert!(array("[1,2,3]").is_valid());
        assert_eq!(
            array("{}").reason(),
            Some("The value must be a stringified array")
        );
        assert_eq!(
            array("not json").reason(),
            Some("The value must be a stringified array")
        );
    }
}
