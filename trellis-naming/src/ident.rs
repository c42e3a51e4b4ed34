//! ECMAScript identifier grammar check.
//!
//! Class names that already form a valid identifier skip the per-character
//! validation messages entirely. The grammar is `IdentifierStart
//! IdentifierPart*`: start characters are `$`, `_`, or Unicode XID_Start;
//! part characters additionally allow ZWNJ and ZWJ. The Unicode tables come
//! from the `unicode-ident` crate, so membership checks are table lookups
//! against data baked in at compile time rather than anything computed at
//! startup.

/// Zero-width non-joiner, permitted in identifier tails.
const ZWNJ: char = '\u{200C}';
/// Zero-width joiner, permitted in identifier tails.
const ZWJ: char = '\u{200D}';

/// Returns true if `name` is a well-formed identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_start(first) => chars.all(is_continue),
        _ => false,
    }
}

fn is_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_ident::is_xid_start(c)
}

fn is_continue(c: char) -> bool {
    c == '$' || c == ZWNJ || c == ZWJ || unicode_ident::is_xid_continue(c)
}
