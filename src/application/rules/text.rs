//! Phrase-level helpers: determiner stripping, identifier sanitizing and
//! suffix-based singularization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_DETERMINER_RE: Regex =
        Regex::new(r"(?i)^(each|every|any|a|an)\s+").expect("leading determiner regex");
}

/// Removes one leading determiner ("each", "every", "any", "a", "an") and trims.
pub fn normalize(clause: &str) -> String {
    LEADING_DETERMINER_RE
        .replace(clause, "")
        .trim()
        .to_string()
}

/// Maps a phrase to an entity identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_` and the first character is
/// uppercased. The output has exactly as many characters as the input.
pub fn sanitize_identifier(phrase: &str) -> String {
    let mut chars = phrase.chars().map(replace_unsafe);
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.collect::<String>(),
        None => String::new(),
    }
}

/// Attribute names get the same character substitution without capitalization.
pub fn sanitize_attribute(name: &str) -> String {
    name.chars().map(replace_unsafe).collect()
}

/// Reduces a plural noun phrase to singular: "ies" → "y", else a trailing "s" is
/// dropped. "Glass" becomes "Glas"; entity matching relies on exactly this.
pub fn singularize(phrase: &str) -> String {
    if let Some(stem) = phrase.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = phrase.strip_suffix('s') {
        stem.to_string()
    } else {
        phrase.to_string()
    }
}

fn replace_unsafe(c: char) -> char {
    if c.is_ascii_alphanumeric() || c == '_' {
        c
    } else {
        '_'
    }
}
