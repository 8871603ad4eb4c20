//! Clause classification.
//!
//! A normalized clause is tested against the attribute pattern ("X has a, b")
//! and the relationship pattern ("X must|can [verb] one|many Y"). Both may match
//! the same clause.

use super::text::{sanitize_identifier, singularize};
use crate::domain::{Cardinality, Obligation};
use lazy_static::lazy_static;
use regex::Regex;

/// Verb label used when no verb precedes the one/many token.
pub const DEFAULT_VERB: &str = "relates_to";

lazy_static! {
    static ref HAS_RE: Regex = Regex::new(r"(?i) has ").expect("has separator regex");
    static ref RELATIONSHIP_RE: Regex =
        Regex::new(r"(?i)^(.*)\s+(must|can)\s+(.*)$").expect("relationship regex");
    static ref VERB_TARGET_RE: Regex =
        Regex::new(r"(?i)^(?:(.*?)\s+)?(one|many)\s+(.*)$").expect("verb/target regex");
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("whitespace regex");
}

/// "Player has name, score"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeClause {
    pub entity: String,
    pub attributes: Vec<String>,
}

/// "Player must defeat many Enemies"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipClause {
    pub source: String,
    pub target: String,
    pub cardinality: Cardinality,
    pub obligation: Obligation,
    pub verb: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Attribute(AttributeClause),
    Relationship(RelationshipClause),
    Both(AttributeClause, RelationshipClause),
    Unrecognized,
}

impl Clause {
    pub fn attribute(&self) -> Option<&AttributeClause> {
        match self {
            Clause::Attribute(attr) | Clause::Both(attr, _) => Some(attr),
            _ => None,
        }
    }

    pub fn relationship(&self) -> Option<&RelationshipClause> {
        match self {
            Clause::Relationship(rel) | Clause::Both(_, rel) => Some(rel),
            _ => None,
        }
    }
}

/// Classifies an already normalized clause.
pub fn classify(clause: &str) -> Clause {
    match (parse_attribute_clause(clause), parse_relationship_clause(clause)) {
        (Some(attr), Some(rel)) => Clause::Both(attr, rel),
        (Some(attr), None) => Clause::Attribute(attr),
        (None, Some(rel)) => Clause::Relationship(rel),
        (None, None) => Clause::Unrecognized,
    }
}

fn parse_attribute_clause(clause: &str) -> Option<AttributeClause> {
    let mut parts = HAS_RE.splitn(clause, 3);
    let entity = parts.next()?;
    let attributes = parts.next()?;

    Some(AttributeClause {
        entity: sanitize_identifier(entity),
        attributes: attributes
            .split(',')
            .map(|a| a.trim().to_string())
            .collect(),
    })
}

fn parse_relationship_clause(clause: &str) -> Option<RelationshipClause> {
    let caps = RELATIONSHIP_RE.captures(clause)?;
    let subject = caps.get(1)?.as_str().trim();
    if subject.is_empty() {
        return None;
    }
    let obligation: Obligation = caps.get(2)?.as_str().parse().ok()?;
    let predicate = caps.get(3)?.as_str().trim();

    // Substring test, so "manyfold" also counts.
    let cardinality = if predicate.contains("many") {
        Cardinality::OneToMany
    } else {
        Cardinality::OneToOne
    };

    let (verb, raw_target) = match VERB_TARGET_RE.captures(predicate) {
        Some(vt) => {
            let verb = vt
                .get(1)
                .map(|m| m.as_str().trim())
                .filter(|v| !v.is_empty())
                .map(|v| WHITESPACE_RE.replace_all(v, "_").into_owned())
                .unwrap_or_else(|| DEFAULT_VERB.to_string());
            let target = vt.get(3).map_or("", |m| m.as_str()).trim();
            (verb, target)
        }
        None => (DEFAULT_VERB.to_string(), predicate),
    };

    let singular = singularize(raw_target);
    let target = if singular.is_empty() {
        sanitize_identifier(raw_target)
    } else {
        sanitize_identifier(&singular)
    };
    if target.is_empty() {
        return None;
    }

    Some(RelationshipClause {
        source: sanitize_identifier(subject),
        target,
        cardinality,
        obligation,
        verb,
    })
}
