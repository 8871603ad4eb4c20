use super::clause::{Clause, classify};
use super::text::normalize;
use crate::domain::{ErModel, ModelBuilder, Relationship};

/// Parses period-delimited business rules into an entity-relationship model.
///
/// Clauses matching neither pattern are skipped; garbage input yields an empty
/// model rather than an error.
pub fn parse_rules(text: &str) -> ErModel {
    let mut builder = ModelBuilder::new();

    for segment in text.split('.').map(str::trim).filter(|s| !s.is_empty()) {
        apply_clause(&mut builder, segment);
    }

    builder.build()
}

/// Classifies one raw segment and folds it into `builder`.
pub fn apply_clause(builder: &mut ModelBuilder, segment: &str) -> Clause {
    let clause = classify(&normalize(segment));

    if let Some(attr) = clause.attribute() {
        builder.declare_attributes(&attr.entity, &attr.attributes);
    }
    if let Some(rel) = clause.relationship() {
        builder.push_relationship(Relationship::new(
            rel.source.clone(),
            rel.target.clone(),
            rel.cardinality,
            rel.obligation,
            rel.verb.clone(),
        ));
    }
    if clause == Clause::Unrecognized {
        log::debug!("Skipping unrecognized clause: {segment:?}");
    }

    clause
}
