//! Entity-relationship model produced by the rule parser.
//!
//! Entities keep first-mention order and relationships keep parse order, so
//! serializing the same model twice always yields the same text.

use std::str::FromStr;

/// Relationship cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    OneToOne,
    OneToMany,
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Cardinality::OneToOne => "one-to-one",
            Cardinality::OneToMany => "one-to-many",
        };
        write!(f, "{value}")
    }
}

/// Participation of the relationship's source side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Obligation {
    /// Mandatory participation ("must").
    Must,
    /// Optional participation ("can").
    Can,
}

impl std::fmt::Display for Obligation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Obligation::Must => "must",
            Obligation::Can => "can",
        };
        write!(f, "{value}")
    }
}

impl FromStr for Obligation {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "must" => Ok(Obligation::Must),
            "can" => Ok(Obligation::Can),
            other => Err(format!("invalid obligation keyword: {other}")),
        }
    }
}

/// Named record type with a set of attribute names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    attributes: Vec<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute names in first-insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Adds an attribute unless it is already present. Returns `true` when added.
    pub fn add_attribute(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_attribute(&name) {
            return false;
        }
        self.attributes.push(name);
        true
    }
}

/// Directed, labeled connection between two entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    source: String,
    target: String,
    cardinality: Cardinality,
    obligation: Obligation,
    verb: String,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        cardinality: Cardinality,
        obligation: Obligation,
        verb: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            cardinality,
            obligation,
            verb: verb.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn obligation(&self) -> Obligation {
        self.obligation
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }
}

/// Accumulated result of one parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErModel {
    entities: Vec<Entity>,
    relationships: Vec<Relationship>,
}

impl ErModel {
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }
}

/// Builder threaded through the clause loop.
///
/// The partially built model stays inspectable through [`ModelBuilder::model`].
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: ErModel,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `entity` on first mention and merges `attributes` into its set.
    ///
    /// Blank attribute names are skipped; the entity is still created.
    pub fn declare_attributes<I, S>(&mut self, entity: &str, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = match self.model.entities.iter().position(|e| e.name == entity) {
            Some(index) => index,
            None => {
                self.model.entities.push(Entity::new(entity));
                self.model.entities.len() - 1
            }
        };

        let target = &mut self.model.entities[index];
        for attribute in attributes {
            let attribute = attribute.as_ref().trim();
            if attribute.is_empty() {
                continue;
            }
            target.add_attribute(attribute);
        }
        self
    }

    /// Appends a relationship. Duplicates are kept.
    pub fn push_relationship(&mut self, relationship: Relationship) -> &mut Self {
        self.model.relationships.push(relationship);
        self
    }

    pub fn model(&self) -> &ErModel {
        &self.model
    }

    pub fn build(self) -> ErModel {
        self.model
    }
}
