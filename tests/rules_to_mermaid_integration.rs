//! Integration tests for the rules → model → Mermaid path
//! These tests go through the public API the CLI uses

use erdraft::application::rules::DEFAULT_VERB;
use erdraft::infra::diagram::{ER_HEADER, connector};
use erdraft::{Cardinality, Obligation, describe, parse_rules, to_mermaid};
use regex::Regex;

/// Checks each line against the subset of Mermaid ER syntax we emit.
fn assert_valid_er_syntax(text: &str) {
    let entity_open = Regex::new(r"^  [A-Z0-9_][A-Za-z0-9_]* \{$").unwrap();
    let field = Regex::new(r"^    string [A-Za-z0-9_]+$").unwrap();
    let entity_close = Regex::new(r"^  \}$").unwrap();
    let relationship = Regex::new(
        r#"^  [A-Z0-9_][A-Za-z0-9_]* (\|\|--\|\||o\|--\|\||\|\|--o\{|o\|--o\{) [A-Z0-9_][A-Za-z0-9_]* : ([A-Za-z0-9_-]+|"[^"]*")$"#,
    )
    .unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(ER_HEADER));
    let mut in_entity = false;
    for line in lines {
        if in_entity {
            if entity_close.is_match(line) {
                in_entity = false;
            } else {
                assert!(field.is_match(line), "bad field line: {line:?}\n{text}");
            }
        } else if entity_open.is_match(line) {
            in_entity = true;
        } else {
            assert!(relationship.is_match(line), "bad line: {line:?}\n{text}");
        }
    }
    assert!(!in_entity, "unterminated entity block\n{text}");
}

#[test]
fn test_player_example_end_to_end() {
    let model = parse_rules("A Player has name, score. A Player must many Enemies.");

    assert_eq!(model.entities().len(), 1);
    let player = model.entity("Player").unwrap();
    assert!(player.has_attribute("name"));
    assert!(player.has_attribute("score"));
    assert_eq!(player.attribute_count(), 2);

    let rels = model.relationships();
    assert_eq!(rels.len(), 1);
    assert_eq!(rels[0].source(), "Player");
    assert_eq!(rels[0].target(), "Enemy");
    assert_eq!(rels[0].cardinality(), Cardinality::OneToMany);
    assert_eq!(rels[0].obligation(), Obligation::Must);
    assert_eq!(rels[0].verb(), "relates_to");
    assert_eq!(DEFAULT_VERB, "relates_to");

    let text = to_mermaid(&model);
    assert_eq!(
        text,
        "erDiagram\n  Player {\n    string name\n    string score\n  }\n  Player ||--o{ Enemy : relates_to\n"
    );
    assert_valid_er_syntax(&text);
}

#[test]
fn test_cardinality_connectors() {
    let cases = [
        ("A Player must one Team.", Cardinality::OneToOne, Obligation::Must, "Team"),
        ("A Player can one Team.", Cardinality::OneToOne, Obligation::Can, "Team"),
        ("A Player must many Enemies.", Cardinality::OneToMany, Obligation::Must, "Enemy"),
        ("A Player can many Enemies.", Cardinality::OneToMany, Obligation::Can, "Enemy"),
    ];

    for (rules, cardinality, obligation, target) in cases {
        let text = describe(rules);
        let expected = format!(
            "  Player {} {target} : relates_to\n",
            connector(cardinality, obligation)
        );
        assert!(text.ends_with(&expected), "{rules}: {text}");
        assert_valid_er_syntax(&text);
    }
}

#[test]
fn test_malformed_input_is_header_only() {
    assert!(parse_rules("blah blah blah.").is_empty());
    assert_eq!(describe("blah blah blah."), "erDiagram\n");
}

#[test]
fn test_placeholder_for_entity_without_attributes() {
    let text = describe("A Team has , . A Team can one Coach.");
    assert_eq!(text.matches("string placeholder").count(), 1);
    assert_valid_er_syntax(&text);
}

#[test]
fn test_larger_rule_set_is_deterministic_and_valid() {
    let rules = "\
        Every Customer has first name, email.
        Each Order has number, total.
        An Order has total, status.
        A Customer can place many Orders.
        Each Order must contain many Line Items.
        Any Order must ship to one Address.
        A Customer can be \"friends\" with many Customers.";

    let first = describe(rules);
    let second = describe(rules);
    assert_eq!(first, second);
    assert_valid_er_syntax(&first);

    assert!(first.contains("    string first_name\n"));
    assert!(first.contains("  Customer o|--o{ Order : place\n"));
    assert!(first.contains("  Order ||--o{ Line_Item : contain\n"));
    // Trailing "s" is always dropped from targets, even in singular nouns.
    assert!(first.contains("  Order ||--|| Addres : ship_to\n"));
    assert!(first.contains("  Customer o|--o{ Customer : \"be_#quot;friends#quot;_with\"\n"));

    let model = parse_rules(rules);
    let order = model.entity("Order").unwrap();
    let mut attrs: Vec<_> = order.attributes().collect();
    attrs.sort();
    assert_eq!(attrs, vec!["number", "status", "total"]);
}

#[test]
fn test_declaration_and_relationship_sides_stay_separate() {
    let model = parse_rules("A Players has name. A Player must many Teams.");
    assert!(model.entity("Players").is_some());
    assert_eq!(model.relationships()[0].source(), "Player");
    assert_eq!(model.relationships()[0].target(), "Team");
}
