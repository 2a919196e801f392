use super::*;
use crate::kind::KindId;
use crate::types::TargetTypeData;
use crate::visitor::{nested_parts, union_members};

#[test]
fn leaf_parses_to_the_builtin_descriptor() {
    let db = TargetInterner::new();
    assert_eq!(db.parse_type("SECURITY").unwrap(), TargetTypeId::SECURITY);
    assert_eq!(db.parse_type("NULL").unwrap(), TargetTypeId::NULL);
    assert_eq!(db.parse_type("ANYTHING").unwrap(), TargetTypeId::ANYTHING);
}

#[test]
fn registered_kinds_join_the_vocabulary() {
    let db = TargetInterner::new();
    let bond = db
        .kinds()
        .register("GOVERNMENT_BOND", "GovernmentBond", &[KindId::SECURITY], None)
        .unwrap();
    assert_eq!(db.parse_type("GOVERNMENT_BOND").unwrap(), db.leaf(bond).unwrap());
}

#[test]
fn nested_parses_and_mismatches() {
    let db = TargetInterner::new();
    let parsed = db.parse_type("PORTFOLIO_NODE/POSITION").unwrap();
    assert_eq!(
        nested_parts(&db, parsed),
        Some((TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION))
    );
    let node_trade = db.parse_type("PORTFOLIO_NODE/TRADE").unwrap();
    assert!(!db.is_compatible_type(parsed, node_trade));
}

#[test]
fn union_parses_to_the_canonical_union() {
    let db = TargetInterner::new();
    let parsed = db.parse_type("POSITION|TRADE").unwrap();
    assert_eq!(parsed, TargetTypeId::POSITION_OR_TRADE);
    // Reversed spelling hits the same canonical descriptor.
    assert_eq!(db.parse_type("TRADE|POSITION").unwrap(), parsed);
    assert_eq!(
        union_members(&db, parsed),
        Some(vec![TargetTypeId::POSITION, TargetTypeId::TRADE])
    );
}

#[test]
fn chained_separators_are_right_recursive() {
    let db = TargetInterner::new();
    let inner = db
        .containing(TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION)
        .unwrap();
    let expected = db.containing(TargetTypeId::PORTFOLIO, inner).unwrap();
    assert_eq!(
        db.parse_type("PORTFOLIO/PORTFOLIO_NODE/POSITION").unwrap(),
        expected
    );

    // A trailing union binds to the deepest element type.
    let expected = db
        .containing(TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION_OR_TRADE)
        .unwrap();
    assert_eq!(
        db.parse_type("PORTFOLIO_NODE/POSITION|TRADE").unwrap(),
        expected
    );
}

#[test]
fn parentheses_override_grouping() {
    let db = TargetInterner::new();
    let grouped = db.parse_type("(POSITION|TRADE)/SECURITY").unwrap();
    let expected = db
        .containing(TargetTypeId::POSITION_OR_TRADE, TargetTypeId::SECURITY)
        .unwrap();
    assert_eq!(grouped, expected);

    // Without the parentheses the union wins the top level.
    let ungrouped = db.parse_type("POSITION|TRADE/SECURITY").unwrap();
    let trade_security = db
        .containing(TargetTypeId::TRADE, TargetTypeId::SECURITY)
        .unwrap();
    assert_eq!(ungrouped, db.or2(TargetTypeId::POSITION, trade_security).unwrap());

    // Redundant grouping is harmless.
    assert_eq!(
        db.parse_type("((POSITION|TRADE))").unwrap(),
        TargetTypeId::POSITION_OR_TRADE
    );
    assert_eq!(db.parse_type("(SECURITY)").unwrap(), TargetTypeId::SECURITY);
}

#[test]
fn malformed_inputs_carry_the_offending_index() {
    let db = TargetInterner::new();
    let cases: [(&str, usize); 9] = [
        ("", 0),
        ("/SECURITY", 0),
        ("|SECURITY", 0),
        ("SECURITY/", 9),   // trailing separator: index at end of input
        ("SECURITY|", 9),
        ("POSITION||TRADE", 9),
        ("SECURITY)", 8),
        ("(SECURITY", 9),   // unmatched open
        ("()", 1),
    ];
    for (input, expected_index) in cases {
        match db.parse_type(input) {
            Err(TargetTypeError::MalformedType { index, input: carried }) => {
                assert_eq!(index, expected_index, "index for {input:?}");
                assert_eq!(carried, input);
            }
            other => panic!("expected malformed error for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn second_operand_without_separator_is_malformed() {
    let db = TargetInterner::new();
    match db.parse_type("(SECURITY)TRADE") {
        Err(TargetTypeError::MalformedType { index, .. }) => assert_eq!(index, 10),
        other => panic!("expected malformed error, got {other:?}"),
    }
    match db.parse_type("(SECURITY)(TRADE)") {
        Err(TargetTypeError::MalformedType { index, .. }) => assert_eq!(index, 10),
        other => panic!("expected malformed error, got {other:?}"),
    }
}

#[test]
fn unknown_leaf_is_distinct_from_bad_syntax() {
    let db = TargetInterner::new();
    match db.parse_type("PORTFOLIO_NODE/SHRUBBERY") {
        Err(TargetTypeError::UnknownLeaf { name, index, input }) => {
            assert_eq!(name, "SHRUBBERY");
            assert_eq!(index, 15);
            assert_eq!(input, "PORTFOLIO_NODE/SHRUBBERY");
        }
        other => panic!("expected unknown leaf error, got {other:?}"),
    }
    // Display names are not grammar vocabulary.
    assert!(matches!(
        db.parse_type("Security"),
        Err(TargetTypeError::UnknownLeaf { .. })
    ));
}

#[test]
fn parse_reaches_the_interned_instance() {
    let db = TargetInterner::new();
    let composed = {
        let nested = db
            .containing(TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION)
            .unwrap();
        db.or2(nested, TargetTypeId::SECURITY).unwrap()
    };
    let parsed = db.parse_type("(PORTFOLIO_NODE/POSITION)|SECURITY").unwrap();
    assert_eq!(parsed, composed);
    assert!(matches!(
        db.lookup(parsed),
        Some(TargetTypeData::Union(_))
    ));
}
