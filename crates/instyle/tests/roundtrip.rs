//! Round-trip and property-based coverage.
//!
//! The serialized inline string is fed back through a cssparser-based
//! declaration parser (the same tokenizer Firefox uses) and must recover
//! exactly the pairs `values()` reported.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};
use proptest::prelude::*;

use instyle::{css_property_name, Scalar, StyleObject};

// ============================================================================
// Declaration-list parser (test-side collaborator)
// ============================================================================

struct DeclParser;

impl<'i> DeclarationParser<'i> for DeclParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, ()>> {
        let start = input.position();
        while input.next().is_ok() {}
        let value = input.slice_from(start).trim().to_string();
        Ok((name.as_ref().to_string(), value))
    }
}

impl<'i> AtRuleParser<'i> for DeclParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for DeclParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

fn parse_declarations(css: &str) -> Vec<(String, String)> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut decl_parser = DeclParser;
    RuleBodyParser::new(&mut parser, &mut decl_parser)
        .flatten()
        .collect()
}

fn expected_declarations(style: &StyleObject) -> Vec<(String, String)> {
    style
        .values()
        .into_iter()
        .map(|(name, value)| (css_property_name(&name), value.to_string()))
        .collect()
}

// ============================================================================
// Round-trip tests
// ============================================================================

#[test]
fn serialized_output_parses_back_to_the_same_pairs() {
    let mut style = StyleObject::new()
        .with("color", "red")
        .with("fontSize", "11px")
        .with("lineHeight", 1.5)
        .with("fontFamily", vec![Some("Helvetica"), None, Some("sans-serif")]);
    style.set_variables([("my-var", "3px")]);

    let parsed = parse_declarations(&style.to_string());
    assert_eq!(parsed, expected_declarations(&style));
}

#[test]
fn custom_property_survives_the_round_trip() {
    let mut style = StyleObject::new();
    style.set_variables([("accent", "#ff6b35")]);

    let parsed = parse_declarations(&style.to_string());
    assert_eq!(
        parsed,
        vec![("--accent".to_string(), "#ff6b35".to_string())],
    );
}

#[test]
fn empty_object_serializes_to_nothing() {
    assert_eq!(parse_declarations(&StyleObject::new().to_string()), vec![]);
}

// ============================================================================
// Property tests
// ============================================================================

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        "[a-zA-Z0-9#%.]{1,12}".prop_map(Scalar::from),
        any::<i32>().prop_map(|n| Scalar::Num(n as f64)),
    ]
}

proptest! {
    /// Seeding keeps every non-null key, with scalar values unchanged.
    #[test]
    fn seeded_values_keep_non_null_entries(
        props in prop::collection::hash_map(
            "[a-z]{1,8}",
            prop::option::of(scalar_strategy()),
            0..16,
        ),
    ) {
        let style: StyleObject = props.clone().into_iter().collect();
        let snapshot = style.values();

        let expected = props.values().filter(|value| value.is_some()).count();
        prop_assert_eq!(snapshot.len(), expected);

        for (key, value) in &props {
            match value {
                Some(scalar) => prop_assert_eq!(snapshot.get(key), Some(scalar)),
                None => prop_assert!(snapshot.get(key).is_none()),
            }
        }
    }

    /// Any bag of simple values survives serialize-then-parse.
    #[test]
    fn round_trip_recovers_values(
        props in prop::collection::hash_map("[a-z]{1,6}", scalar_strategy(), 0..12),
    ) {
        let style: StyleObject = props.into_iter().collect();
        let parsed = parse_declarations(&style.to_string());
        prop_assert_eq!(parsed, expected_declarations(&style));
    }
}
