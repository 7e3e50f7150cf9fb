//! Integration tests for the Turtle-subset parser.

use std::path::Path;

use ttl2triples::parser::{Parser, ParserOptions};
use ttl2triples::{parse, parse_bytes, parse_with, DatatypePolicy, ObjectKind, ParseError, Triple};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("Failed to read fixture")
}

fn spo(triple: &Triple) -> (&str, &str, &str) {
    (&triple.subject, &triple.predicate, &triple.object)
}

fn assert_syntax_error(result: Result<Vec<Triple>, ParseError>, needle: &str) {
    match result {
        Err(ParseError::Syntax { message, .. }) => assert!(
            message.contains(needle),
            "expected message containing {needle:?}, got {message:?}"
        ),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// End-to-end fixture
// ---------------------------------------------------------------------------

#[test]
fn example_document_yields_seven_triples_in_order() {
    let triples = parse(&fixture("example.turtle")).expect("fixture should parse");

    let goblin = "http://example.org/#green-goblin";
    let spiderman = "http://example.org/#spiderman";
    let enemy_of = "http://www.perceive.net/schemas/relationship/enemyOf";
    let person = "http://xmlns.com/foaf/0.1/Person";
    let name = "http://xmlns.com/foaf/0.1/name";

    let expected = vec![
        Triple::iri(goblin, enemy_of, spiderman),
        Triple::iri(goblin, RDF_TYPE, person),
        Triple::literal(goblin, name, "Green Goblin", ""),
        Triple::iri(spiderman, enemy_of, goblin),
        Triple::iri(spiderman, RDF_TYPE, person),
        Triple::literal(spiderman, name, "Spiderman \"Wow\"", ""),
        Triple::literal(spiderman, name, "Человек-паук", "ru"),
    ];
    assert_eq!(triples, expected);
}

#[test]
fn parse_bytes_matches_parse() {
    let text = fixture("example.turtle");
    assert_eq!(parse_bytes(text.as_bytes()).unwrap(), parse(&text).unwrap());
}

#[test]
fn parse_bytes_rejects_invalid_utf8() {
    let err = parse_bytes(b"<#a> <#p> \"\xff\" .").unwrap_err();
    assert!(matches!(err, ParseError::Encoding(_)));
}

// ---------------------------------------------------------------------------
// Lexical forms
// ---------------------------------------------------------------------------

#[test]
fn prefixed_name_with_dots_expands() {
    let triples = parse(
        "@prefix ns: <http://example.org/ns/> .\n<#s> <#p> ns:m.02mjmr .",
    )
    .unwrap();
    assert_eq!(triples.len(), 1);
    assert_eq!(triples[0].object, "http://example.org/ns/m.02mjmr");
    assert_eq!(triples[0].kind, ObjectKind::Iri);
}

#[test]
fn prefixed_name_directly_before_period() {
    let triples = parse("@prefix ex: <http://ex.org/> .\nex:a ex:b ex:c.").unwrap();
    assert_eq!(
        spo(&triples[0]),
        ("http://ex.org/a", "http://ex.org/b", "http://ex.org/c")
    );
}

#[test]
fn escaped_quotes_are_restored() {
    let triples = parse(r#"<#s> <#p> "Spiderman \"Wow\"" ."#).unwrap();
    assert_eq!(triples[0].object, "Spiderman \"Wow\"");
    assert!(triples[0].is_literal());
}

#[test]
fn single_quoted_literal() {
    let triples = parse("<#s> <#p> 'it\\'s' .").unwrap();
    assert_eq!(triples[0].object, "it's");
}

#[test]
fn language_tag_is_split_from_value() {
    let triples = parse("<#s> <#p> \"Человек-паук\"@ru .").unwrap();
    assert_eq!(triples[0].object, "Человек-паук");
    assert_eq!(triples[0].lang, "ru");
}

#[test]
fn language_tag_before_period_without_space() {
    let triples = parse("<#s> <#p> \"chat\"@fr.").unwrap();
    assert_eq!(triples[0].lang, "fr");
}

#[test]
fn a_expands_to_rdf_type() {
    let triples = parse("<#a> a <#Person> .").unwrap();
    assert_eq!(spo(&triples[0]), ("#a", RDF_TYPE, "#Person"));
}

#[test]
fn custom_type_iri() {
    let options = ParserOptions {
        type_iri: "http://example.org/isA".to_string(),
        ..ParserOptions::default()
    };
    let triples = parse_with("<#a> a <#Person> .", &options).unwrap();
    assert_eq!(triples[0].predicate, "http://example.org/isA");
}

#[test]
fn comments_are_ignored() {
    let triples = parse(
        "# leading comment\n<#a> <#p> <#o> . # trailing\n# end",
    )
    .unwrap();
    assert_eq!(triples.len(), 1);
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

#[test]
fn base_resolves_relative_iris() {
    let triples = parse("@base <http://example.org/> .\n<#a> <#p> <http://other.org/o> .").unwrap();
    assert_eq!(
        spo(&triples[0]),
        (
            "http://example.org/#a",
            "http://example.org/#p",
            "http://other.org/o"
        )
    );
}

#[test]
fn later_base_overrides_earlier() {
    let triples = parse(
        "@base <http://one.org/> .\n<#a> <#p> <#o> .\n@base <http://two.org/> .\n<#a> <#p> <#o> .",
    )
    .unwrap();
    assert_eq!(triples[0].subject, "http://one.org/#a");
    assert_eq!(triples[1].subject, "http://two.org/#a");
}

#[test]
fn initial_base_from_options() {
    let options = ParserOptions {
        base_iri: "http://example.org/".to_string(),
        ..ParserOptions::default()
    };
    let triples = parse_with("<#a> <#p> <#o> .", &options).unwrap();
    assert_eq!(triples[0].subject, "http://example.org/#a");
}

#[test]
fn prefix_redefinition_last_write_wins() {
    let triples = parse(
        "@prefix ex: <http://one.org/> .\n@prefix ex: <http://two.org/> .\nex:a ex:p ex:o .",
    )
    .unwrap();
    assert_eq!(triples[0].subject, "http://two.org/a");
}

#[test]
fn base_requires_iri() {
    assert_syntax_error(parse("@base \"nope\" ."), "@base expects an IRI");
}

#[test]
fn base_rejects_extra_arguments() {
    assert_syntax_error(
        parse("@base <http://a.org/> <http://b.org/> ."),
        "too many arguments",
    );
}

#[test]
fn prefix_requires_label() {
    assert_syntax_error(parse("@prefix <http://a.org/> ."), "expects a `label:`");
}

#[test]
fn prefix_requires_iri() {
    assert_syntax_error(parse("@prefix ex: \"x\" ."), "expects an IRI");
}

#[test]
fn prefix_requires_terminator() {
    assert_syntax_error(
        parse("@prefix ex: <http://a.org/> <#a> <#p> <#o> ."),
        "too many arguments",
    );
}

#[test]
fn parse_document_reports_prefixes() {
    let doc = Parser::new(&fixture("example.turtle"), &ParserOptions::default())
        .parse_document()
        .unwrap();
    assert_eq!(doc.base, "http://example.org/");
    assert_eq!(doc.prefixes.len(), 4);
    assert_eq!(doc.prefixes.get("foaf:"), Some("http://xmlns.com/foaf/0.1/"));
    assert_eq!(doc.triples.len(), 7);
}

// ---------------------------------------------------------------------------
// Predicate and object lists
// ---------------------------------------------------------------------------

#[test]
fn semicolon_shares_subject() {
    let triples = parse("<#a> <#p1> <#o1> ; <#p2> <#o2> .").unwrap();
    assert_eq!(triples.len(), 2);
    assert_eq!(spo(&triples[0]), ("#a", "#p1", "#o1"));
    assert_eq!(spo(&triples[1]), ("#a", "#p2", "#o2"));
}

#[test]
fn comma_shares_subject_and_predicate() {
    let triples = parse("<#a> <#p> <#o1>, <#o2> .").unwrap();
    assert_eq!(triples.len(), 2);
    assert_eq!(spo(&triples[0]), ("#a", "#p", "#o1"));
    assert_eq!(spo(&triples[1]), ("#a", "#p", "#o2"));
}

#[test]
fn mixed_lists() {
    let triples = parse("<#a> <#p> <#o1>, \"two\" ; <#q> <#o3>, <#o4> .\n<#b> <#p> <#o5> .").unwrap();
    let objects: Vec<&str> = triples.iter().map(|t| t.object.as_str()).collect();
    assert_eq!(objects, vec!["#o1", "two", "#o3", "#o4", "#o5"]);
    assert_eq!(triples[4].subject, "#b");
}

// ---------------------------------------------------------------------------
// Blank-node bags
// ---------------------------------------------------------------------------

#[test]
fn bag_emits_link_then_contents() {
    let triples = parse("<#a> <#knows> [ <#name> \"Bob\" ; <#age> \"42\" ].").unwrap();
    let node = "_:#a_#knows";
    assert_eq!(
        triples,
        vec![
            Triple::blank_node("#a", "#knows", node),
            Triple::literal(node, "#name", "Bob", ""),
            Triple::literal(node, "#age", "42", ""),
        ]
    );
}

#[test]
fn bag_close_with_semicolon_resumes_outer_subject() {
    let triples = parse("<#a> <#knows> [ <#name> \"Bob\" ]; <#name> \"Alice\" .").unwrap();
    assert_eq!(triples.len(), 3);
    assert_eq!(spo(&triples[2]), ("#a", "#name", "Alice"));
}

#[test]
fn bag_close_may_be_spaced_from_terminator() {
    let triples = parse("<#a> <#knows> [ <#name> \"Bob\" ] .\n<#b> <#p> <#o> .").unwrap();
    assert_eq!(triples.len(), 3);
    assert_eq!(triples[2].subject, "#b");
}

#[test]
fn bag_object_lists() {
    let triples = parse("<#a> <#p> [ <#q> <#x>, <#y> ].").unwrap();
    assert_eq!(triples.len(), 3);
    assert_eq!(spo(&triples[2]), ("_:#a_#p", "#q", "#y"));
}

#[test]
fn nested_bags_are_rejected() {
    assert_syntax_error(
        parse("<#a> <#p> [ <#q> [ <#r> <#s> ]. ]."),
        "nested more than one level",
    );
}

#[test]
fn bag_closed_with_period_is_rejected() {
    assert_syntax_error(parse("<#a> <#p> [ <#q> <#o> ."), "must be closed");
}

#[test]
fn bag_close_without_open_is_rejected() {
    assert_syntax_error(parse("<#a> <#p> <#o> ];"), "without a matching");
}

// ---------------------------------------------------------------------------
// Typed literals
// ---------------------------------------------------------------------------

#[test]
fn typed_literal_datatype_is_dropped_by_default() {
    let triples = parse(
        "@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n<#a> <#age> \"42\"^^xsd:integer ; <#p> \"x\"^^<http://ex.org/dt> .",
    )
    .unwrap();
    assert_eq!(triples.len(), 2);
    assert_eq!(triples[0].object, "42");
    assert_eq!(triples[0].datatype, "");
}

#[test]
fn typed_literal_rejected_when_strict() {
    let options = ParserOptions {
        datatypes: DatatypePolicy::Reject,
        ..ParserOptions::default()
    };
    assert_syntax_error(
        parse_with("<#a> <#age> \"42\"^^<http://ex.org/int> .", &options),
        "typed literals",
    );
}

#[test]
fn typed_literal_with_unbound_prefix_is_rejected() {
    assert_syntax_error(parse("<#a> <#age> \"42\"^^xsd:integer ."), "datatype must be IRI");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn literal_predicate_is_rejected() {
    assert_syntax_error(
        parse("<#a> \"not-an-iri-predicate\" <#o> ."),
        "predicate must be IRI",
    );
}

#[test]
fn failure_discards_earlier_triples() {
    let result = parse("<#a> <#p> <#o> .\n<#b> \"bad\" <#o> .");
    assert!(result.is_err());
}

#[test]
fn subject_must_be_iri() {
    assert_syntax_error(parse("\"lit\" <#p> <#o> ."), "subject must be IRI");
    assert_syntax_error(parse("ex:a <#p> <#o> ."), "subject must be IRI");
}

#[test]
fn missing_object_is_rejected() {
    assert_syntax_error(parse("<#a> <#p> ."), "triple needs object");
    assert_syntax_error(parse("<#a> <#p> ;"), "triple needs object");
    assert_syntax_error(parse("<#a> <#p> , <#o> ."), "triple needs object");
    assert_syntax_error(parse("<#a> <#p> undefined:o ."), "triple needs object");
}

#[test]
fn missing_control_character_is_rejected() {
    assert_syntax_error(parse("<#a> <#p> <#o> <#q> ."), "expected control character");
    assert_syntax_error(parse("<#a> <#p> <#o>"), "expected control character");
}

#[test]
fn unterminated_tokens_are_syntax_errors() {
    assert!(parse("<#a> <#p> \"open .").unwrap_err().is_syntax());
    assert!(parse("<#a> <#p> <http://open .").unwrap_err().is_syntax());
}

#[test]
fn error_reports_token_position() {
    let err = parse("<#a> \"lit\" <#o> .").unwrap_err();
    assert_eq!(err.position(), Some(5));
}
