use proptest::prelude::*;
use woclang::{
    interpreter::lexer::{core::Lexer, token::TokenKind},
    parse,
};

/// One valid lexeme: a fixed symbol or keyword, an identifier, or a number.
fn valid_lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(vec![",", ".", ":", ";", "_", "(", ")", "[", "]", "{", "}", "=",
                                      "+", "-", "*", "/", "<", ">", "==", "!=", "<=", ">=", "&&",
                                      "||", "!", "&", "|", "<<", ">>", "->", "func", "meth",
                                      "var", "bool", "true", "false", "if", "else", "return",])
            .prop_map(str::to_string),
        "[a-z_][a-z0-9_]{0,6}".prop_map(|s| s),
        "[0-9]{1,8}".prop_map(|s| s),
    ]
}

/// A source string for one valid expression. Composites wrap themselves in
/// parentheses, so the generated text is unambiguous at any nesting depth.
fn expression_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0i64..=9999).prop_map(|n| n.to_string()),
        proptest::sample::select(vec!["x", "y", "foo", "age_value"]).prop_map(str::to_string),
        Just("true".to_string()),
        Just("false".to_string()),
    ];

    leaf.prop_recursive(4, 24, 2, |inner| {
        let operator = proptest::sample::select(vec!["+", "-", "*", "/", "<", ">", "<=", ">=",
                                                     "==", "!=",]);
        prop_oneof![
            inner.clone().prop_map(|e| format!("(!{e})")),
            inner.clone().prop_map(|e| format!("(-{e})")),
            (inner.clone(), operator, inner).prop_map(|(l, op, r)| format!("({l} {op} {r})")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn lexer_never_panics_and_always_terminates(s in ".*") {
        let lexer = Lexer::new(&s);
        let tokens = lexer.tokens();

        // The stream always closes with the end-of-input token.
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().unwrap().kind(), TokenKind::Eof);

        // Every real token carries the text it was read from.
        for token in &tokens[..tokens.len() - 1] {
            prop_assert!(!token.literal().is_empty(), "empty literal for {:?} in {s:?}", token.kind());
        }
    }

    #[test]
    fn token_literals_relex_to_the_same_stream(lexemes in proptest::collection::vec(valid_lexeme(), 0..32)) {
        let source = lexemes.join(" ");
        let first = Lexer::new(&source);
        prop_assert!(first.errors().is_empty(), "unexpected lex errors for {source:?}: {:?}", first.errors());

        let joined = first.tokens()
                          .iter()
                          .map(|t| t.literal())
                          .filter(|l| !l.is_empty())
                          .collect::<Vec<_>>()
                          .join(" ");
        let second = Lexer::new(&joined);

        prop_assert_eq!(first.tokens(), second.tokens(), "source: {:?} rejoined: {:?}", source, joined);
    }

    #[test]
    fn printing_a_parsed_expression_is_a_fixed_point(source in expression_source()) {
        let statement = format!("{source};");

        let program = parse(&statement);
        prop_assert!(program.is_ok(), "failed to parse {statement:?}: {:?}", program.err());
        let printed = program.unwrap().to_string();

        let reparsed = parse(&printed);
        prop_assert!(reparsed.is_ok(), "failed to reparse {printed:?}: {:?}", reparsed.err());
        prop_assert_eq!(reparsed.unwrap().to_string(), printed);
    }
}
