use std::{fs, io::Cursor, rc::Rc};

use walkdir::WalkDir;
use woclang::{
    error::{InterpreterError, LexError, ParseError, RuntimeError},
    interpret,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{core::Lexer, token::TokenKind},
        parser::core::Parser,
    },
    parse, repl,
};

fn assert_value(source: &str, expected: &str) {
    match interpret(source) {
        Ok(value) => assert_eq!(value.to_string(), expected, "source: {source}"),
        Err(e) => panic!("Script failed: {e}\nsource: {source}"),
    }
}

fn assert_prints(source: &str, expected: &str) {
    let program = parse(source).unwrap_or_else(|e| panic!("Parse failed: {e}\nsource: {source}"));
    assert_eq!(program.to_string(), expected, "source: {source}");
}

fn lex_errors(source: &str) -> Vec<LexError> {
    Lexer::new(source).errors().to_vec()
}

fn parse_errors(source: &str) -> Vec<ParseError> {
    Parser::new(Lexer::new(source)).errors()
                                   .iter()
                                   .map(|e| e.error.clone())
                                   .collect()
}

#[test]
fn declarations_print_back() {
    assert_prints("var age = age_value;", "var age = age_value;");
    assert_prints("var x = 1 + 2;", "var x = (1 + 2);");
    assert_prints("return x + y;", "return (x + y);");
}

#[test]
fn grouping_prints_explicitly() {
    assert_prints("1 + (2 + 3) + 4;", "((1 + (2 + 3)) + 4);");
    assert_prints("(5 + 5) * 2;", "((5 + 5) * 2);");
    assert_prints("2 / (5 + 5);", "(2 / (5 + 5));");
    assert_prints("-(5 + 5);", "(-(5 + 5));");
    assert_prints("!(true == true);", "(!(true == true));");
}

#[test]
fn precedence_groups_stronger_operators_first() {
    assert_prints("a + b * c;", "(a + (b * c));");
    assert_prints("a * b + c;", "((a * b) + c);");
    assert_prints("1 < 2 == true;", "((1 < 2) == true);");
    assert_prints("3 > 5 == false;", "((3 > 5) == false);");
    assert_prints("a <= b + c;", "(a <= (b + c));");
    assert_prints("-a * b;", "((-a) * b);");
    assert_prints("!-a;", "(!(-a));");
    assert_prints("a + add(b * c) + d;", "((a + add((b * c))) + d);");
}

#[test]
fn equal_precedence_associates_left() {
    assert_prints("a + b + c;", "((a + b) + c);");
    assert_prints("a + b - c;", "((a + b) - c);");
    assert_prints("a * b / c;", "((a * b) / c);");
    assert_prints("x - y - z;", "((x - y) - z);");
}

#[test]
fn conditionals_and_functions_print_back() {
    assert_prints("if (x < y) { x; }", "if ((x < y)) { x; }");
    assert_prints("if (x < y) { x; } else { y; }", "if ((x < y)) { x; } else { y; }");
    assert_prints("if (a) { x; } else if (b) { y; } else { z; }",
                  "if (a) { x; } else if (b) { y; } else { z; }");
    assert_prints("func add(x, y) { return x + y; }", "func add(x, y) { return (x + y); }");
    assert_prints("func nop() { }", "func nop() { }");
    assert_prints("add(1, 2 * 3, 4 + 5);", "add(1, (2 * 3), (4 + 5));");
}

#[test]
fn integer_arithmetic() {
    assert_value("-5;", "-5");
    assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10;", "50");
    assert_value("2 + 3 * 4;", "14");
    assert_value("5 - 10;", "-5");
    assert_value("3 * 0;", "0");
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2;", "3");
    assert_value("-7 / 2;", "-3");
    assert_value("7 / -2;", "-3");
    assert_value("-7 / -2;", "3");
}

#[test]
fn bang_and_comparisons() {
    assert_value("!!5;", "true");
    assert_value("!true;", "false");
    assert_value("!(1 < 2);", "false");
    assert_value("(1 < 2) == true;", "true");
    assert_value("(1 > 2) == false;", "true");
    assert_value("1 < 2;", "true");
    assert_value("2 > 1;", "true");
    assert_value("1 == 1;", "true");
    assert_value("1 != 1;", "false");
}

#[test]
fn mixed_operand_kinds_fall_back_to_identity_or_null() {
    assert_value("true == true;", "true");
    assert_value("true != false;", "true");
    assert_value("5 == true;", "false");
    assert_value("5 != true;", "true");
    assert_value("true + true;", "null");
    assert_value("-true;", "null");
}

#[test]
fn truthiness_in_conditions() {
    assert_value("if (0) { 10; }", "10");
    assert_value("if (5) { 10; }", "10");
    assert_value("if (true) { 10; }", "10");
    assert_value("if (false) { 10; }", "null");
    assert_value("if (1 > 2) { 10; } else { 20; }", "20");
    assert_value("if (false) { 1; } else if (true) { 2; } else { 3; }", "2");
    assert_value("if (false) { 1; } else if (false) { 2; } else { 3; }", "3");
}

#[test]
fn programs_yield_their_last_value() {
    assert_value("1 + 1; 2 + 2;", "4");
    assert_value("{ 1; 2; }", "2");
    assert_value("var x = 5;", "null");
    assert_value("func id(x) { return x; }", "null");
    assert_value("id(1);", "null");
}

#[test]
fn boolean_singletons_are_shared() {
    let evaluator = Evaluator::new();

    let a = evaluator.eval_program(&parse("true;").unwrap()).unwrap();
    let b = evaluator.eval_program(&parse("1 == 1;").unwrap()).unwrap();
    assert!(Rc::ptr_eq(&a, &b));
    assert!(Rc::ptr_eq(&a, &evaluator.true_value()));

    let c = evaluator.eval_program(&parse("1 == 2;").unwrap()).unwrap();
    assert!(Rc::ptr_eq(&c, &evaluator.false_value()));

    let d = evaluator.eval_program(&parse("if (false) { 1; }").unwrap()).unwrap();
    assert!(Rc::ptr_eq(&d, &evaluator.null()));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    match interpret("1 / 0;") {
        Err(InterpreterError::Runtime(RuntimeError::DivisionByZero { dividend })) => {
            assert_eq!(dividend, 1);
        },
        other => panic!("expected a division-by-zero error, got {other:?}"),
    }
}

#[test]
fn symbols_lex_to_their_kinds() {
    let lexer = Lexer::new(", . : ; _ ( ) [ ] { } = + - * / < > == != <= >= && || ! & | << >> ->");
    let kinds: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind()).collect();

    assert!(lexer.errors().is_empty());
    assert_eq!(kinds,
               vec![TokenKind::Comma,
                    TokenKind::Dot,
                    TokenKind::Colon,
                    TokenKind::Semicolon,
                    TokenKind::Underline,
                    TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::LBracket,
                    TokenKind::RBracket,
                    TokenKind::LBrace,
                    TokenKind::RBrace,
                    TokenKind::Assign,
                    TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Asterisk,
                    TokenKind::Slash,
                    TokenKind::Lt,
                    TokenKind::Gt,
                    TokenKind::Eq,
                    TokenKind::NotEq,
                    TokenKind::Le,
                    TokenKind::Ge,
                    TokenKind::And,
                    TokenKind::Or,
                    TokenKind::Bang,
                    TokenKind::BitAnd,
                    TokenKind::BitOr,
                    TokenKind::ShiftLeft,
                    TokenKind::ShiftRight,
                    TokenKind::Arrow,
                    TokenKind::Eof]);
}

#[test]
fn keywords_lex_to_their_kinds() {
    let lexer = Lexer::new("func meth var bool true false if else return");
    let kinds: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind()).collect();

    assert_eq!(kinds,
               vec![TokenKind::Func,
                    TokenKind::Meth,
                    TokenKind::Var,
                    TokenKind::Bool,
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::If,
                    TokenKind::Else,
                    TokenKind::Return,
                    TokenKind::Eof]);
}

#[test]
fn keyword_prefixes_and_extensions_are_identifiers() {
    let lexer = Lexer::new("fu fals truex variable iffy re _tmp");
    let tokens = lexer.tokens();

    assert!(lexer.errors().is_empty());
    for token in &tokens[..tokens.len() - 1] {
        assert_eq!(token.kind(), TokenKind::Ident, "literal: {}", token.literal());
    }
    let literals: Vec<&str> = tokens[..tokens.len() - 1].iter().map(|t| t.literal()).collect();
    assert_eq!(literals, vec!["fu", "fals", "truex", "variable", "iffy", "re", "_tmp"]);
}

#[test]
fn digit_led_identifier_is_a_lex_error() {
    let lexer = Lexer::new("1abc;");

    assert_eq!(lexer.errors(),
               &[LexError::DigitLedIdentifier { literal: "1abc".to_string(),
                                                start:   0,
                                                end:     4, }]);

    // The malformed lexeme is absent from the valid stream.
    let kinds: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![TokenKind::Semicolon, TokenKind::Eof]);
}

#[test]
fn illegal_characters_do_not_abort_the_scan() {
    let errors = lex_errors("@ 1abc $ x;");
    assert_eq!(errors.len(), 3);

    let lexer = Lexer::new("@ 1abc $ x;");
    let kinds: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Semicolon, TokenKind::Eof]);
}

#[test]
fn non_ascii_characters_are_illegal() {
    let errors = lex_errors("héllo;");
    assert_eq!(errors,
               vec![LexError::IllegalCharacter { character: 'é',
                                                 position:  1, }]);
}

#[test]
fn var_without_identifier_is_reported() {
    let errors = parse_errors("var = 5;");
    assert_eq!(errors, vec![ParseError::MissingIdentifier]);
}

#[test]
fn var_without_value_names_the_variable() {
    let errors = parse_errors("var x = ;");
    assert_eq!(errors, vec![ParseError::EmptyVarValue { name: "x".to_string() }]);
}

#[test]
fn if_without_parenthesis_is_reported() {
    let errors = parse_errors("if x < y { x; }");
    assert_eq!(errors, vec![ParseError::MissingCondition]);
}

#[test]
fn unterminated_block_is_reported() {
    let errors = parse_errors("{ x; ");
    assert_eq!(errors, vec![ParseError::MissingClosingBrace]);
}

#[test]
fn semicolon_after_block_is_reported() {
    let errors = parse_errors("{ x; };");
    assert_eq!(errors, vec![ParseError::StraySemicolonAfterBlock]);
}

#[test]
fn missing_assignment_reports_expected_kind() {
    let errors = parse_errors("var x 5;");
    assert_eq!(errors,
               vec![ParseError::UnexpectedToken { expected: TokenKind::Assign,
                                                  found:    "5".to_string(), }]);
}

#[test]
fn oversized_integer_literal_is_reported() {
    let errors = parse_errors("9223372036854775808;");
    assert_eq!(errors,
               vec![ParseError::IntegerOverflow { literal:
                                                      "9223372036854775808".to_string(), }]);

    // i64::MAX itself is fine.
    assert_value("9223372036854775807;", "9223372036854775807");
}

#[test]
fn calling_a_non_identifier_is_reported() {
    let errors = parse_errors("5(1);");
    assert_eq!(errors, vec![ParseError::CallTargetNotIdentifier { found: "5".to_string() }]);
}

#[test]
fn parser_recovers_at_statement_boundaries() {
    let parser = Parser::new(Lexer::new("1 + 1; var = 2; 3;"));

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.program().statements.len(), 2);
    assert_eq!(parser.program().to_string(), "(1 + 1); 3;");
}

#[test]
fn statement_errors_carry_the_failed_source_slice() {
    let parser = Parser::new(Lexer::new("var x = ;"));

    let errors = parser.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].statement, "var x = ;");
    assert!(errors[0].to_string().contains("var x = ;"));
}

#[test]
fn token_literals_relex_to_the_same_stream() {
    let source = "var total = (1 + 2) * 3; if (total > 5) { total; }";
    let first = Lexer::new(source);
    assert!(first.errors().is_empty());

    let joined = first.tokens()
                      .iter()
                      .map(|t| t.literal())
                      .filter(|l| !l.is_empty())
                      .collect::<Vec<_>>()
                      .join(" ");
    let second = Lexer::new(&joined);

    assert_eq!(first.tokens(), second.tokens());
}

#[test]
fn repl_session_prints_programs_values_and_errors() {
    let mut input = Cursor::new("1 + 2;\nvar = 5;\n1abc;\nexit\n");
    let mut output = Vec::new();

    repl::start(&mut input, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("(1 + 2);"));
    assert!(text.contains("Whoops"));
    assert!(text.contains("missing its identifier"));
    assert!(text.contains("must not start with a digit"));
    assert!(text.contains("Bye"));
}

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "woc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = interpret(&source) {
            panic!("Demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
