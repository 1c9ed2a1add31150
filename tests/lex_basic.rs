//! Positive-path engine tests: precedence, maximal munch, comment
//! suppression, literal boundaries, and input coverage.

use jacklex::lexer::{Token, TokenKind, build_registry, tokenize};

fn lex(src: &str) -> Vec<Token> {
    let mut registry = build_registry();
    tokenize(&mut registry, src).expect("ASCII input must lex")
}

fn pairs(src: &str) -> Vec<(&'static str, String)> {
    lex(src)
        .into_iter()
        .map(|t| (t.kind.name(), t.lexeme))
        .collect()
}

fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, l)| (k.to_string(), l.to_string()))
        .collect()
}

fn assert_lex(src: &str, expected: &[(&str, &str)]) {
    let got: Vec<(String, String)> = pairs(src)
        .into_iter()
        .map(|(k, l)| (k.to_string(), l))
        .collect();
    assert_eq!(got, owned(expected), "input: {src:?}");
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(lex("").is_empty());
    assert!(lex("   \t\r\n  \n").is_empty());
}

#[test]
fn keywords_beat_identifier_on_ties() {
    assert_lex("class", &[("KW_CLASS", "class")]);
    assert_lex("while", &[("KW_WHILE", "while")]);
    assert_lex("this", &[("KW_CONST", "this")]);
    assert_lex("boolean", &[("KW_TYPE", "boolean")]);
    assert_lex("constructor", &[("KW_SUBDEC", "constructor")]);
}

#[test]
fn longest_match_wins_over_keyword_prefix() {
    // Never keyword `while` + identifier `y`.
    assert_lex("whiley", &[("IDENT", "whiley")]);
    assert_lex("classes", &[("IDENT", "classes")]);
    assert_lex("iffy", &[("IDENT", "iffy")]);
    // Keyword prefix of a keyword: `do` vs identifier continuation.
    assert_lex("dot", &[("IDENT", "dot")]);
}

#[test]
fn unflushed_final_token_is_emitted() {
    // No trailing delimiter in the input; the engine appends its own.
    assert_lex("let", &[("KW_LET", "let")]);
    assert_lex("x", &[("IDENT", "x")]);
    assert_lex(";", &[("SY_SEMI", ";")]);
}

#[test]
fn statement_lexes_in_scan_order() {
    assert_lex(
        "let x = 10;",
        &[
            ("KW_LET", "let"),
            ("IDENT", "x"),
            ("SY_EQ", "="),
            ("INTEGER", "10"),
            ("SY_SEMI", ";"),
        ],
    );
}

#[test]
fn adjacent_symbols_split_one_per_character() {
    assert_lex(
        "(()",
        &[("SY_LPAREN", "("), ("SY_LPAREN", "("), ("SY_RPAREN", ")")],
    );
    assert_lex(
        "a[i]",
        &[
            ("IDENT", "a"),
            ("SY_LBRACKET", "["),
            ("IDENT", "i"),
            ("SY_RBRACKET", "]"),
        ],
    );
}

#[test]
fn line_comment_is_suppressed() {
    assert_lex(
        "// hello\nlet x;",
        &[("KW_LET", "let"), ("IDENT", "x"), ("SY_SEMI", ";")],
    );
    // Comment with no trailing newline still terminates at end of input.
    assert_lex("let // trailing", &[("KW_LET", "let")]);
}

#[test]
fn block_comment_is_suppressed() {
    assert_lex("let/* gap */x", &[("KW_LET", "let"), ("IDENT", "x")]);
    assert_lex("/* a\n b\n c */ do", &[("KW_DO", "do")]);
    // Star runs inside the body must not wedge the close scanner.
    assert_lex("/* stars **/ do", &[("KW_DO", "do")]);
}

#[test]
fn block_comment_not_nested() {
    // First */ closes; " b" after it is lexed normally.
    assert_lex("/* a /* nested */ b", &[("IDENT", "b")]);
}

#[test]
fn slash_alone_is_an_operator() {
    assert_lex(
        "a / b",
        &[("IDENT", "a"), ("SY_OP", "/"), ("IDENT", "b")],
    );
    // Division glued to operands: the slash window dies and is replayed.
    assert_lex(
        "a/b",
        &[("IDENT", "a"), ("SY_OP", "/"), ("IDENT", "b")],
    );
}

#[test]
fn stray_block_close_is_two_operators() {
    // Comment kinds are never emitted; outside suppression */ is just ops.
    assert_lex("*/", &[("SY_OP", "*"), ("SY_OP", "/")]);
}

#[test]
fn integer_boundary_32767() {
    assert_lex("32767", &[("INTEGER", "32767")]);
    // One past the bound: the automaton traps on the fifth digit, so
    // maximal-munch recovery splits the literal.
    assert_lex("32768", &[("INTEGER", "3276"), ("INTEGER", "8")]);
    assert_lex("9999", &[("INTEGER", "9999")]);
    assert_lex("10000", &[("INTEGER", "10000")]);
    assert_lex("100000", &[("INTEGER", "10000"), ("INTEGER", "0")]);
    assert_lex("0", &[("INTEGER", "0")]);
}

#[test]
fn string_literals() {
    assert_lex("\"hi there\"", &[("STRING", "\"hi there\"")]);
    assert_lex(
        "let s = \"a+b\";",
        &[
            ("KW_LET", "let"),
            ("IDENT", "s"),
            ("SY_EQ", "="),
            ("STRING", "\"a+b\""),
            ("SY_SEMI", ";"),
        ],
    );
    assert_lex("\"\"", &[("STRING", "\"\"")]);
}

#[test]
fn small_class_lexes_cleanly() {
    let src = "class Main {\n\
               \x20  function void main() {\n\
               \x20    var int i;\n\
               \x20    let i = 100; // counter\n\
               \x20    do Output.printInt(i * 2);\n\
               \x20    return;\n\
               \x20  }\n\
               }\n";
    let tokens = lex(src);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::BadToken));
    assert_eq!(tokens[0].kind, TokenKind::KwClass);
    assert_eq!(tokens[1].lexeme, "Main");

    // Coverage: every lexeme appears in order, disjointly, in the source.
    let mut cursor = 0usize;
    for tok in &tokens {
        let off = src[cursor..]
            .find(&tok.lexeme)
            .unwrap_or_else(|| panic!("lexeme {:?} lost after byte {cursor}", tok.lexeme));
        cursor += off + tok.lexeme.len();
    }
}

#[test]
fn registry_is_reusable_across_runs() {
    let mut registry = build_registry();
    let a = tokenize(&mut registry, "let x;").unwrap();
    let b = tokenize(&mut registry, "let x;").unwrap();
    assert_eq!(a, b);
}

#[test]
fn registry_builds_and_lexes_on_a_small_thread_stack() {
    // Worker and test threads get far less stack than main. The automaton
    // tables are heap-backed, so constructing the full registry must work
    // well below the 2 MiB test-thread default.
    std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let mut registry = build_registry();
            let tokens = tokenize(&mut registry, "let x;").unwrap();
            assert_eq!(tokens.len(), 3);
        })
        .expect("spawn small-stack thread")
        .join()
        .expect("registry construction must not abort the thread");
}

#[test]
fn non_ascii_input_is_rejected_up_front() {
    let mut registry = build_registry();
    assert!(tokenize(&mut registry, "let x = é;").is_err());
}
