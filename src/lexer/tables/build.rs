// src/lexer/tables/build.rs
//
// Static construction of the token automaton registry for the Jack grammar.
// One constructor per lexical category; `build_registry` assembles them in
// precedence order (lower level wins when two automata accept the same
// window).

use super::{Registry, TokenDef};
use super::dfa::{Dfa, TRAP};
use super::tokens::TokenKind;

// Precedence levels. Comment markers outrank everything so `//` and `/*`
// beat `SY_OP` on the shared `/` prefix; keywords outrank the identifier
// automaton, which accepts every keyword too.
const LVL_COMMENT: i32 = -1;
const LVL_KEYWORD: i32 = 0;
const LVL_SYMBOL: i32 = 1;
const LVL_IDENT: i32 = 2;
const LVL_LITERAL: i32 = 3;
const LVL_WHITE: i32 = 4;

/// Build the full ordered registry. The engine does no sorting itself; the
/// list handed over here is already in the fixed total order it will be
/// iterated in.
pub fn build_registry() -> Registry {
    let mut defs = vec![
        TokenDef { dfa: line_comment(), kind: TokenKind::CommentEol, level: LVL_COMMENT },
        TokenDef { dfa: block_comment_open(), kind: TokenKind::CommentBlkStart, level: LVL_COMMENT },
        TokenDef { dfa: block_comment_close(), kind: TokenKind::CommentBlkEnd, level: LVL_COMMENT },
        TokenDef { dfa: words(&["true", "false", "null", "this"]), kind: TokenKind::KwConst, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["int", "char", "boolean"]), kind: TokenKind::KwType, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["static", "field"]), kind: TokenKind::KwVardec, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["constructor", "function", "method"]), kind: TokenKind::KwSubdec, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["var"]), kind: TokenKind::KwVar, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["void"]), kind: TokenKind::KwVoid, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["class"]), kind: TokenKind::KwClass, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["let"]), kind: TokenKind::KwLet, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["if"]), kind: TokenKind::KwIf, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["else"]), kind: TokenKind::KwElse, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["while"]), kind: TokenKind::KwWhile, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["do"]), kind: TokenKind::KwDo, level: LVL_KEYWORD },
        TokenDef { dfa: words(&["return"]), kind: TokenKind::KwReturn, level: LVL_KEYWORD },
        TokenDef { dfa: symbols(&['(']), kind: TokenKind::SyLparen, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&[')']), kind: TokenKind::SyRparen, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['[']), kind: TokenKind::SyLbracket, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&[']']), kind: TokenKind::SyRbracket, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['{']), kind: TokenKind::SyLbrace, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['}']), kind: TokenKind::SyRbrace, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&[';']), kind: TokenKind::SySemi, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['.']), kind: TokenKind::SyPeriod, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&[',']), kind: TokenKind::SyComma, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['=']), kind: TokenKind::SyEq, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['-']), kind: TokenKind::SyMinus, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['~']), kind: TokenKind::SyNot, level: LVL_SYMBOL },
        TokenDef { dfa: symbols(&['+', '*', '/', '&', '|', '<', '>']), kind: TokenKind::SyOp, level: LVL_SYMBOL },
        TokenDef { dfa: ident(), kind: TokenKind::Ident, level: LVL_IDENT },
        TokenDef { dfa: integer(), kind: TokenKind::Integer, level: LVL_LITERAL },
        TokenDef { dfa: string_literal(), kind: TokenKind::Str, level: LVL_LITERAL },
        TokenDef { dfa: whitespace(), kind: TokenKind::White, level: LVL_WHITE },
    ];

    // The literal list above is already ordered, but the contract is "sorted
    // by level", not "author got the order right".
    defs.sort_by_key(|d| d.level);

    Registry { defs }
}

// -------------------- generic constructors --------------------

/// Trie-shaped DFA accepting exactly the given words. States are allocated
/// on demand; shared prefixes share states (`true`/`this` share the `t`
/// edge).
fn words(words: &[&str]) -> Dfa {
    let mut dfa = Dfa::new();
    let mut free: u8 = 1;
    for word in words {
        let mut s: u8 = 0;
        for c in word.chars() {
            let t = dfa.target(s, c);
            s = if t == TRAP {
                let n = free;
                debug_assert!(n < TRAP, "word trie exhausted the state space");
                free += 1;
                dfa.set(s, c, n);
                n
            } else {
                t
            };
        }
        dfa.mark_accept(s);
    }
    dfa
}

/// Single-character acceptor over a set of symbols.
fn symbols(set: &[char]) -> Dfa {
    let mut dfa = Dfa::new();
    for &c in set {
        dfa.set(0, c, 1);
    }
    dfa.mark_accept(1);
    dfa
}

// -------------------- per-category tables --------------------

// (a-z | A-Z | _)(a-z | A-Z | 0-9 | _)*
fn ident() -> Dfa {
    let mut dfa = Dfa::new();
    dfa.set_range(0, 'a', 'z', 1);
    dfa.set_range(0, 'A', 'Z', 1);
    dfa.set(0, '_', 1);
    dfa.set_range(1, 'a', 'z', 1);
    dfa.set_range(1, 'A', 'Z', 1);
    dfa.set_range(1, '0', '9', 1);
    dfa.set(1, '_', 1);
    dfa.mark_accept(1);
    dfa
}

/// Decimal integer in 0..=32767.
///
/// Digit-position construction: states 1..=4 track the "could still be the
/// maximum value" prefix (3, 32, 327, 3276); states 9 down to 5 count the
/// digits that may still follow once the prefix is strictly below the
/// maximum (state n accepts with n-5 more digits allowed). A sixth digit, or
/// exceeding 32767, traps.
fn integer() -> Dfa {
    let mut dfa = Dfa::new();

    // Countdown chain: 9 -> 8 -> 7 -> 6 -> 5, all accepting, 5 is terminal.
    dfa.set_range(9, '0', '9', 8);
    dfa.set_range(8, '0', '9', 7);
    dfa.set_range(7, '0', '9', 6);
    dfa.set_range(6, '0', '9', 5);
    for s in 5..=9 {
        dfa.mark_accept(s);
    }

    // First digit.
    dfa.set_range(0, '0', '2', 9);
    dfa.set(0, '3', 1);
    dfa.set_range(0, '4', '9', 8);

    // Max-prefix chain "3276?" with early exits into the countdown.
    dfa.set_range(1, '0', '1', 8);
    dfa.set(1, '2', 2);
    dfa.set_range(1, '3', '9', 7);

    dfa.set_range(2, '0', '6', 7);
    dfa.set(2, '7', 3);
    dfa.set_range(2, '8', '9', 6);

    dfa.set_range(3, '0', '5', 6);
    dfa.set(3, '6', 4);
    dfa.set_range(3, '7', '9', 5);

    // 3276 then 0..=7 stays in range; 8 or 9 would exceed 32767.
    dfa.set_range(4, '0', '7', 5);

    for s in 1..=4 {
        dfa.mark_accept(s);
    }
    dfa
}

// "(printable ASCII except '"')*" — no newlines, no escapes.
fn string_literal() -> Dfa {
    let mut dfa = Dfa::new();
    dfa.set(0, '"', 1);
    dfa.set_range(1, ' ', '~', 1);
    dfa.set(1, '"', 2);
    dfa.mark_accept(2);
    dfa
}

fn whitespace() -> Dfa {
    let mut dfa = Dfa::new();
    for c in [' ', '\t', '\r', '\n'] {
        dfa.set(0, c, 1);
        dfa.set(1, c, 1);
    }
    dfa.mark_accept(1);
    dfa
}

// "//"
fn line_comment() -> Dfa {
    let mut dfa = Dfa::new();
    dfa.set(0, '/', 1);
    dfa.set(1, '/', 2);
    dfa.mark_accept(2);
    dfa
}

// "/*"
fn block_comment_open() -> Dfa {
    let mut dfa = Dfa::new();
    dfa.set(0, '/', 1);
    dfa.set(1, '*', 2);
    dfa.mark_accept(2);
    dfa
}

/// Anything up to and including the first `*/`. Never traps: state 0 loops
/// on everything, a `*` run waits in state 1 for the closing `/`. The engine
/// consults this automaton only while suppressing a block comment.
fn block_comment_close() -> Dfa {
    let mut dfa = Dfa::new();
    dfa.set_range(0, '\0', '\x7f', 0);
    dfa.set(0, '*', 1);
    dfa.set_range(1, '\0', '\x7f', 0);
    dfa.set(1, '*', 1);
    dfa.set(1, '/', 2);
    dfa.mark_accept(2);
    dfa
}
