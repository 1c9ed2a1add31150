// src/dev/generator.rs
// Seeded generator of random-but-valid Jack source, shared by fuzz_lex and
// the integration tests. "Valid" means: lexing the output produces no
// BADTOKEN entries.

use rand::Rng;

/// Produce at least `target_len` bytes of lexable source text, terminated by
/// a newline.
pub fn gen_valid_source<R: Rng>(rng: &mut R, target_len: usize) -> String {
    let mut out = String::with_capacity(target_len + target_len / 8);

    while out.len() < target_len {
        let roll = rng.random_range(0u32..100);
        match roll {
            0..=19 => push_ident(rng, &mut out),
            20..=34 => push_keyword(rng, &mut out),
            35..=49 => push_int(rng, &mut out),
            50..=57 => push_string(rng, &mut out),
            58..=69 => push_ws(rng, &mut out),
            70..=75 => push_line_comment(rng, &mut out),
            76..=81 => push_block_comment(rng, &mut out),
            82..=99 => push_symbol(rng, &mut out),
            _ => unreachable!(),
        }
    }

    out.push('\n');
    out
}

fn push_ident<R: Rng>(rng: &mut R, out: &mut String) {
    let len = rng.random_range(1..=12);
    out.push(random_alpha(rng));
    for _ in 1..len {
        if rng.random_bool(0.6) {
            out.push(random_alpha(rng));
        } else {
            out.push(random_digit(rng));
        }
    }
    // Identifiers glued to a following digit or letter just merge into a
    // longer identifier, so no separator is required; keep one sometimes.
    if rng.random_bool(0.5) {
        out.push(' ');
    }
}

fn push_keyword<R: Rng>(rng: &mut R, out: &mut String) {
    const KWS: &[&str] = &[
        "class", "constructor", "function", "method", "field", "static", "var", "int", "char",
        "boolean", "void", "true", "false", "null", "this", "let", "do", "if", "else", "while",
        "return",
    ];
    let i = rng.random_range(0..KWS.len());
    out.push_str(KWS[i]);
    out.push(' ');
}

fn push_int<R: Rng>(rng: &mut R, out: &mut String) {
    // Stay inside 0..=32767 so the digit-position automaton accepts the
    // whole literal in one piece.
    let v: u32 = rng.random_range(0..=32767);
    out.push_str(&v.to_string());
    out.push(' ');
}

fn push_string<R: Rng>(rng: &mut R, out: &mut String) {
    const BODY: &str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 +-*/![]{}()<>=&|.,;";
    let bytes = BODY.as_bytes();
    out.push('"');
    let len = rng.random_range(0..=24);
    for _ in 0..len {
        let i = rng.random_range(0..bytes.len());
        out.push(bytes[i] as char);
    }
    out.push('"');
}

fn push_ws<R: Rng>(rng: &mut R, out: &mut String) {
    let opts: [char; 4] = [' ', '\t', '\r', '\n'];
    let len = rng.random_range(1..=6);
    for _ in 0..len {
        let i = rng.random_range(0..opts.len());
        out.push(opts[i]);
    }
}

fn push_line_comment<R: Rng>(rng: &mut R, out: &mut String) {
    out.push_str("//");
    const ALPH: &str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 +-*![]{}()<>=&|";
    let bytes = ALPH.as_bytes();
    let len = rng.random_range(0..=40);
    for _ in 0..len {
        let i = rng.random_range(0..bytes.len());
        out.push(bytes[i] as char);
    }
    out.push('\n');
}

fn push_block_comment<R: Rng>(rng: &mut R, out: &mut String) {
    out.push_str("/*");
    // Body alphabet has no '/' or '"': the first "*/" we write is the first
    // one the close scanner can see, and an early close can never strand an
    // unterminated string literal.
    const BODY: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 +-![]{}()<>=&|";
    let bytes = BODY.as_bytes();
    let chunks = rng.random_range(0..=10);
    for _ in 0..chunks {
        let k = rng.random_range(1..=8);
        for _ in 0..k {
            let i = rng.random_range(0..bytes.len());
            out.push(bytes[i] as char);
        }
        if rng.random_bool(0.2) {
            out.push('*');
        }
        if rng.random_bool(0.2) {
            out.push('\n');
        }
    }
    out.push_str("*/ ");
}

fn push_symbol<R: Rng>(rng: &mut R, out: &mut String) {
    const SYMS: &[char] = &[
        '(', ')', '[', ']', '{', '}', ';', '.', ',', '=', '-', '~', '+', '*', '/', '&', '|', '<',
        '>',
    ];
    let i = rng.random_range(0..SYMS.len());
    let c = SYMS[i];
    out.push(c);
    // A bare '/' glued to the next piece could start an accidental comment;
    // always separate it.
    if c == '/' || rng.random_bool(0.25) {
        out.push(' ');
    }
}

fn random_alpha<R: Rng>(rng: &mut R) -> char {
    let set = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";
    let i = rng.random_range(0..set.len());
    set[i] as char
}

fn random_digit<R: Rng>(rng: &mut R) -> char {
    let set = b"0123456789";
    let i = rng.random_range(0..set.len());
    set[i] as char
}
