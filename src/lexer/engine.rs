// src/lexer/engine.rs
// Tokenizer driver: runs every automaton of the registry in lock step over
// the input, picks one winner per character by registry order, applies
// maximal munch, suppresses comments, and turns unrecognized spans into
// BADTOKEN entries instead of failing.

use super::tables::{Registry, TokenKind};

/// One emitted token: the category and the exact source substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

/// Whitespace set that delimits tokens and resynchronizes BADTOKEN runs.
pub const TOKEN_DELIMITERS: &[char] = &[' ', '\t', '\n', '\r'];

enum Mode {
    Normal,
    /// After `//`: discard until the end of the line.
    LineComment,
    /// After `/*`: discard until the close scanner accepts `*/`.
    BlockComment,
    /// Inside an unrecognized span: accumulate until the next delimiter.
    BadRun,
}

/// Tokenize one source unit.
///
/// The registry is borrowed mutably for the duration of the scan (each
/// automaton advances its own cursor) and is fully reset on entry, so a
/// registry can be reused across calls. The engine appends the trailing
/// delimiter itself; callers pass the source text as-is.
///
/// The only error is non-ASCII input, which is outside the declared
/// alphabet of the automata and is rejected before the scan starts. Within
/// the declared domain the engine never fails: malformed input becomes
/// BADTOKEN entries.
pub fn tokenize(registry: &mut Registry, input: &str) -> Result<Vec<Token>, String> {
    if let Some((i, c)) = input.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(format!(
            "non-ASCII character {c:?} at byte {i}: outside the declared alphabet"
        ));
    }

    registry.reset_all();
    let mut scan = Scan {
        registry,
        mode: Mode::Normal,
        pending: None,
        window: String::new(),
        bad: String::new(),
        out: Vec::new(),
    };

    // Logical forced whitespace at end-of-stream so the last pending token
    // (or bad run) is always flushed.
    for c in input.chars().chain(std::iter::once('\n')) {
        scan.feed(c);
    }

    Ok(scan.out)
}

struct Scan<'a> {
    registry: &'a mut Registry,
    mode: Mode,
    /// Best recognized token for the current window; emitted once the
    /// window dies, overwritten while longer matches keep arriving.
    pending: Option<Token>,
    /// Exact characters fed since the last registry reset.
    window: String,
    /// Accumulated lexeme of the current BADTOKEN run.
    bad: String,
    out: Vec<Token>,
}

impl Scan<'_> {
    fn feed(&mut self, c: char) {
        match self.mode {
            Mode::Normal => self.feed_normal(c),
            Mode::LineComment => {
                if c == '\n' {
                    self.reset_window();
                    self.mode = Mode::Normal;
                }
            }
            Mode::BlockComment => {
                let close = self
                    .registry
                    .defs
                    .iter_mut()
                    .find(|d| d.kind.is_comment_end());
                debug_assert!(close.is_some(), "registry has no comment-close automaton");
                if let Some(def) = close {
                    def.dfa.step(c);
                    if def.dfa.accepts() {
                        self.reset_window();
                        self.mode = Mode::Normal;
                    }
                }
            }
            Mode::BadRun => {
                if TOKEN_DELIMITERS.contains(&c) {
                    self.flush_bad();
                    self.reset_window();
                    self.mode = Mode::Normal;
                } else {
                    self.bad.push(c);
                }
            }
        }
    }

    /// One step of the per-character decision table.
    fn feed_normal(&mut self, c: char) {
        self.window.push(c);

        // Step every automaton first: each one must see every character of
        // the window so longer matches stay possible. The winner is the
        // first accepting automaton in registry order (the registry is
        // sorted by precedence). The whitespace automaton never counts as
        // "running", and the block-comment close scanner only participates
        // inside suppression: it loops on every character by construction
        // and would otherwise keep every window alive.
        let mut best: Option<(TokenKind, usize)> = None;
        let mut any_running = false;
        for (i, def) in self.registry.defs.iter_mut().enumerate() {
            def.dfa.step(c);
            if def.kind.is_comment_end() {
                continue;
            }
            if def.kind != TokenKind::White && def.dfa.is_running() {
                any_running = true;
            }
            if best.is_none() && def.dfa.accepts() {
                best = Some((def.kind, i));
            }
        }

        match best {
            // Whitespace wins only on an all-delimiter window: flush
            // whatever the previous window recognized and start over.
            // No counted automaton survives a delimiter as its first
            // symbol, so `any_running` is always false here with the
            // current tables; the guard restates the decision table's own
            // condition and would matter for a registry whose tokens may
            // begin with a delimiter character.
            Some((TokenKind::White, _)) => {
                if !any_running {
                    self.flush_pending();
                    self.reset_window();
                }
            }

            // Comment opener: whatever was pending is part of the opener
            // ("/" as SY_OP under "//"); comments are not tokens, so it is
            // dropped, not emitted.
            Some((kind, _)) if kind.is_comment_start() => {
                self.pending = None;
                self.reset_window();
                self.mode = if kind == TokenKind::CommentEol {
                    Mode::LineComment
                } else {
                    Mode::BlockComment
                };
            }

            // Some automaton accepts the whole window: new longest-match
            // candidate. Not emitted yet; a later character may extend it.
            Some((kind, i)) => {
                let lexeme = self.registry.defs[i].dfa.matched_text().to_string();
                self.pending = Some(Token { kind, lexeme });
            }

            // Dead window: nothing accepts and nothing can extend.
            None if !any_running => {
                if self.pending.is_some() {
                    // The window overshot a completed token while probing
                    // for a longer match. Emit it, then replay the current
                    // character against the freshly reset registry: it
                    // starts the next lexical item and must not be dropped.
                    self.flush_pending();
                    self.reset_window();
                    self.feed(c);
                } else {
                    // Nothing was ever recognized in this window: the
                    // consumed characters are an unrecognized span.
                    let mut span = std::mem::take(&mut self.window);
                    self.registry.reset_all();
                    if TOKEN_DELIMITERS.contains(&c) {
                        // The delimiter that killed the window bounds the
                        // span but is not part of it.
                        span.pop();
                        if !span.is_empty() {
                            self.bad = span;
                            self.flush_bad();
                        }
                    } else {
                        self.bad = span;
                        self.mode = Mode::BadRun;
                    }
                }
            }

            // Still running: wait for more input.
            None => {}
        }
    }

    fn flush_pending(&mut self) {
        if let Some(tok) = self.pending.take() {
            log::debug!("emit {} {:?}", tok.kind, tok.lexeme);
            self.out.push(tok);
        }
    }

    fn flush_bad(&mut self) {
        let lexeme = std::mem::take(&mut self.bad);
        log::debug!("bad token {lexeme:?}");
        self.out.push(Token {
            kind: TokenKind::BadToken,
            lexeme,
        });
    }

    fn reset_window(&mut self) {
        self.registry.reset_all();
        self.window.clear();
    }
}
