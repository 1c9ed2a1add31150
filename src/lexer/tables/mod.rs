// src/lexer/tables/mod.rs
pub mod build;
pub mod dfa;
pub mod tokens;

// Re-exports to keep the external API small.
pub use build::build_registry;
pub use dfa::{Dfa, TRAP};
pub use tokens::TokenKind;

/// One registry entry: the automaton for a lexical category, the kind it
/// recognizes, and its precedence level (lower wins ties).
pub struct TokenDef {
    pub dfa: Dfa,
    pub kind: TokenKind,
    pub level: i32,
}

/// Ordered list of token automata, fully sorted by level before the engine
/// ever sees it. Constructed once per run and threaded by reference; there is
/// no process-wide registry.
pub struct Registry {
    pub defs: Vec<TokenDef>,
}

impl Registry {
    pub fn reset_all(&mut self) {
        for def in &mut self.defs {
            def.dfa.reset();
        }
    }
}
