// src/lexer/mod.rs
pub mod engine;
pub mod io;
pub mod tables;

pub use engine::{Token, tokenize};
pub use tables::{Registry, TokenKind, build_registry};
