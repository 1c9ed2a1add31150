// src/lexer/io.rs
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::engine::Token;
use super::tables::TokenKind;

/// Write the classic token-file format: one `KIND, lexeme` line per token,
/// in emission order, BADTOKEN entries included.
pub fn write_tok_file(path: &Path, tokens: &[Token]) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    for tok in tokens {
        writeln!(w, "{}, {}", tok.kind.name(), tok.lexeme)?;
    }
    w.flush()
}

// -------------------- JSON goldens --------------------

// Disk mirror: kinds travel as their stable display names so golden files
// stay readable and diffable.
#[derive(Serialize, Deserialize)]
struct TokensDisk {
    tokens: Vec<TokenDisk>,
}
#[derive(Serialize, Deserialize)]
struct TokenDisk {
    kind: String,
    text: String,
}

pub fn save_tokens_json(path: &Path, tokens: &[Token]) -> std::io::Result<()> {
    let disk = TokensDisk {
        tokens: tokens
            .iter()
            .map(|t| TokenDisk {
                kind: t.kind.name().to_string(),
                text: t.lexeme.clone(),
            })
            .collect(),
    };
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &disk)?;
    w.flush()
}

pub fn load_tokens_json_bytes(data: &[u8]) -> Result<Vec<Token>, String> {
    let disk: TokensDisk = serde_json::from_slice(data)
        .map_err(|e| format!("failed to parse tokens JSON: {e}"))?;
    disk.tokens
        .into_iter()
        .map(|t| {
            let kind = TokenKind::from_name(&t.kind)
                .ok_or_else(|| format!("unknown token kind {:?}", t.kind))?;
            Ok(Token {
                kind,
                lexeme: t.text,
            })
        })
        .collect()
}
