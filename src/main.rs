// src/main.rs
use std::path::Path;

use anyhow::Context;

use jacklex::lexer::{build_registry, io, tokenize};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: jacklex <source-file>...");
        eprintln!("  writes a sibling .tok file per input");
        eprintln!("  JACKLEX_JSON=1 additionally writes a .tokens.json golden");
        std::process::exit(2);
    }

    let write_json = std::env::var("JACKLEX_JSON").map(|v| v == "1").unwrap_or(false);

    let mut registry = build_registry();
    for arg in &args {
        let src_path = Path::new(arg);
        let tok_path = src_path.with_extension("tok");
        println!("Lexing file: {} -> {}", src_path.display(), tok_path.display());

        let src = std::fs::read_to_string(src_path)
            .with_context(|| format!("reading {}", src_path.display()))?;
        let tokens = tokenize(&mut registry, &src)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("lexing {}", src_path.display()))?;

        let bad = tokens
            .iter()
            .filter(|t| t.kind == jacklex::lexer::TokenKind::BadToken)
            .count();
        if bad > 0 {
            eprintln!("[jacklex] {}: {bad} BADTOKEN entries", src_path.display());
        }

        io::write_tok_file(&tok_path, &tokens)
            .with_context(|| format!("writing {}", tok_path.display()))?;
        if write_json {
            let json_path = src_path.with_extension("tokens.json");
            io::save_tokens_json(&json_path, &tokens)
                .with_context(|| format!("writing {}", json_path.display()))?;
        }
    }
    Ok(())
}
