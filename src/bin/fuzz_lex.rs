// src/bin/fuzz_lex.rs
// Generate random-but-valid Jack sources and check the engine's invariants
// on each one. Knobs:
//   - FUZZ_ITERS=n            number of generated cases (default 50)
//   - FUZZ_SEED=n             base RNG seed (default 42)
//   - FUZZ_TARGET_LEN=n       target bytes per case (default 4096)
//   - FUZZ_SAVE=1, FUZZ_DIR=  save generated cases (default dir "fuzz-cases")
//   - FUZZ_INPUT=path         replay one saved case instead of generating
//
// When replaying, a `<case>.tokens.json` golden next to the input is
// verified if present.

use std::{fs, path::Path, time::Instant};

use anyhow::{Context, bail};
use rand::{SeedableRng, rngs::StdRng};

use jacklex::{
    dev::generator::gen_valid_source,
    lexer::{Registry, Token, TokenKind, build_registry, io, tokenize},
};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(default)
}

/// Every emitted lexeme must appear in the input, in order, without overlap.
/// The gaps are exactly the discarded delimiter/comment text.
fn check_coverage(src: &str, tokens: &[Token]) -> Result<(), String> {
    let mut cursor = 0usize;
    for (i, tok) in tokens.iter().enumerate() {
        if tok.lexeme.is_empty() {
            return Err(format!("token {i} ({}) has an empty lexeme", tok.kind));
        }
        match src[cursor..].find(&tok.lexeme) {
            Some(off) => cursor += off + tok.lexeme.len(),
            None => {
                return Err(format!(
                    "token {i} ({} {:?}) not found after byte {cursor}",
                    tok.kind, tok.lexeme
                ));
            }
        }
    }
    Ok(())
}

fn run_case(registry: &mut Registry, src: &str, label: &str) -> anyhow::Result<Vec<Token>> {
    let t0 = Instant::now();
    let tokens = tokenize(registry, src).map_err(anyhow::Error::msg)?;
    let ms = t0.elapsed().as_secs_f64() * 1e3;

    let bad: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::BadToken)
        .collect();
    if !bad.is_empty() {
        bail!(
            "[{label}] generated-valid source produced {} BADTOKEN entries, first: {:?}",
            bad.len(),
            bad[0].lexeme
        );
    }
    if let Err(e) = check_coverage(src, &tokens) {
        bail!("[{label}] coverage violated: {e}");
    }

    // Same input, same registry: the scan must be deterministic.
    let again = tokenize(registry, src).map_err(anyhow::Error::msg)?;
    if again != tokens {
        bail!("[{label}] second scan diverged from the first");
    }

    println!(
        "[fuzz] {label}: {} bytes -> {} tokens in {ms:.2} ms",
        src.len(),
        tokens.len()
    );
    Ok(tokens)
}

fn replay(registry: &mut Registry, path: &Path) -> anyhow::Result<()> {
    let src = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let tokens = tokenize(registry, &src).map_err(anyhow::Error::msg)?;
    check_coverage(&src, &tokens).map_err(anyhow::Error::msg)?;
    println!(
        "[replay] {}: {} bytes -> {} tokens",
        path.display(),
        src.len(),
        tokens.len()
    );

    let golden_path = path.with_extension("tokens.json");
    if golden_path.exists() {
        let data = fs::read(&golden_path)?;
        let golden = io::load_tokens_json_bytes(&data).map_err(anyhow::Error::msg)?;
        if golden != tokens {
            let i = golden
                .iter()
                .zip(tokens.iter())
                .position(|(g, t)| g != t)
                .unwrap_or_else(|| golden.len().min(tokens.len()));
            bail!(
                "golden mismatch at token {i}: golden={:?} got={:?}",
                golden.get(i),
                tokens.get(i)
            );
        }
        println!("[replay] golden verified ({} tokens)", golden.len());
    }
    Ok(())
}

fn save_case(dir: &str, seed: u64, iter: u64, src: &str, tokens: &[Token]) {
    let _ = fs::create_dir_all(dir);
    let path = Path::new(dir).join(format!("fuzz_seed{seed}_iter{iter}.jack"));
    if fs::write(&path, src.as_bytes()).is_ok() {
        let _ = io::save_tokens_json(&path.with_extension("tokens.json"), tokens);
        println!("[fuzz] saved case: {}", path.display());
    }
}

fn main() -> anyhow::Result<()> {
    let mut registry = build_registry();

    if let Ok(input) = std::env::var("FUZZ_INPUT") {
        return replay(&mut registry, Path::new(&input));
    }

    let iters = env_u64("FUZZ_ITERS", 50);
    let seed = env_u64("FUZZ_SEED", 42);
    let target_len = env_usize("FUZZ_TARGET_LEN", 4096);
    let save = env_u64("FUZZ_SAVE", 0) == 1;
    let dir = std::env::var("FUZZ_DIR").unwrap_or_else(|_| "fuzz-cases".into());

    for i in 0..iters {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
        let src = gen_valid_source(&mut rng, target_len);
        let tokens = run_case(&mut registry, &src, &format!("iter {i}"))?;
        if save {
            save_case(&dir, seed, i, &src, &tokens);
        }
    }
    println!("[fuzz] all {iters} iterations passed");
    Ok(())
}
