// src/lexer/tables/dfa.rs
use hashbrown::HashSet;

/// Hard bounds on every token automaton. States are bytes, the alphabet is
/// ASCII. Both are fixed at compile time on purpose: the dense table layout
/// below is only a reasonable tradeoff because of these small bounds.
pub const N_STATES: usize = 256;
pub const N_SYMS: usize = 128;

/// Reserved absorbing non-accepting state. Every transition that is never
/// wired explicitly lands here, and no transition leaves it.
pub const TRAP: u8 = 255;

/// One deterministic finite automaton over ASCII.
///
/// `state` is always the fold of `next` over `consumed` starting from state 0;
/// `step` is the only mutation that advances both, `reset` the only one that
/// clears both.
pub struct Dfa {
    // 32 KiB per table and a registry holds dozens: the rows live on the
    // heap so a full registry can be built on any thread's stack.
    next: Box<[[u8; N_SYMS]; N_STATES]>,
    accept: HashSet<u8>,
    state: u8,
    consumed: String,
}

impl Dfa {
    pub fn new() -> Self {
        let rows: Box<[[u8; N_SYMS]]> = vec![[TRAP; N_SYMS]; N_STATES].into_boxed_slice();
        let next: Box<[[u8; N_SYMS]; N_STATES]> = rows
            .try_into()
            .unwrap_or_else(|_| unreachable!("row count is N_STATES by construction"));
        Self {
            next,
            accept: HashSet::new(),
            state: 0,
            consumed: String::new(),
        }
    }

    // -------------------- table construction --------------------

    pub fn set(&mut self, from: u8, on: char, to: u8) {
        debug_assert!(from != TRAP, "trap state is closed under itself");
        debug_assert!((on as u32) < N_SYMS as u32, "symbol outside ASCII alphabet");
        self.next[from as usize][on as usize] = to;
    }

    /// Wire `from --c--> to` for every symbol `c` in `lo..=hi`.
    pub fn set_range(&mut self, from: u8, lo: char, hi: char, to: u8) {
        for c in lo..=hi {
            self.set(from, c, to);
        }
    }

    /// Current target of `from` on `on` (TRAP when unwired).
    pub fn target(&self, from: u8, on: char) -> u8 {
        self.next[from as usize][on as usize]
    }

    pub fn mark_accept(&mut self, s: u8) {
        debug_assert!(s != TRAP, "trap state can never accept");
        self.accept.insert(s);
    }

    // -------------------- run-time cursor --------------------

    /// Advance on one symbol. Total over the declared alphabet: unwired
    /// transitions go to TRAP. Feeding non-ASCII is a caller contract
    /// violation and must be rejected before the scan starts.
    pub fn step(&mut self, c: char) {
        debug_assert!(c.is_ascii(), "symbol outside declared alphabet");
        self.state = self.next[self.state as usize][c as usize];
        self.consumed.push(c);
    }

    pub fn accepts(&self) -> bool {
        self.accept.contains(&self.state)
    }

    /// False once trapped; a trapped automaton cannot accept again without a
    /// reset, so the driver can stop hoping for a longer match from it.
    pub fn is_running(&self) -> bool {
        self.state != TRAP
    }

    pub fn reset(&mut self) {
        self.state = 0;
        self.consumed.clear();
    }

    /// Everything fed since the last reset. Only meaningful to the driver
    /// while `accepts()` holds.
    pub fn matched_text(&self) -> &str {
        &self.consumed
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}
