//! Contract tests for the single-automaton engine: trap absorption, reset
//! idempotence, and the consumed-text/state fold invariant.

use jacklex::lexer::tables::dfa::{Dfa, TRAP};

fn abc_dfa() -> Dfa {
    // Accepts exactly "ab" and "abc".
    let mut dfa = Dfa::new();
    dfa.set(0, 'a', 1);
    dfa.set(1, 'b', 2);
    dfa.set(2, 'c', 3);
    dfa.mark_accept(2);
    dfa.mark_accept(3);
    dfa
}

#[test]
fn fresh_automaton_is_running_and_not_accepting() {
    let dfa = abc_dfa();
    assert!(dfa.is_running());
    assert!(!dfa.accepts());
    assert_eq!(dfa.matched_text(), "");
}

#[test]
fn step_tracks_consumed_text_exactly() {
    let mut dfa = abc_dfa();
    dfa.step('a');
    dfa.step('b');
    assert_eq!(dfa.matched_text(), "ab");
    assert!(dfa.accepts());
    dfa.step('c');
    assert_eq!(dfa.matched_text(), "abc");
    assert!(dfa.accepts());
}

#[test]
fn undefined_transition_traps() {
    let mut dfa = abc_dfa();
    dfa.step('z');
    assert!(!dfa.is_running());
    assert!(!dfa.accepts());
    // Consumed text keeps tracking even while trapped; the driver just
    // stops trusting it.
    assert_eq!(dfa.matched_text(), "z");
}

#[test]
fn trap_is_absorbing() {
    let mut dfa = abc_dfa();
    dfa.step('z');
    for c in ['a', 'b', 'c', ' '] {
        dfa.step(c);
        assert!(!dfa.is_running());
        assert!(!dfa.accepts());
    }
}

#[test]
fn reset_is_idempotent() {
    let mut dfa = abc_dfa();
    dfa.step('a');
    dfa.step('b');
    dfa.reset();
    for _ in 0..5 {
        dfa.reset();
    }
    // Behaves like a freshly constructed automaton.
    assert!(dfa.is_running());
    assert!(!dfa.accepts());
    assert_eq!(dfa.matched_text(), "");
    dfa.step('a');
    dfa.step('b');
    assert!(dfa.accepts());
    assert_eq!(dfa.matched_text(), "ab");
}

#[test]
fn trapped_automaton_recovers_only_via_reset() {
    let mut dfa = abc_dfa();
    dfa.step('z');
    dfa.step('a');
    dfa.step('b');
    assert!(!dfa.accepts());
    dfa.reset();
    dfa.step('a');
    dfa.step('b');
    assert!(dfa.accepts());
}

#[test]
fn target_reads_back_wired_edges() {
    let dfa = abc_dfa();
    assert_eq!(dfa.target(0, 'a'), 1);
    assert_eq!(dfa.target(1, 'b'), 2);
    assert_eq!(dfa.target(0, 'b'), TRAP);
}
