//! End-to-end tests for building automata and running words through them.

use dfa_rs::dfa::Dfa;
use dfa_rs::error::AutomatonError;
use dfa_rs::run::Halt;
use dfa_rs::types::State;
use num_bigint::BigUint;

/// Accepts `(100)* ∪ 10*` over {0, 1}.
fn hundreds_or_ten_zeros() -> Dfa {
    let mut d = Dfa::new();
    d.add_alphabet([1, 0]);
    d.add_states(["A", "BEF", "CF", "DF", "F", "B", "C", "D"]);
    for state in ["A", "BEF", "DF", "F", "D", "CF"] {
        d.add_accepting_state(state);
    }
    d.start_state("A").unwrap();
    d.add_reject_state("ø");
    d.add_transition("A", 0, "ø").unwrap();
    d.add_transition("A", 1, "BEF").unwrap();
    d.add_transition("BEF", 1, "ø").unwrap();
    d.add_transition("BEF", 0, "CF").unwrap();
    d.add_transition("CF", 1, "ø").unwrap();
    d.add_transition("CF", 0, "DF").unwrap();
    d.add_transition("DF", 0, "F").unwrap();
    d.add_transition("DF", 1, "B").unwrap();
    d.add_transition("F", 1, "ø").unwrap();
    d.add_self_transition("F", 0).unwrap();
    d.add_transition("B", 1, "ø").unwrap();
    d.add_transition("B", 0, "C").unwrap();
    d.add_transition("C", 1, "ø").unwrap();
    d.add_transition("C", 0, "D").unwrap();
    d.add_transition("D", 0, "ø").unwrap();
    d.add_transition("D", 1, "B").unwrap();
    d
}

fn in_language(word: &str) -> bool {
    let hundreds = word.len() % 3 == 0 && word.as_bytes().chunks(3).all(|c| c == b"100");
    let ten_zeros = word.starts_with('1') && word[1..].bytes().all(|b| b == b'0');
    hundreds || ten_zeros
}

fn all_words(length: usize) -> Vec<String> {
    (0..1u32 << length)
        .map(|bits| (0..length).map(|i| if (bits >> i) & 1 == 1 { '1' } else { '0' }).collect())
        .collect()
}

// ─── Construction ──────────────────────────────────────────────────────────────

#[test]
fn construction_shape() {
    let d = hundreds_or_ten_zeros();

    assert_eq!(d.num_states(), 9);
    assert_eq!(d.start(), "A");
    assert!(!d.contains_state("q0"));
    assert_eq!(d.reject(), Some(&State::from("ø")));
    assert!(d.is_complete());
    for state in d.states() {
        assert_eq!(d.row(state.as_str()).unwrap().len(), 2);
    }
}

#[test]
fn replace_keeps_cardinality_and_row() {
    let mut d = hundreds_or_ten_zeros();
    let incoming: Vec<(State, String)> = d
        .states()
        .iter()
        .flat_map(|s| d.alphabet().iter().map(move |a| (s.clone(), a.to_string())))
        .filter(|(s, a)| d.transition(s.as_str(), a) == Some(&State::from("B")))
        .collect();
    assert!(!incoming.is_empty());
    let row = d.row("B").unwrap().clone();
    let before = d.num_states();

    d.replace_state("B", "B'").unwrap();

    assert_eq!(d.num_states(), before);
    assert_eq!(d.row("B'"), Some(&row));
    for (state, symbol) in &incoming {
        assert_eq!(d.transition(state.as_str(), symbol), Some(&State::from("B'")));
    }
    assert!(d.accepts("100100"));
}

#[test]
fn conflicting_transitions_are_dropped() {
    let mut d = hundreds_or_ten_zeros();
    let before = d.clone();

    for target in ["A", "B", "C", "nowhere"] {
        assert_eq!(d.add_transition("DF", 1, target), Ok(false));
    }
    assert_eq!(d, before);
}

#[test]
fn errors_leave_automaton_unchanged() {
    let mut d = hundreds_or_ten_zeros();
    let before = d.clone();

    assert_eq!(
        d.add_transition("Z", 1, "A"),
        Err(AutomatonError::UnknownState(State::from("Z")))
    );
    assert!(matches!(d.remove_state("Z"), Err(AutomatonError::UnknownState(_))));
    assert!(matches!(d.replace_state("Z", "Y"), Err(AutomatonError::UnknownState(_))));
    assert!(matches!(d.remove_state("A"), Err(AutomatonError::StartState(_))));
    assert!(matches!(d.add_transition("A", 2, "A"), Err(AutomatonError::UnknownSymbol(_))));
    assert_eq!(d, before);
}

// ─── Acceptance ────────────────────────────────────────────────────────────────

#[test]
fn accepts_known_words() {
    let d = hundreds_or_ten_zeros();

    assert!(d.accepts(&"100".repeat(100)));
    assert!(d.accepts(&format!("1{}", "0".repeat(100))));
    assert!(d.accepts("1"));
    assert!(d.accepts(""));
}

#[test]
fn rejects_known_words() {
    let d = hundreds_or_ten_zeros();

    for word in ["0", "11", "101", "1001", "10010", "100101", "1000100"] {
        assert!(!d.accepts(word), "{} should be rejected", word);
    }
    assert!(!d.accepts("10a"));
}

#[test]
fn matches_language_exhaustively() {
    let d = hundreds_or_ten_zeros();

    for length in 0..=10 {
        for word in all_words(length) {
            assert_eq!(d.accepts(&word), in_language(&word), "word = {:?}", word);
        }
    }
}

#[test]
fn sink_traps_the_walk() {
    let d = hundreds_or_ten_zeros();

    let run = d.run("0111".chars());
    assert_eq!(run.halt(), &Halt::Consumed);
    assert!(run.path()[1..].iter().all(|s| s == "ø"));
    assert!(!run.is_accepted());
}

// ─── Counting ──────────────────────────────────────────────────────────────────

#[test]
fn count_matches_enumeration() {
    let d = hundreds_or_ten_zeros();

    for length in 0..=10 {
        let expected = all_words(length).iter().filter(|w| d.accepts(w)).count();
        assert_eq!(d.count_accepted(length), BigUint::from(expected), "length = {}", length);
    }
}

#[test]
fn reachability() {
    let d = hundreds_or_ten_zeros();
    assert_eq!(d.reachable_states().len(), 9);
    assert!(!d.is_empty());
}
