//! Debug utilities for inspecting automaton structure.
//!
//! The [`Display`](std::fmt::Display) rendering lists the whole 5-tuple:
//!
//! ```text
//! Q: {q0, q1}
//! ∑: {0, 1}
//! ∂:
//! {
//!     ∂(q0, 0) = q1
//!     ∂(q0, 1) = q0
//!     ∂(q1, 0) = q0
//!     ∂(q1, 1) = ⊥
//! }
//! s: q0
//! F: {q0}
//! ```
//!
//! Unset entries are shown as `⊥`. A `r: ...` line follows when a reject
//! state is designated.

use std::fmt;

use crate::dfa::Dfa;
use crate::types::{State, Symbol};

const UNSET: &str = "⊥";

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Q: {{{}}}", join(self.states()))?;
        writeln!(f, "∑: {{{}}}", join(self.alphabet()))?;
        writeln!(f, "∂:")?;
        writeln!(f, "{{")?;
        for state in self.states() {
            for symbol in self.alphabet() {
                match self.transition(state.as_str(), symbol.as_str()) {
                    Some(target) => writeln!(f, "    ∂({}, {}) = {}", state, symbol, target)?,
                    None => writeln!(f, "    ∂({}, {}) = {}", state, symbol, UNSET)?,
                }
            }
        }
        writeln!(f, "}}")?;
        write!(f, "s: {}\nF: {{{}}}", self.start(), join(self.accepting()))?;
        if let Some(reject) = self.reject() {
            write!(f, "\nr: {}", reject)?;
        }
        Ok(())
    }
}

impl Dfa {
    /// Returns every (state, symbol) pair without a target, in state-then-symbol order.
    pub fn unset_transitions(&self) -> Vec<(&State, &Symbol)> {
        let mut unset = Vec::new();
        for state in self.states() {
            for symbol in self.alphabet() {
                if self.transition(state.as_str(), symbol.as_str()).is_none() {
                    unset.push((state, symbol));
                }
            }
        }
        unset
    }

    /// Whether every (state, symbol) pair has a target.
    pub fn is_complete(&self) -> bool {
        self.unset_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut dfa = Dfa::new();
        dfa.add_alphabet([0, 1]);
        dfa.add_state("q1");
        dfa.add_accepting_state("q0");
        dfa.add_transition("q0", 0, "q1").unwrap();
        dfa.add_transition("q0", 1, "q0").unwrap();
        dfa.add_transition("q1", 0, "q0").unwrap();

        let expected = "\
Q: {q0, q1}
∑: {0, 1}
∂:
{
    ∂(q0, 0) = q1
    ∂(q0, 1) = q0
    ∂(q1, 0) = q0
    ∂(q1, 1) = ⊥
}
s: q0
F: {q0}";
        assert_eq!(dfa.to_string(), expected);
    }

    #[test]
    fn test_display_reject() {
        let mut dfa = Dfa::new();
        dfa.add_symbol('a');
        dfa.add_reject_state("sink");
        let text = dfa.to_string();
        assert!(text.contains("∂(sink, a) = sink"));
        assert!(text.ends_with("F: {}\nr: sink"));
    }

    #[test]
    fn test_unset_transitions() {
        let mut dfa = Dfa::new();
        assert!(dfa.is_complete());

        dfa.add_alphabet(['a', 'b']);
        dfa.add_state("q1");
        dfa.add_self_transition("q0", 'a').unwrap();
        dfa.self_transition_all("q1").unwrap();

        let unset: Vec<(&str, &str)> = dfa
            .unset_transitions()
            .into_iter()
            .map(|(state, symbol)| (state.as_str(), symbol.as_str()))
            .collect();
        assert_eq!(unset, [("q0", "b")]);
        assert!(!dfa.is_complete());

        dfa.add_transition("q0", 'b', "q1").unwrap();
        assert!(dfa.is_complete());
    }
}
