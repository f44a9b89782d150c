//! Questions about the language an automaton accepts: which states matter,
//! whether anything is accepted at all, and how many words of a given length
//! are accepted.
//!
//! Unset entries and targets without a row are dead ends here, exactly as
//! they are when running input through the automaton.

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;
use num_bigint::BigUint;

use crate::dfa::Dfa;
use crate::types::State;

impl Dfa {
    /// Returns the states reachable from the start state, in BFS order.
    pub fn reachable_states(&self) -> Vec<&State> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(self.start());
        queue.push_back(self.start());

        while let Some(state) = queue.pop_front() {
            order.push(state);

            let Some(row) = self.row(state.as_str()) else {
                continue;
            };
            for symbol in self.alphabet() {
                if let Some(Some(next)) = row.get(symbol) {
                    if self.contains_state(next.as_str()) && visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        order
    }

    /// Checks if the automaton accepts no word at all.
    pub fn is_empty(&self) -> bool {
        !self
            .reachable_states()
            .into_iter()
            .any(|state| self.is_accepting(state.as_str()))
    }

    /// Counts the words of exactly `length` symbols that the automaton accepts.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfa_rs::dfa::Dfa;
    /// use num_bigint::BigUint;
    ///
    /// // Any word over {a, b}.
    /// let mut dfa = Dfa::new();
    /// dfa.add_alphabet(['a', 'b']);
    /// dfa.add_accepting_state("q0");
    /// dfa.self_transition_all("q0").unwrap();
    ///
    /// assert_eq!(dfa.count_accepted(10), BigUint::from(1024u32));
    /// ```
    pub fn count_accepted(&self, length: usize) -> BigUint {
        debug!("count_accepted(length = {})", length);

        let index: HashMap<&State, usize> = self.states().iter().enumerate().map(|(i, s)| (s, i)).collect();

        let mut counts = vec![BigUint::ZERO; self.num_states()];
        if let Some(&i) = index.get(self.start()) {
            counts[i] = BigUint::from(1u32);
        }

        for _ in 0..length {
            let mut next = vec![BigUint::ZERO; self.num_states()];
            for (i, state) in self.states().iter().enumerate() {
                if counts[i] == BigUint::ZERO {
                    continue;
                }
                let Some(row) = self.row(state.as_str()) else {
                    continue;
                };
                for target in row.values().flatten() {
                    if let Some(&j) = index.get(target) {
                        next[j] += &counts[i];
                    }
                }
            }
            counts = next;
        }

        self.accepting()
            .iter()
            .filter_map(|state| index.get(state))
            .map(|&i| &counts[i])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::ToBigUint;
    use test_log::test;

    use super::*;

    /// Words over {0, 1} with an even number of zeros.
    fn even_zeros() -> Dfa {
        let mut dfa = Dfa::new();
        dfa.add_alphabet([0, 1]);
        dfa.add_state("q1");
        dfa.add_accepting_state("q0");
        dfa.add_transition("q0", 0, "q1").unwrap();
        dfa.add_transition("q0", 1, "q0").unwrap();
        dfa.add_transition("q1", 0, "q0").unwrap();
        dfa.add_transition("q1", 1, "q1").unwrap();
        dfa
    }

    #[test]
    fn test_reachable_states() {
        let mut dfa = even_zeros();
        dfa.add_states(["island", "other"]);
        dfa.add_transition("island", 0, "other").unwrap();

        let reachable: Vec<&str> = dfa.reachable_states().into_iter().map(State::as_str).collect();
        assert_eq!(reachable, ["q0", "q1"]);
    }

    #[test]
    fn test_is_empty() {
        let mut dfa = Dfa::new();
        dfa.add_symbol('a');
        assert!(dfa.is_empty());

        dfa.add_accepting_state("end");
        assert!(dfa.is_empty());

        dfa.add_transition("q0", 'a', "end").unwrap();
        assert!(!dfa.is_empty());
        assert!(!even_zeros().is_empty());
    }

    #[test]
    fn test_count_accepted_even_zeros() {
        let dfa = even_zeros();
        assert_eq!(dfa.count_accepted(0), 1.to_biguint().unwrap());
        for length in 1..=8usize {
            let expected = 2.to_biguint().unwrap().pow(length as u32 - 1);
            assert_eq!(dfa.count_accepted(length), expected);
        }
    }

    #[test]
    fn test_count_accepted_large() {
        let mut dfa = Dfa::new();
        dfa.add_alphabet(['a', 'b']);
        dfa.add_accepting_state("q0");
        dfa.self_transition_all("q0").unwrap();

        let expected = 2.to_biguint().unwrap().pow(200);
        assert_eq!(dfa.count_accepted(200), expected);
    }

    #[test]
    fn test_count_accepted_partial() {
        // Only "ab" is accepted; everything else falls off an unset entry.
        let mut dfa = Dfa::new();
        dfa.add_alphabet(['a', 'b']);
        dfa.add_state("q1");
        dfa.add_accepting_state("q2");
        dfa.add_transition("q0", 'a', "q1").unwrap();
        dfa.add_transition("q1", 'b', "q2").unwrap();

        assert_eq!(dfa.count_accepted(1), BigUint::ZERO);
        assert_eq!(dfa.count_accepted(2), 1.to_biguint().unwrap());
        assert_eq!(dfa.count_accepted(3), BigUint::ZERO);
    }
}
