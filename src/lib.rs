//! # dfa-rs: Deterministic Finite Automata in Rust
//!
//! **`dfa-rs`** is a small library for building **deterministic finite automata (DFAs)** one piece at a time
//! and testing whether input sequences are accepted.
//!
//! ## What is a DFA?
//!
//! A DFA is a 5-tuple: a finite set of states, an input alphabet, a transition function mapping every
//! (state, symbol) pair to a state, a start state, and a set of accepting states.
//! Running a DFA over a word is a single left-to-right walk --- no backtracking, no lookahead.
//!
//! ## Key Features
//!
//! - **Incremental Construction**: States and symbols can be added in any order. The transition table is kept
//!   total over its keys at every step, so adding a symbol gives every state an (unset) entry for it and vice versa.
//! - **Determinism by Construction**: Each (state, symbol) entry is written at most once. Later conflicting writes
//!   are dropped silently, so the *first* write always wins.
//! - **Label-Based States**: States and symbols are identified by their string form, so renaming a state
//!   ([`replace_state`][crate::dfa::Dfa::replace_state]) is a plain table edit.
//! - **Explicit Errors**: Referencing a state or symbol that does not exist returns an
//!   [`AutomatonError`][crate::error::AutomatonError] instead of panicking.
//!
//! ## Basic Usage
//!
//! ```rust
//! use dfa_rs::dfa::Dfa;
//!
//! // 1. Create the automaton (it starts with a single state `q0`)
//! let mut dfa = Dfa::new();
//!
//! // 2. Declare the alphabet and the states
//! dfa.add_alphabet([0, 1]);
//! dfa.add_states(["q1"]);
//! dfa.add_accepting_state("q1");
//!
//! // 3. Add transitions: words ending in `1`
//! dfa.add_transition("q0", 0, "q0").unwrap();
//! dfa.add_transition("q0", 1, "q1").unwrap();
//! dfa.add_transition("q1", 0, "q0").unwrap();
//! dfa.add_transition("q1", 1, "q1").unwrap();
//!
//! // 4. Run words through it
//! assert!(dfa.accepts("0101"));
//! assert!(!dfa.accepts("10"));
//! assert!(!dfa.accepts("12")); // `2` is not in the alphabet
//! ```
//!
//! ## Core Components
//!
//! - **[`dfa`]**: The [`Dfa`][crate::dfa::Dfa] type and all construction operations.
//! - **[`run`]**: Running input through the automaton (`parse`, `accepts`, traced `run`).
//! - **[`language`]**: Reachability, emptiness and counting of accepted words.
//! - **[`dot`]**: Utilities for visualizing automata using Graphviz.

pub mod debug;
pub mod dfa;
pub mod dot;
pub mod error;
pub mod language;
pub mod run;
pub mod types;
