//! The automaton itself: states, alphabet, transition table and the
//! operations that build them up.
//!
//! # Structure
//!
//! A [`Dfa`] is a flat store of labels. States and symbols are kept in
//! insertion order, and the transition table is a two-level map
//! `state -> (symbol -> target)`. The table is *total over its keys* at all
//! times: [`Dfa::add_state`] and [`Dfa::add_symbol`] eagerly backfill an unset
//! entry for every (state, symbol) pair they introduce, so lookups never need
//! to distinguish "missing row" from "unset entry" for live states.
//!
//! # Determinism
//!
//! Each (state, symbol) entry is written at most once. A second
//! [`Dfa::add_transition`] for an already set entry is dropped without error,
//! so the first write wins and the automaton stays deterministic no matter how
//! the construction calls are ordered.
//!
//! # Example
//!
//! ```
//! use dfa_rs::dfa::Dfa;
//!
//! // Words over {0, 1} with an even number of zeros.
//! let mut dfa = Dfa::new();
//! dfa.add_alphabet([0, 1]);
//! dfa.add_state("q1");
//! dfa.add_accepting_state("q0");
//! dfa.add_transition("q0", 0, "q1").unwrap();
//! dfa.add_transition("q0", 1, "q0").unwrap();
//! dfa.add_transition("q1", 0, "q0").unwrap();
//! dfa.add_transition("q1", 1, "q1").unwrap();
//!
//! assert!(dfa.accepts(""));
//! assert!(dfa.accepts("11"));
//! assert!(dfa.accepts("1001"));
//! assert!(!dfa.accepts("01"));
//! ```

use std::collections::HashMap;

use log::debug;

use crate::error::AutomatonError;
use crate::types::{State, Symbol};

/// Label of the state every automaton starts with.
pub const INITIAL_STATE: &str = "q0";

/// Label used by [`Dfa::add_default_reject_state`].
pub const DEFAULT_REJECT_STATE: &str = "reject";

/// Outgoing transitions of a single state: `symbol -> target`, where `None`
/// marks an entry that has not been set yet.
pub type Row = HashMap<Symbol, Option<State>>;

/// A deterministic finite automaton built up incrementally.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dfa {
    states: Vec<State>,
    alphabet: Vec<Symbol>,
    transitions: HashMap<State, Row>,
    start: State,
    accepting: Vec<State>,
    reject: Option<State>,
}

impl Dfa {
    /// Creates an automaton with a single start state `q0`, an empty alphabet
    /// and no accepting states.
    pub fn new() -> Self {
        let start = State::from(INITIAL_STATE);
        let mut transitions = HashMap::new();
        transitions.insert(start.clone(), Row::new());
        Self {
            states: vec![start.clone()],
            alphabet: Vec::new(),
            transitions,
            start,
            accepting: Vec::new(),
            reject: None,
        }
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Dfa::new()
    }
}

// Queries
impl Dfa {
    /// All states, in insertion order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// All symbols, in insertion order.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    /// Accepting states, in the order they were first marked.
    pub fn accepting(&self) -> &[State] {
        &self.accepting
    }

    /// The designated reject (sink) state, if any.
    pub fn reject(&self) -> Option<&State> {
        self.reject.as_ref()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn num_symbols(&self) -> usize {
        self.alphabet.len()
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.transitions.contains_key(state)
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.alphabet.iter().any(|s| s == symbol)
    }

    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting.iter().any(|s| s == state)
    }

    pub fn is_reject(&self, state: &str) -> bool {
        self.reject.as_ref().is_some_and(|s| s == state)
    }

    /// Returns the target of `state` on `symbol`, or `None` when either label
    /// is unknown or the entry is still unset.
    pub fn transition(&self, state: &str, symbol: &str) -> Option<&State> {
        self.transitions.get(state)?.get(symbol)?.as_ref()
    }

    /// Returns the full outgoing row of `state`.
    pub fn row(&self, state: &str) -> Option<&Row> {
        self.transitions.get(state)
    }
}

// Construction
impl Dfa {
    /// Adds a state with an unset entry for every current symbol.
    ///
    /// Returns `false` (and changes nothing) if the state already exists.
    pub fn add_state(&mut self, state: impl Into<State>) -> bool {
        let state = state.into();
        if self.transitions.contains_key(&state) {
            return false;
        }
        debug!("add_state(state = {})", state);

        let row: Row = self.alphabet.iter().map(|symbol| (symbol.clone(), None)).collect();
        self.transitions.insert(state.clone(), row);
        self.states.push(state);
        true
    }

    /// Adds every state in order, silently skipping duplicates.
    pub fn add_states<I>(&mut self, states: I)
    where
        I: IntoIterator,
        I::Item: Into<State>,
    {
        for state in states {
            self.add_state(state);
        }
    }

    /// Adds a symbol, backfilling an unset entry for every existing state.
    ///
    /// Returns `false` (and changes nothing) if the symbol already exists.
    pub fn add_symbol(&mut self, symbol: impl Into<Symbol>) -> bool {
        let symbol = symbol.into();
        if self.alphabet.contains(&symbol) {
            return false;
        }
        debug!("add_symbol(symbol = {})", symbol);

        for row in self.transitions.values_mut() {
            row.insert(symbol.clone(), None);
        }
        self.alphabet.push(symbol);
        true
    }

    /// Adds every symbol in order, silently skipping duplicates.
    pub fn add_alphabet<I>(&mut self, symbols: I)
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        for symbol in symbols {
            self.add_symbol(symbol);
        }
    }

    /// Sets `state --symbol--> target` unless that entry is already set.
    ///
    /// Returns `Ok(true)` if the entry was written and `Ok(false)` if it was
    /// already set, in which case the existing target is kept. The target is
    /// not required to exist yet.
    ///
    /// # Errors
    ///
    /// [`AutomatonError::UnknownState`] if `state` does not exist and
    /// [`AutomatonError::UnknownSymbol`] if `symbol` is not in the alphabet.
    pub fn add_transition(
        &mut self,
        state: impl Into<State>,
        symbol: impl Into<Symbol>,
        target: impl Into<State>,
    ) -> Result<bool, AutomatonError> {
        let state = state.into();
        let symbol = symbol.into();
        let target = target.into();
        debug!("add_transition(state = {}, symbol = {}, target = {})", state, symbol, target);

        let row = self
            .transitions
            .get_mut(&state)
            .ok_or_else(|| AutomatonError::UnknownState(state.clone()))?;
        let entry = row
            .get_mut(&symbol)
            .ok_or_else(|| AutomatonError::UnknownSymbol(symbol.clone()))?;

        if let Some(existing) = entry.as_ref() {
            debug!("add_transition: ({}, {}) already leads to {}", state, symbol, existing);
            return Ok(false);
        }
        *entry = Some(target);
        Ok(true)
    }

    /// Sets `state --symbol--> state` unless that entry is already set.
    pub fn add_self_transition(
        &mut self,
        state: impl Into<State>,
        symbol: impl Into<Symbol>,
    ) -> Result<bool, AutomatonError> {
        let state = state.into();
        self.add_transition(state.clone(), symbol, state)
    }

    /// Loops `state` onto itself on every symbol currently in the alphabet.
    ///
    /// Entries that are already set are left alone. Symbols added later are
    /// not looped.
    pub fn self_transition_all(&mut self, state: impl Into<State>) -> Result<(), AutomatonError> {
        let state = state.into();
        debug!("self_transition_all(state = {})", state);

        if !self.transitions.contains_key(&state) {
            return Err(AutomatonError::UnknownState(state));
        }
        self.fill_self_loops(&state);
        Ok(())
    }

    /// Marks `state` as accepting, adding it first if needed.
    pub fn add_accepting_state(&mut self, state: impl Into<State>) {
        let state = state.into();
        debug!("add_accepting_state(state = {})", state);

        self.add_state(state.clone());
        if !self.accepting.contains(&state) {
            self.accepting.push(state);
        }
    }

    /// Designates `state` as the reject (sink) state, adding it first if
    /// needed, and loops it on every symbol currently in the alphabet.
    ///
    /// Symbols added afterwards are not looped automatically; call
    /// [`Dfa::self_transition_all`] again if needed.
    pub fn add_reject_state(&mut self, state: impl Into<State>) {
        let state = state.into();
        debug!("add_reject_state(state = {})", state);

        self.add_state(state.clone());
        self.fill_self_loops(&state);
        self.reject = Some(state);
    }

    /// [`Dfa::add_reject_state`] with the label `"reject"`.
    pub fn add_default_reject_state(&mut self) {
        self.add_reject_state(DEFAULT_REJECT_STATE);
    }

    /// Removes `state` with its outgoing row and accepting/reject roles.
    ///
    /// Transitions of other states that target `state` are kept as they are;
    /// use [`Dfa::replace_state`] to retarget them.
    ///
    /// # Errors
    ///
    /// [`AutomatonError::UnknownState`] if `state` does not exist and
    /// [`AutomatonError::StartState`] if it is the start state.
    pub fn remove_state(&mut self, state: impl Into<State>) -> Result<(), AutomatonError> {
        let state = state.into();
        debug!("remove_state(state = {})", state);

        if !self.transitions.contains_key(&state) {
            return Err(AutomatonError::UnknownState(state));
        }
        if state == self.start {
            return Err(AutomatonError::StartState(state));
        }
        self.detach(&state);
        Ok(())
    }

    /// Renames `old` to `new`.
    ///
    /// Every transition targeting `old` is retargeted to `new`, `old` is
    /// removed, and its outgoing row is installed as the row of `new`
    /// (replacing the row `new` had, if it already existed). The start and
    /// reject designations follow the rename. Accepting membership of `old`
    /// is dropped with it.
    ///
    /// # Errors
    ///
    /// [`AutomatonError::UnknownState`] if `old` does not exist.
    pub fn replace_state(&mut self, old: impl Into<State>, new: impl Into<State>) -> Result<(), AutomatonError> {
        let old = old.into();
        let new = new.into();
        debug!("replace_state(old = {}, new = {})", old, new);

        if !self.transitions.contains_key(&old) {
            return Err(AutomatonError::UnknownState(old));
        }
        if old == new {
            return Ok(());
        }

        for target in self.transitions.values_mut().flat_map(|row| row.values_mut()).flatten() {
            if *target == old {
                *target = new.clone();
            }
        }

        let was_start = self.start == old;
        let was_reject = self.is_reject(old.as_str());
        let row = self.detach(&old).unwrap_or_default();

        if !self.states.contains(&new) {
            self.states.push(new.clone());
        }
        self.transitions.insert(new.clone(), row);

        if was_start {
            self.start = new.clone();
        }
        if was_reject {
            self.reject = Some(new);
        }
        Ok(())
    }

    /// Renames the current start state to `state`, keeping its transitions.
    pub fn start_state(&mut self, state: impl Into<State>) -> Result<(), AutomatonError> {
        let start = self.start.clone();
        self.replace_state(start, state)
    }

    fn fill_self_loops(&mut self, state: &State) {
        if let Some(row) = self.transitions.get_mut(state) {
            for symbol in &self.alphabet {
                if let Some(entry) = row.get_mut(symbol) {
                    if entry.is_none() {
                        *entry = Some(state.clone());
                    }
                }
            }
        }
    }

    /// Drops `state` from every collection it lives in, returning its row.
    /// The start state is left untouched.
    fn detach(&mut self, state: &State) -> Option<Row> {
        self.states.retain(|s| s != state);
        self.accepting.retain(|s| s != state);
        if self.reject.as_ref() == Some(state) {
            self.reject = None;
        }
        self.transitions.remove(state)
    }
}
