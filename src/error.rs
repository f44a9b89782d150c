//! Errors raised by automaton construction.

use crate::types::{State, Symbol};

/// Error type for automaton mutations.
///
/// A failed call leaves the automaton exactly as it was.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AutomatonError {
    /// The operation referenced a state that is not in the automaton.
    UnknownState(State),
    /// The transition used a symbol that is not in the alphabet.
    UnknownSymbol(Symbol),
    /// The start state cannot be removed, only replaced.
    StartState(State),
}

impl std::fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutomatonError::UnknownState(state) => write!(f, "Unknown state: {}", state),
            AutomatonError::UnknownSymbol(symbol) => write!(f, "Unknown symbol: {}", symbol),
            AutomatonError::StartState(state) => write!(f, "Cannot remove start state: {}", state),
        }
    }
}

impl std::error::Error for AutomatonError {}
