//! Running input through the automaton.
//!
//! A run starts at the start state and consumes one symbol per step. It halts
//! either after the last symbol, or early when a symbol is outside the
//! alphabet or the current state has no target for it. Only a run that
//! consumed all of its input can accept.

use std::fmt;

use log::debug;

use crate::dfa::Dfa;
use crate::types::{State, Symbol};

/// Why a run stopped.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Halt {
    /// All input was consumed.
    Consumed,
    /// The symbol is not in the alphabet.
    UnknownSymbol(Symbol),
    /// The state has no target for the symbol: the entry is unset, or the
    /// state itself was removed while still being targeted.
    Undefined { state: State, symbol: Symbol },
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::Consumed => write!(f, "consumed"),
            Halt::UnknownSymbol(symbol) => write!(f, "unknown symbol {}", symbol),
            Halt::Undefined { state, symbol } => write!(f, "no transition from {} on {}", state, symbol),
        }
    }
}

/// A finished run: the visited states and how it ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Run {
    path: Vec<State>,
    last: State,
    halt: Halt,
    accepted: bool,
}

impl Run {
    /// Visited states, starting with the start state.
    pub fn path(&self) -> &[State] {
        &self.path
    }

    /// The state the run stopped in.
    pub fn last(&self) -> &State {
        &self.last
    }

    pub fn halt(&self) -> &Halt {
        &self.halt
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl Dfa {
    /// Checks whether the automaton accepts `input`.
    ///
    /// Symbols outside the alphabet reject immediately. The empty input is
    /// accepted iff the start state is accepting.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfa_rs::dfa::Dfa;
    ///
    /// let mut dfa = Dfa::new();
    /// dfa.add_alphabet(["ab", "cd"]);
    /// dfa.add_accepting_state("done");
    /// dfa.add_transition("q0", "ab", "done").unwrap();
    ///
    /// assert!(dfa.parse(["ab"]));
    /// assert!(!dfa.parse(["cd"]));
    /// assert!(!dfa.parse(["ab", "ef"]));
    /// ```
    pub fn parse<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        debug!("parse(start = {})", self.start());
        let (last, halt) = self.walk(input, |_| {});
        halt == Halt::Consumed && self.is_accepting(last.as_str())
    }

    /// [`Dfa::parse`] over the characters of `word`, one symbol per `char`.
    pub fn accepts(&self, word: &str) -> bool {
        self.parse(word.chars())
    }

    /// Like [`Dfa::parse`], but records every visited state.
    pub fn run<I>(&self, input: I) -> Run
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        debug!("run(start = {})", self.start());
        let mut path = Vec::new();
        let (last, halt) = self.walk(input, |state| path.push(state.clone()));
        let accepted = halt == Halt::Consumed && self.is_accepting(last.as_str());
        Run {
            path,
            last: last.clone(),
            halt,
            accepted,
        }
    }

    fn walk<'a, I>(&'a self, input: I, mut visit: impl FnMut(&'a State)) -> (&'a State, Halt)
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let mut current = self.start();
        visit(current);

        for symbol in input {
            let symbol = symbol.into();
            let Some(row) = self.row(current.as_str()) else {
                if !self.contains_symbol(symbol.as_str()) {
                    return (current, Halt::UnknownSymbol(symbol));
                }
                let state = current.clone();
                return (current, Halt::Undefined { state, symbol });
            };
            match row.get(&symbol) {
                None => return (current, Halt::UnknownSymbol(symbol)),
                Some(None) => {
                    let state = current.clone();
                    return (current, Halt::Undefined { state, symbol });
                }
                Some(Some(target)) => {
                    current = target;
                    visit(current);
                }
            }
        }

        (current, Halt::Consumed)
    }
}
