//! DFA to DOT (Graphviz) conversion.
//!
//! # DOT Format
//!
//! The generated DOT output follows these conventions:
//! - **States** are rendered as circles, **accepting states** as double circles
//! - The **reject state**, if any, is drawn with a dashed outline
//! - An invisible entry node points at the **start state**
//! - Parallel transitions between the same pair of states are merged into one
//!   edge labeled with a comma-separated list of symbols
//! - Unset transitions are not drawn
//!
//! # Examples
//!
//! ```
//! use dfa_rs::dfa::Dfa;
//!
//! let mut dfa = Dfa::new();
//! dfa.add_alphabet(['a', 'b']);
//! dfa.add_accepting_state("q1");
//! dfa.add_transition("q0", 'a', "q1").unwrap();
//!
//! let dot = dfa.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.contains("\"q0\" -> \"q1\" [label=\"a\"];"));
//! ```

use std::fmt::Write as _;

use crate::dfa::Dfa;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Layout direction (default: "LR")
    pub rankdir: &'static str,
    /// Shape for ordinary states (default: "circle")
    pub state_shape: &'static str,
    /// Shape for accepting states (default: "doublecircle")
    pub accepting_shape: &'static str,
    /// Style for the reject state (default: "dashed")
    pub reject_style: &'static str,
    /// Whether to draw the invisible entry arrow into the start state (default: true)
    pub show_entry: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            rankdir: "LR",
            state_shape: "circle",
            accepting_shape: "doublecircle",
            reject_style: "dashed",
            show_entry: true,
        }
    }
}

fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Dfa {
    /// Converts the automaton to DOT (Graphviz) format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the automaton to DOT format with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfa_rs::dfa::Dfa;
    /// use dfa_rs::dot::DotConfig;
    ///
    /// let dfa = Dfa::new();
    /// let config = DotConfig {
    ///     rankdir: "TB",
    ///     ..DotConfig::default()
    /// };
    ///
    /// let dot = dfa.to_dot_with_config(&config).unwrap();
    /// assert!(dot.contains("rankdir=TB;"));
    /// ```
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "rankdir={};", config.rankdir)?;
        writeln!(dot, "node [shape={}];", config.state_shape)?;

        if config.show_entry {
            writeln!(dot, "__start [shape=point, style=invis];")?;
        }

        for state in self.states() {
            let mut attrs = Vec::new();
            if self.is_accepting(state.as_str()) {
                attrs.push(format!("shape={}", config.accepting_shape));
            }
            if self.is_reject(state.as_str()) {
                attrs.push(format!("style={}", config.reject_style));
            }
            if attrs.is_empty() {
                writeln!(dot, "{};", quote(state.as_str()))?;
            } else {
                writeln!(dot, "{} [{}];", quote(state.as_str()), attrs.join(", "))?;
            }
        }

        if config.show_entry {
            writeln!(dot, "__start -> {};", quote(self.start().as_str()))?;
        }

        // Merge parallel edges, keeping symbols in alphabet order
        for state in self.states() {
            let mut edges: Vec<(&str, Vec<&str>)> = Vec::new();
            for symbol in self.alphabet() {
                if let Some(target) = self.transition(state.as_str(), symbol.as_str()) {
                    match edges.iter_mut().find(|(t, _)| *t == target.as_str()) {
                        Some((_, symbols)) => symbols.push(symbol.as_str()),
                        None => edges.push((target.as_str(), vec![symbol.as_str()])),
                    }
                }
            }
            for (target, symbols) in &edges {
                writeln!(
                    dot,
                    "{} -> {} [label={}];",
                    quote(state.as_str()),
                    quote(target),
                    quote(&symbols.join(", "))
                )?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
