//! Word membership for `(100)* ∪ 10*`.
//!
//! Builds the nine-state automaton for the language and runs the given words
//! through it, optionally printing the automaton as DOT and the number of
//! accepted words per length.
//!
//! Run with: `cargo run --example binary-language -- 100100 1000 101`
//! With options: `cargo run --example binary-language -- --count 12 --dot`

use clap::Parser;
use dfa_rs::dfa::Dfa;
use dfa_rs::error::AutomatonError;

#[derive(Parser, Debug)]
#[command(name = "binary-language")]
#[command(about = "Test words against the (100)* ∪ 10* automaton")]
struct Args {
    /// Words to test
    words: Vec<String>,

    /// Print accepted-word counts for every length up to this one
    #[arg(short, long)]
    count: Option<usize>,

    /// Print the automaton in DOT format
    #[arg(long)]
    dot: bool,

    /// Print the automaton table
    #[arg(long)]
    table: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn build() -> Result<Dfa, AutomatonError> {
    let mut d = Dfa::new();
    d.add_alphabet([1, 0]);
    d.add_states(["A", "BEF", "CF", "DF", "F", "B", "C", "D"]);
    for state in ["A", "BEF", "CF", "DF", "F", "D"] {
        d.add_accepting_state(state);
    }
    d.start_state("A")?;
    d.add_reject_state("ø");

    for (state, symbol, target) in [
        ("A", 0, "ø"),
        ("A", 1, "BEF"),
        ("BEF", 1, "ø"),
        ("BEF", 0, "CF"),
        ("CF", 1, "ø"),
        ("CF", 0, "DF"),
        ("DF", 0, "F"),
        ("DF", 1, "B"),
        ("F", 1, "ø"),
        ("B", 1, "ø"),
        ("B", 0, "C"),
        ("C", 1, "ø"),
        ("C", 0, "D"),
        ("D", 0, "ø"),
        ("D", 1, "B"),
    ] {
        d.add_transition(state, symbol, target)?;
    }
    d.add_self_transition("F", 0)?;

    Ok(d)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let dfa = build()?;
    log::info!("built automaton with {} states", dfa.num_states());

    if args.table {
        println!("{}\n", dfa);
    }
    if args.dot {
        print!("{}", dfa.to_dot()?);
    }

    for word in &args.words {
        let run = dfa.run(word.chars());
        let verdict = if run.is_accepted() { "accept" } else { "reject" };
        println!("{:<16} {} ({})", word, verdict, run.halt());
    }

    if let Some(max) = args.count {
        println!("── Accepted words per length ──");
        for length in 0..=max {
            println!("{:>4}: {}", length, dfa.count_accepted(length));
        }
    }

    Ok(())
}
