use dfa_rs::dfa::Dfa;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut dfa = Dfa::default();
    println!("dfa = {:?}", dfa);

    dfa.add_alphabet(['a', 'b']);
    dfa.add_states(["q1", "q2"]);
    dfa.add_accepting_state("q2");
    dfa.add_default_reject_state();

    // Words starting with "ab"
    dfa.add_transition("q0", 'a', "q1")?;
    dfa.add_transition("q0", 'b', "reject")?;
    dfa.add_transition("q1", 'b', "q2")?;
    dfa.add_transition("q1", 'a', "reject")?;
    dfa.self_transition_all("q2")?;

    // Dropped: (q0, a) is already set
    let written = dfa.add_transition("q0", 'a', "q2")?;
    println!("second write on (q0, a) kept = {}", written);

    println!("{}", dfa);

    for word in ["", "a", "ab", "abba", "ba", "abc"] {
        let run = dfa.run(word.chars());
        println!(
            "{:>6?} -> {} (halt: {}, last: {})",
            word,
            run.is_accepted(),
            run.halt(),
            run.last()
        );
    }

    dfa.start_state("init")?;
    println!("after renaming the start state:\n{}", dfa);

    Ok(())
}
