use abre_automata::{nfa_to_dfa, postfix_to_dfa, to_postfix, Automaton, Compiler, Graph, Matcher};

fn main() {
    println!("Thompson / Subset / Direct Automaton Construction Demo");
    println!("======================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let patterns: Vec<String> = if args.is_empty() {
        ["a", "a.b", "a|b", "a*", "a+", "a.b*", "(a|b)*.a.b.b", "(a.b)+|b"]
            .iter()
            .map(|p| p.to_string())
            .collect()
    } else {
        args
    };

    for pattern in &patterns {
        println!("\n=== Pattern: '{}' ===", pattern);

        let postfix = match to_postfix(pattern) {
            Ok(postfix) => postfix,
            Err(e) => {
                println!("Failed to parse pattern: {}", e);
                continue;
            }
        };
        println!("Postfix: {}", postfix.iter().collect::<String>());

        let nfa = match Compiler::new().compile(&postfix) {
            Ok(nfa) => nfa,
            Err(e) => {
                println!("Failed to compile: {}", e);
                continue;
            }
        };
        println!("\n--- Thompson NFA ---");
        print_automaton(&nfa);

        match nfa_to_dfa(&nfa) {
            Ok(dfa) => {
                println!("\n--- Subset DFA ---");
                print_automaton(&dfa);
            }
            Err(e) => println!("Failed to determinize: {}", e),
        }

        match postfix_to_dfa(&postfix) {
            Ok(dfa) => {
                println!("\n--- Direct DFA ---");
                print_automaton(&dfa);
                let sample = "abab";
                let t = Matcher::new(&dfa).tokenize(sample);
                println!(
                    "Tokenize {:?}: matched = {}, tokens = {:?}, residue = {:?}",
                    sample, t.matched, t.tokens, t.residue
                );
            }
            Err(e) => println!("Failed to build direct DFA: {}", e),
        }
    }
}

fn print_automaton(automaton: &Automaton) {
    let graph = Graph::new(automaton);
    println!("Start state: {}", automaton.start());
    println!("Accepting states: {:?}", automaton.accepting());
    println!("States:");
    for node in &graph.nodes {
        let marker = if node.accepting { " (accept)" } else { "" };
        println!("  {}{}", node.label(), marker);
        for edge in graph.edges.iter().filter(|e| e.from == node.id) {
            println!("    '{}' -> {}", edge.label, edge.to);
        }
    }
}
