//! Basic example of using the CTS engine

use cts_core::{
    forward_transform, inverse_transform, match_candidate, Alphabet, Operator, PresetTable,
    Session, SessionConfig, Symbol,
};

fn main() {
    // Pick the four-symbol alphabet from the built-in presets
    let presets = PresetTable::default();
    let alphabet = presets.alphabet_for(4).expect("four-symbol preset exists");
    println!("Alphabet: {}\n", alphabet);

    // Read the two rows and the operator as they appear in the puzzle
    let top = alphabet.parse_sequence("+ ▲ ● ■").expect("top row uses the alphabet");
    let bottom = alphabet.parse_sequence("▲ ■ + ●").expect("bottom row uses the alphabet");
    let operator = Operator::parse("1324", alphabet.len()).expect("operator is valid");

    let forward = forward_transform(&alphabet, &top, &bottom, operator.as_slice());
    let inverse = inverse_transform(&alphabet, &top, &bottom, operator.as_slice());
    println!("Top→Bottom code: {}", display(forward.as_ref()));
    println!("Bottom→Top code: {}", display(inverse.as_ref()));

    // Check the options printed under the puzzle
    let options = "1243, 3412\n4231";
    match match_candidate(forward.as_ref(), options) {
        Some(found) => println!("Matching option: {}\n", found),
        None => println!("No option matches\n"),
    }

    // The same puzzle entered click by click through a session
    println!("--- Session ---\n");
    let custom: Alphabet = "abc".parse().expect("distinct symbols");
    let mut session = Session::new(SessionConfig::new(custom));
    for c in "cab".chars() {
        session.push_top(Symbol(c));
    }
    for c in "bca".chars() {
        session.push_bottom(Symbol(c));
    }
    session.set_operator_text("2 3 1");
    session.set_candidates_text("123 321 213");

    let evaluation = session.evaluate();
    println!("Status: {:?}", evaluation.status);
    println!("Forward: {}", display(evaluation.forward.as_ref()));
    println!("Inverse: {}", display(evaluation.inverse.as_ref()));
}

fn display(code: Option<&cts_core::DerivedCode>) -> &str {
    code.map(|c| c.as_str()).unwrap_or("—")
}
