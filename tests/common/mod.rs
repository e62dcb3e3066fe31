use atomese::prelude::*;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::builder().is_test(true).try_init() {}
}

pub fn rendered(atom: &Atom) -> String {
    let mut s = String::new();
    render(atom, &mut s).unwrap();
    s
}

/// Renders atom and parses the text back with tokenizer.
pub fn round_trip_with(atom: &Atom, tokenizer: &Tokenizer) -> Atom {
    let text = rendered(atom);
    let mut atoms = SExprParser::new(&text).parse_all(tokenizer).unwrap();
    assert_eq!(atoms.len(), 1, "{:?} parsed as {:?}", text, atoms);
    atoms.remove(0)
}

pub fn round_trip(atom: &Atom) -> Atom {
    round_trip_with(atom, &Tokenizer::default())
}
