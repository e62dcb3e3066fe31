//! REPL that parses atoms and prints their canonical rendering.
//!
//! Run as:                 `RUST_LOG=debug cargo run --example render_repl`.
//! Render into a buffer:   `cargo run --example render_repl -- -c 16`.
//!
//! With a capacity, atoms whose text does not fit show the truncated prefix
//! the buffer kept, followed by the reified SinkOverflow error.

use clap::{Arg, Command};
use colored::*;
use log::{debug, LevelFilter};

use atomese::prelude::*;
use atomese::token::cli_stream::CliStream;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("Atom render REPL")
        .version("0.1")
        .about("Parses atoms and prints their canonical text")
        .arg(
            Arg::new("capacity")
                .short('c')
                .long("capacity")
                .takes_value(true)
                .help("Render into a fixed buffer of this many bytes"),
        )
        .arg(
            Arg::new("max-depth")
                .short('d')
                .long("max-depth")
                .takes_value(true)
                .help("Deepest expression nesting to accept"),
        )
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .help("Only accept printable ASCII symbol and variable names"),
        )
        .get_matches();

    let capacity = match matches.value_of("capacity") {
        Some(s) => Some(parse_count(s)?),
        None => None,
    };
    let limits = match matches.value_of("max-depth") {
        Some(s) => Limits::with_max_depth(parse_count(s)?),
        None => Limits::default(),
    };
    let tokenizer = if matches.is_present("ascii") {
        Tokenizer::with_defaults(policy_ascii)
    } else {
        Tokenizer::default()
    };
    let renderer = Renderer::with_limits(limits);

    for input in CliStream::default() {
        let mut parser = SExprParser::with_limits(&input, limits);
        loop {
            match parser.parse(&tokenizer) {
                Ok(Some(atom)) => print_atom(&atom, &renderer, capacity),
                Ok(None) => break,
                Err(err) => {
                    print_error(&err);
                    break;
                }
            }
        }
        println!();
    }

    Ok(())
}

fn parse_count(s: &str) -> Result<usize, String> {
    s.parse::<usize>()
        .map_err(|err| format!("Invalid count \"{}\": {}", s, err))
}

fn print_atom(atom: &Atom, renderer: &Renderer, capacity: Option<usize>) {
    let result = match capacity {
        Some(capacity) => {
            let mut buf = BoundedBuf::new(capacity);
            let result = renderer.render(atom, &mut buf);
            print!("-> {}", buf.as_str().green());
            result
        }
        None => {
            let mut s = String::new();
            let result = renderer.render(atom, &mut s);
            print!("-> {}", s.green());
            result
        }
    };
    println!();

    if let Err(err) = result {
        print_error(&err);
    }
}

fn print_error(err: &Error) {
    debug!("{:?}", err);
    println!("{}", atom_to_str(&err.reify()).red());
}
