//! esf CLI
//!
//! Expression parenthesis spacing for ECMAScript sources.

use esf::commands::{lex_file, parens_file, run_format};

fn main() {
    esf::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "fmt" => {
            run_format(&args[2..]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: esf lex <file.js>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parens" => {
            if args.len() < 3 {
                eprintln!("Usage: esf parens <file.js>");
                std::process::exit(1);
            }
            parens_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("esf {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("esf - expression parenthesis spacing for JavaScript");
    println!();
    println!("Usage: esf <command> [options]");
    println!();
    println!("Commands:");
    println!("  fmt [paths...]    Format .js files (see `esf fmt --help`)");
    println!("  lex <file>        Dump the token stream");
    println!("  parens <file>     List parenthesized nodes");
    println!("  help              Show this message");
    println!("  version           Show version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=esf_fmt=debug) for tracing output.");
}
