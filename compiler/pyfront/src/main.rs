//! pyfront CLI.

use pyfront::commands::{format_file, lex_file, parse_file};
use pyfront::ParseOptions;

fn main() {
    pyfront::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: pyfront lex <file.py>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" | "fmt" => {
            let mut options = ParseOptions::default();
            let mut path = None;
            for arg in args.iter().skip(2) {
                if arg == "--recover" || arg == "-r" {
                    options.recover = true;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }
            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: pyfront {command} <file.py> [--recover]");
                std::process::exit(1);
            };
            if command == "parse" {
                parse_file(path, options);
            } else {
                format_file(path, options);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("pyfront {}", env!("CARGO_PKG_VERSION"));
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
    println!("pyfront: Python 2/3 front end");
    println!();
    println!("Usage: pyfront <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.py>      Tokenize and display the filtered token stream");
    println!("  parse <file.py>    Parse and summarize the syntax tree");
    println!("  fmt <file.py>      Parse and write the tree back as source");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Parse and fmt options:");
    println!("  --recover, -r      Replace unparsable statements with a placeholder");
    println!("                     comment and keep going");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>      Enable tracing (e.g. pyfront_parse=debug)");
    println!("  PYFRONT_LOG_TREE=1     Hierarchical trace output");
}
