//! JOT command-line tool for validating and inspecting JSON scalars.
//!
//! Usage: jot [OPTIONS] [FILE]
//!
//! Reads a single JSON scalar (null, true, false, or a number) from FILE,
//! or from stdin when FILE is absent or "-", and prints the parsed value.
//!
//! Options:
//!   --check          Validate only; exit 0 if the input parses, 1 if not
//!   -h, --help       Print help
//!   -V, --version    Print version

use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut check_only = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("jot {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--check" => {
                check_only = true;
            }
            arg => {
                if arg.starts_with('-') && arg != "-" {
                    eprintln!("Error: Unknown option: {}", arg);
                    process::exit(2);
                }
                if input_path.is_some() {
                    eprintln!("Error: Only one input file may be given");
                    process::exit(2);
                }
                input_path = Some(arg);
            }
        }
        i += 1;
    }

    let input = match read_input(input_path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: Cannot read input: {}", e);
            process::exit(2);
        }
    };

    match libjot::parse(&input) {
        Ok(value) => {
            if !check_only {
                println!("{:?}", value);
            }
        }
        Err(err) => {
            if !check_only {
                eprintln!("Error: {}", err);
            }
            process::exit(1);
        }
    }
}

/// Read the input text from a file, or stdin when no file is given.
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some("-") | None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn print_help() {
    println!("jot - validate and inspect JSON scalars");
    println!();
    println!("Usage: jot [OPTIONS] [FILE]");
    println!();
    println!("Reads a single JSON scalar (null, true, false, or a number)");
    println!("from FILE, or from stdin when FILE is absent or \"-\", and");
    println!("prints the parsed value.");
    println!();
    println!("Options:");
    println!("  --check          Validate only; exit 0 if the input parses, 1 if not");
    println!("  -h, --help       Print help");
    println!("  -V, --version    Print version");
}
