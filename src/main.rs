use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

use nameparts::ParsedName;

const USAGE: &str = "
Usage:
    nameparts parse <name>
    nameparts parse -

Splits a personal name into salutation, first name, middle name, last
name, nickname, and suffix, printed as one JSON object per name.

If `-` is the argument, newline-separated names are read from stdin.
Otherwise the remaining arguments are joined and parsed as one name.
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "parse" {
        parse_mode(&args);
    } else {
        eprintln!("{}", USAGE);
        process::exit(64);
    }
}

fn parse_mode(args: &[String]) {
    if args[2] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            match line {
                Ok(input) => {
                    let parsed = ParsedName::parse(&input);
                    let output = serde_json::to_string(&parsed).unwrap();
                    if writeln!(io::stdout(), "{}", output).is_err() {
                        break;
                    }
                }
                Err(_) => {
                    break;
                }
            }
        }
    } else {
        let parsed = ParsedName::parse(&args[2..].join(" "));
        println!("{}", serde_json::to_string(&parsed).unwrap());
    }
}
