//! `hash-get` — read a hash param from a URL.
//!
//! Usage:
//!   hash-get '<key>'
//!
//! The URL is read from stdin. Prints the decoded value; exits 1 when the
//! key is absent or the URL does not parse.

use hash_query::url_params::get_url_value;
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let key = match args.get(1) {
        Some(k) => k.clone(),
        None => {
            eprintln!("First argument must be a hash param key.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match get_url_value(buf.trim(), &key) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
