//! `hash-set` — set or delete a hash param in a URL.
//!
//! Usage:
//!   hash-set '<key>' ['<value>']
//!
//! The URL is read from stdin and the rewritten URL printed. Omitting the
//! value deletes the key.

use hash_query::url_params::set_url_value;
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
    let value = args.get(2).cloned();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match set_url_value(buf.trim(), &key, value.as_deref()) {
        Ok(url) => println!("{url}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
