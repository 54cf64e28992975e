//! The basics: mixed arguments, collections and the lenient arity rules.
//!
//! Run with `RUST_LOG=trace cargo run --example basic` to see arity
//! mismatches logged.

use percent_format::{format_with, Formatter, Opaque, Output};
use std::collections::{BTreeMap, LinkedList};
use std::fmt;

struct X; // no textual form

struct Y; // has Display

impl fmt::Display for Y {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Type Y")
    }
}

fn main() {
    env_logger::init();

    let formatter = Formatter::new();

    println!("{}", format_with!(formatter, "Number: %?, string: %?", 100.1, "abc"));

    let num_i = 10;
    let num_d = 20.5;
    println!(
        "{}",
        format_with!(
            formatter,
            "Integer value: %?, double value: %?, wrong odd arguments: %?, %?, %?",
            num_i,
            num_d
        )
    );

    let fruits: LinkedList<&str> = ["apple", "pear", "banana"].into_iter().collect();
    println!(
        "{}",
        format_with!(formatter, "List of %? elements: %?", fruits.len(), fruits)
    );

    let map: BTreeMap<u32, bool> = [(2, true), (4, false), (8, true)].into_iter().collect();
    println!(
        "{}",
        format_with!(formatter, "Map of %? elements: %?", map.len(), map)
    );

    println!(
        "{}",
        format_with!(
            formatter,
            "Unknown type is shown as '%?', known type example: '%?'",
            Opaque(X),
            Output(Y)
        )
    );

    println!("{}", format_with!(formatter, "No args"));
}
