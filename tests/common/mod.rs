#![allow(dead_code)]
use beep::mach::{Halt, Listing, Outcome, Runtime};

pub fn exec(source: &str) -> String {
    exec_outcome(source).0
}

pub fn exec_outcome(source: &str) -> (String, Outcome) {
    let listing = Listing::load_str(source).expect("program should load");
    let mut out: Vec<u8> = vec![];
    let outcome = Runtime::run(listing, false, &mut out).expect("writing to a Vec");
    let mut s = String::from_utf8(out).expect("output is UTF-8");
    match &outcome.halt {
        Halt::Normal => {}
        Halt::Error(error) => s.push_str(&format!("{}\n", error)),
        Halt::Limit => s.push_str("LIMIT\n"),
    }
    (s, outcome)
}
