use super::ast::*;
use super::*;

mod parse_test;

fn classify_str(s: &str) -> Statement {
    let (_, statement) = classify(&lex(s));
    statement
}

fn operands(v: &[&str]) -> Vec<Operand> {
    v.iter().map(|s| Operand::new(s)).collect()
}
