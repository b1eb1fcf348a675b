use super::token::{Operator, Token};
use std::rc::Rc;

/// A classified source line. Produced once per line by [`classify`](super::classify)
/// so the runtime never re-inspects text.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    /// Nothing but whitespace.
    Blank,
    /// `VAR <type> <name> <value>`, consumed by the loader and inert at runtime.
    Declare(Ident, Ident, Rc<str>),
    /// `ASSIGN <target> [<operator>] [<operand>...]`
    Assign(Ident, Option<Operator>, Vec<Operand>),
    /// `PRINT <operand>...`
    Print(Vec<Operand>),
    /// `GOTO <label>`
    Goto(Ident),
    /// `IF <operator> <operand> <operand> <label>`
    If(Operator, Operand, Operand, Ident),
    /// Anything else. Advances the program counter without effect.
    Unrecognized,
}

impl Statement {
    pub fn is_blank(&self) -> bool {
        matches!(self, Statement::Blank)
    }
}

/// Names of variables and labels. Stored upper-cased, compared as stored.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct Ident(Rc<str>);

impl Ident {
    pub fn new(s: &str) -> Ident {
        Ident(s.to_ascii_uppercase().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An operand as written in the source. Whether it names a variable or
/// is a literal is only decided when it is evaluated, since that depends
/// on which variables are bound at that moment.
#[derive(Debug, PartialEq, Clone)]
pub struct Operand(Rc<str>);

impl Operand {
    pub fn new(s: &str) -> Operand {
        Operand(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Token> for Operand {
    fn from(token: &Token) -> Operand {
        Operand(token.to_string().into())
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
