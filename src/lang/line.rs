use super::ast::*;
use super::lex::*;
use super::parse::*;
use std::rc::Rc;

/// One numbered source line with its classification.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    source: Rc<str>,
    label: Option<Ident>,
    statement: Statement,
}

impl Line {
    pub fn new(number: usize, s: &str) -> Line {
        let source = s.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let (label, statement) = classify(&lex(source));
        Line {
            number,
            source: source.into(),
            label,
            statement,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn label(&self) -> Option<&Ident> {
        self.label.as_ref()
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn is_blank(&self) -> bool {
        self.statement.is_blank()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
