use crate::error;
use crate::lang::{Error, Operator};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Maps upper-cased label names to the 1-based line they sit on.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Link {
    labels: BTreeMap<Rc<str>, usize>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Records a label unless it already exists, in which case the line
    /// of the earlier definition is returned and nothing changes.
    pub fn insert(&mut self, label: &str, line_number: usize) -> Option<usize> {
        let key = label.to_ascii_uppercase();
        if let Some(existing) = self.labels.get(key.as_str()) {
            return Some(*existing);
        }
        self.labels.insert(key.into(), line_number);
        None
    }

    pub fn resolve(&self, label: &str) -> Result<usize> {
        match self.labels.get(label.to_ascii_uppercase().as_str()) {
            Some(line_number) => Ok(*line_number),
            None => Err(error!(LabelNotDefined; format!("Label {} is not defined", label))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels.iter().map(|(name, line)| (&**name, *line))
    }

    pub fn table(&self) -> String {
        let mut s = String::from("Labels:\n");
        s.push_str(&format!("{:>9} {:>16}\n", "Label", "Statement"));
        for (name, line) in self.iter() {
            s.push_str(&format!("    {:<10}   {}\n", name, line));
        }
        s
    }
}

/// The four relations a conditional jump can test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl Comparison {
    pub fn compare(self, lhs: i64, rhs: i64) -> bool {
        use Comparison::*;
        match self {
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
        }
    }
}

impl TryFrom<&Operator> for Comparison {
    type Error = Error;
    fn try_from(op: &Operator) -> Result<Self> {
        match op {
            Operator::Greater => Ok(Comparison::Greater),
            Operator::GreaterEqual => Ok(Comparison::GreaterEqual),
            Operator::Less => Ok(Comparison::Less),
            Operator::LessEqual => Ok(Comparison::LessEqual),
            _ => Err(error!(InvalidExpression; format!("{} is not a valid comparison", op))),
        }
    }
}
