use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    String(String),
}

impl Val {
    pub fn is_integer(&self) -> bool {
        matches!(self, Val::Integer(_))
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

impl TryFrom<&Val> for i64 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(*n),
            Val::String(s) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(InvalidValueType; format!("'{}' is not numeric", s))),
            },
        }
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Integer(if b { 1 } else { 0 })
    }
}
