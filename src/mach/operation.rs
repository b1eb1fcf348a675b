use super::Val;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Longest string `*` may build, in bytes.
pub const MAX_STRING_LEN: usize = 1 << 20;

/// Operator semantics for `ASSIGN`. Each takes already-evaluated values
/// and names the tags it accepts.
pub struct Operation {}

impl Operation {
    /// `*` String repeated by an integer count. A negative count yields
    /// the empty string. Results longer than [`MAX_STRING_LEN`] are refused.
    pub fn replicate(lhs: Val, rhs: Val) -> Result<Val> {
        let count = i64::try_from(&rhs)?;
        let s = match lhs {
            Val::String(s) => s,
            Val::Integer(n) => {
                return Err(error!(InvalidValueType; format!("'{}' is not a string", n)))
            }
        };
        let count = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
        match s.len().checked_mul(count) {
            Some(len) if len <= MAX_STRING_LEN => Ok(Val::String(s.repeat(count))),
            _ => Err(error!(
                InvalidValueType;
                format!("'{}' repeated {} times is too long", s, count)
            )),
        }
    }

    pub fn add(lhs: &Val, rhs: &str) -> Result<Val> {
        let (l, r) = Operation::integer_pair(lhs, rhs)?;
        match l.checked_add(r) {
            Some(n) => Ok(Val::Integer(n)),
            None => Err(error!(InvalidValueType; "integer overflow")),
        }
    }

    pub fn subtract(lhs: &Val, rhs: &str) -> Result<Val> {
        let (l, r) = Operation::integer_pair(lhs, rhs)?;
        match l.checked_sub(r) {
            Some(n) => Ok(Val::Integer(n)),
            None => Err(error!(InvalidValueType; "integer overflow")),
        }
    }

    /// `>` and `>=`. Result is stored as integer 1 or 0.
    pub fn greater(lhs: &Val, rhs: &Val, or_equal: bool) -> Result<Val> {
        let l = i64::try_from(lhs)?;
        let r = i64::try_from(rhs)?;
        Ok(Val::from(if or_equal { l >= r } else { l > r }))
    }

    /// `&` accepts either tag on both sides, integers join in decimal.
    pub fn concat(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::String(format!("{}{}", lhs, rhs)))
    }

    fn integer_pair(lhs: &Val, rhs: &str) -> Result<(i64, i64)> {
        let l = i64::try_from(lhs)?;
        match rhs.parse::<i64>() {
            Ok(r) => Ok((l, r)),
            Err(_) => Err(error!(InvalidValueType; format!("'{}' is not numeric", rhs))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn s(s: &str) -> Val {
        Val::String(s.to_string())
    }

    #[test]
    fn test_replicate() {
        assert_eq!(Operation::replicate(s("ab"), Val::Integer(3)), Ok(s("ababab")));
        assert_eq!(Operation::replicate(s("ab"), s("2")), Ok(s("abab")));
        assert_eq!(Operation::replicate(s("ab"), Val::Integer(-1)), Ok(s("")));
        let err = Operation::replicate(s("ab"), s("x")).unwrap_err();
        assert!(err.is(ErrorCode::InvalidValueType));
        let err = Operation::replicate(Val::Integer(5), Val::Integer(2)).unwrap_err();
        assert!(err.is(ErrorCode::InvalidValueType));
    }

    #[test]
    fn test_replicate_too_long() {
        let err = Operation::replicate(s("abc"), Val::Integer(i64::MAX)).unwrap_err();
        assert!(err.is(ErrorCode::InvalidValueType));
        assert_eq!(
            err.text(),
            "'abc' repeated 9223372036854775807 times is too long"
        );
        let err = Operation::replicate(s("ab"), Val::Integer(MAX_STRING_LEN as i64)).unwrap_err();
        assert!(err.is(ErrorCode::InvalidValueType));
        let ok = Operation::replicate(s("a"), Val::Integer(MAX_STRING_LEN as i64)).unwrap();
        assert_eq!(ok.to_string().len(), MAX_STRING_LEN);
        assert_eq!(Operation::replicate(s(""), Val::Integer(i64::MAX)), Ok(s("")));
    }

    #[test]
    fn test_add_subtract() {
        assert_eq!(Operation::add(&Val::Integer(4), "3"), Ok(Val::Integer(7)));
        assert_eq!(Operation::subtract(&Val::Integer(4), "6"), Ok(Val::Integer(-2)));
        assert_eq!(Operation::add(&s("10"), "1"), Ok(Val::Integer(11)));
        let err = Operation::add(&Val::Integer(1), "one").unwrap_err();
        assert_eq!(err.text(), "'one' is not numeric");
        let err = Operation::add(&Val::Integer(i64::MAX), "1").unwrap_err();
        assert!(err.is(ErrorCode::InvalidValueType));
    }

    #[test]
    fn test_greater() {
        assert_eq!(
            Operation::greater(&Val::Integer(3), &Val::Integer(2), false),
            Ok(Val::Integer(1))
        );
        assert_eq!(
            Operation::greater(&Val::Integer(2), &Val::Integer(2), false),
            Ok(Val::Integer(0))
        );
        assert_eq!(
            Operation::greater(&Val::Integer(2), &Val::Integer(2), true),
            Ok(Val::Integer(1))
        );
        let err = Operation::greater(&s("abc"), &Val::Integer(2), true).unwrap_err();
        assert_eq!(err.text(), "'abc' is not numeric");
    }

    #[test]
    fn test_concat() {
        assert_eq!(Operation::concat(s("ab"), s("!")), Ok(s("ab!")));
        assert_eq!(Operation::concat(s("n="), Val::Integer(5)), Ok(s("n=5")));
    }
}
