use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub const INT_TYPE: &str = "INT";
pub const STRING_TYPE: &str = "STRING";

/// ## Variable memory
///
/// Names are case-insensitive and kept upper-cased. A variable keeps the
/// type tag it was declared with for its whole life; only the value moves.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    vars: BTreeMap<Rc<str>, Entry>,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    var_type: Rc<str>,
    val: Val,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Binds a declared variable. `INT` initializers must be numeric,
    /// every other tag keeps the text as written.
    pub fn declare(&mut self, var_type: &str, var_name: &str, value: &str) -> Result<()> {
        let var_type = var_type.to_ascii_uppercase();
        let val = if var_type == INT_TYPE {
            match value.trim().parse::<i64>() {
                Ok(n) => Val::Integer(n),
                Err(_) => {
                    return Err(error!(InvalidValueType; format!("'{}' is not numeric", value)))
                }
            }
        } else {
            Val::String(value.to_string())
        };
        self.vars.insert(
            var_name.to_ascii_uppercase().into(),
            Entry {
                var_type: var_type.into(),
                val,
            },
        );
        Ok(())
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Val> {
        self.vars
            .get(var_name.to_ascii_uppercase().as_str())
            .map(|entry| &entry.val)
    }

    pub fn var_type(&self, var_name: &str) -> Option<&str> {
        self.vars
            .get(var_name.to_ascii_uppercase().as_str())
            .map(|entry| &*entry.var_type)
    }

    /// Overwrites the value. A name never declared is bound here, tagged
    /// after the kind of its first value.
    pub fn store(&mut self, var_name: &str, value: Val) {
        let key = var_name.to_ascii_uppercase();
        match self.vars.get_mut(key.as_str()) {
            Some(entry) => entry.val = value,
            None => {
                let var_type = if value.is_integer() {
                    INT_TYPE
                } else {
                    STRING_TYPE
                };
                self.vars.insert(
                    key.into(),
                    Entry {
                        var_type: var_type.into(),
                        val: value,
                    },
                );
            }
        }
    }

    /// Name, type tag and value, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Val)> {
        self.vars
            .iter()
            .map(|(name, entry)| (&**name, &*entry.var_type, &entry.val))
    }

    pub fn table(&self) -> String {
        let mut s = String::from("Variables:\n");
        s.push_str(&format!("{:>12} {:>8} {:>8}\n", "Variable", "Type", "Value"));
        for (name, var_type, val) in self.iter() {
            let row = format!("    {:<10}   {:<8} {}", name, var_type, val);
            s.push_str(row.trim_end());
            s.push('\n');
        }
        s
    }
}
