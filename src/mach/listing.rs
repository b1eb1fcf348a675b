use super::{Link, Program, Var};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// A loaded BEEP program: its lines, the label table and the variables
/// declared with `VAR`, all gathered in one pass over the text.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    program: Program,
    link: Link,
    var: Var,
    warnings: Vec<String>,
}

impl Listing {
    pub fn load_str(source: &str) -> Result<Listing> {
        let mut link = Link::new();
        let mut var = Var::new();
        let mut warnings = vec![];
        let mut lines = vec![];
        for (index, s) in source.lines().enumerate() {
            let line = Line::new(index + 1, s);
            if let Some(label) = line.label() {
                if let Some(first) = link.insert(label.as_str(), line.number()) {
                    warn!(label = label.as_str(), first, again = line.number(), "duplicate label");
                    warnings.push(format!(
                        "label '{}' appears on multiple lines: {} and {}",
                        label,
                        first,
                        line.number()
                    ));
                }
            }
            if let Statement::Declare(var_type, var_name, value) = line.statement() {
                if let Err(error) = var.declare(var_type.as_str(), var_name.as_str(), value) {
                    return Err(error.in_line_number(Some(line.number())));
                }
            }
            lines.push(line);
        }
        debug!(
            lines = lines.len(),
            labels = link.len(),
            vars = var.len(),
            "program loaded"
        );
        Ok(Listing {
            program: Program::new(lines),
            link,
            var,
            warnings,
        })
    }

    /// Files are read as UTF-8 when they are valid, otherwise one
    /// character per byte.
    pub fn load_file<P: AsRef<Path>>(filename: P) -> Result<Listing> {
        let bytes = match std::fs::read(filename.as_ref()) {
            Ok(bytes) => bytes,
            Err(error) => {
                let msg = format!("{}: {}", filename.as_ref().display(), error);
                match error.kind() {
                    ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                    _ => return Err(error!(InternalError; msg)),
                }
            }
        };
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(error) => error.into_bytes().iter().map(|&b| char::from(b)).collect(),
        };
        Listing::load_str(&text)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Program, Link, Var) {
        (self.program, self.link, self.var)
    }

    /// Every line prefixed by its number, as `N. text`.
    pub fn source_lines(&self) -> String {
        self.program
            .lines()
            .map(|line| format!("{}. {}\n", line.number(), line))
            .collect()
    }
}
