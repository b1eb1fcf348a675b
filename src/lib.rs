//! # BEEP
//!
//! A small line-oriented language for teaching how interpreters work.
//! A BEEP program is a text file of declarations, labels and four kinds
//! of statement. Lines run top to bottom unless a `GOTO` or `IF` moves
//! the program counter.
//!
//! ```text
//! VAR INT count 1
//! top: PRINT "count is" count
//! ASSIGN count + count 1
//! IF <= count 3 top
//! ```
//!
//! Run a program with `beep program.beep`. Add `-v` to see every line as
//! it executes.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

#[path = "doc/errors.rs"]
#[allow(non_snake_case)]
pub mod ___Errors;

pub mod lang;
pub mod mach;
pub mod term;
