/*!
## Rust Machine Module

This Rust module loads and executes BEEP programs.

*/

mod link;
mod listing;
mod operation;
mod program;
mod runtime;
mod val;
mod var;

pub use link::Comparison;
pub use link::Link;
pub use listing::Listing;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Halt;
pub use runtime::Outcome;
pub use runtime::Runtime;
pub use runtime::EXECUTION_LIMIT;
pub use val::Val;
pub use var::Var;
pub use var::{INT_TYPE, STRING_TYPE};

#[cfg(test)]
mod tests;
