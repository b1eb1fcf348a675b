use super::{Comparison, Link, Listing, Operation, Program, Val, Var};
use crate::error;
use crate::lang::ast::{Ident, Operand, Statement};
use crate::lang::{Error, ErrorCode, Operator};
use std::convert::TryFrom;
use std::io::Write;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Dispatched statements allowed in one run before it is abandoned as
/// a likely infinite loop.
pub const EXECUTION_LIMIT: usize = 5000;

/// ## Execution loop
///
/// A `Runtime` owns everything one run touches: the program, the label
/// table, the variables and the program counter. It never writes output
/// itself; [`execute`](Runtime::execute) hands back an [`Event`] for the
/// caller to act on.

pub struct Runtime {
    program: Program,
    link: Link,
    vars: Var,
    state: State,
    tron: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Cycle budget spent with nothing to report.
    Running,
    /// Verbose echo of the line about to run.
    Trace(usize, String),
    /// Output of one `PRINT`, newline included.
    Print(String),
    Halted(Halt),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// Program counter moved past the last line.
    Normal,
    /// A statement failed. The error carries the line number.
    Error(Error),
    /// [`EXECUTION_LIMIT`] statements ran without finishing.
    Limit,
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub vars: Var,
    pub executed: usize,
    pub halt: Halt,
}

#[derive(Debug)]
struct State {
    pc: usize,
    executed: usize,
    traced: bool,
    halt: Option<Halt>,
}

enum Step {
    Next,
    Print(String),
    Jump(usize),
}

impl Runtime {
    pub fn new(listing: Listing) -> Runtime {
        let (program, link, vars) = listing.into_parts();
        Runtime {
            program,
            link,
            vars,
            state: State {
                pc: 1,
                executed: 0,
                traced: false,
                halt: None,
            },
            tron: false,
        }
    }

    /// Runs a listing to completion, writing printed and traced lines to `out`.
    pub fn run<W: Write>(listing: Listing, verbose: bool, out: &mut W) -> std::io::Result<Outcome> {
        let mut runtime = Runtime::new(listing);
        runtime.set_tron(verbose);
        loop {
            match runtime.execute(EXECUTION_LIMIT) {
                Event::Running => {}
                Event::Trace(line_number, s) => writeln!(out, "Executing line {}: {}", line_number, s)?,
                Event::Print(s) => out.write_all(s.as_bytes())?,
                Event::Halted(halt) => {
                    return Ok(Outcome {
                        vars: runtime.vars,
                        executed: runtime.state.executed,
                        halt,
                    })
                }
            }
        }
    }

    pub fn set_tron(&mut self, tron: bool) {
        self.tron = tron;
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn executed(&self) -> usize {
        self.state.executed
    }

    /// The line the program counter points at.
    pub fn line_number(&self) -> usize {
        self.state.pc
    }

    pub fn halted(&self) -> Option<&Halt> {
        self.state.halt.as_ref()
    }

    /// Advances through at most `cycles` lines and returns the first event.
    /// Once halted, every call returns the same halt.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(halt) = &self.state.halt {
            return Event::Halted(halt.clone());
        }
        let program = self.program.clone();
        for _ in 0..cycles {
            let pc = self.state.pc;
            let line = match program.line(pc) {
                Some(line) => line,
                None => return self.halt(Halt::Normal),
            };
            if self.state.executed >= EXECUTION_LIMIT {
                return self.halt(Halt::Limit);
            }
            if line.is_blank() {
                self.state.pc += 1;
                continue;
            }
            if self.tron && !self.state.traced {
                self.state.traced = true;
                return Event::Trace(pc, line.to_string());
            }
            self.state.traced = false;
            trace!(line = pc, "dispatch");
            match self.dispatch(line.statement()) {
                Ok(step) => {
                    self.state.executed += 1;
                    match step {
                        Step::Next => self.state.pc += 1,
                        Step::Jump(line_number) => self.state.pc = line_number,
                        Step::Print(s) => {
                            self.state.pc += 1;
                            return Event::Print(s);
                        }
                    }
                }
                Err(error) => return self.halt(Halt::Error(error.in_line_number(Some(pc)))),
            }
        }
        Event::Running
    }

    fn halt(&mut self, halt: Halt) -> Event {
        debug!(executed = self.state.executed, line = self.state.pc, ?halt, "halted");
        self.state.halt = Some(halt.clone());
        Event::Halted(halt)
    }

    fn dispatch(&mut self, statement: &Statement) -> Result<Step> {
        match statement {
            Statement::Assign(target, op, operands) => {
                self.assign(target, op.as_ref(), operands)?;
                Ok(Step::Next)
            }
            Statement::Print(operands) => self.print(operands),
            Statement::Goto(label) => Ok(Step::Jump(self.link.resolve(label.as_str())?)),
            Statement::If(op, lhs, rhs, label) => self.branch(op, lhs, rhs, label),
            Statement::Declare(..) | Statement::Unrecognized | Statement::Blank => Ok(Step::Next),
        }
    }

    /// Resolves an operand: a bound variable first, then a quoted string,
    /// then a non-negative integer. `None` when it is none of those.
    pub fn evaluate(&self, operand: &Operand) -> Option<Val> {
        let s = operand.as_str();
        if let Some(val) = self.vars.fetch(s) {
            return Some(val.clone());
        }
        if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
            return Some(Val::String(s[1..s.len() - 1].to_string()));
        }
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return s.parse::<i64>().ok().map(Val::Integer);
        }
        None
    }

    fn evaluate_defined(&self, operand: &Operand) -> Result<Val> {
        match self.evaluate(operand) {
            Some(val) => Ok(val),
            None => Err(error!(VariableNotDefined; format!("{} is not defined", operand))),
        }
    }

    fn assign(&mut self, target: &Ident, op: Option<&Operator>, operands: &[Operand]) -> Result<()> {
        let op = match op {
            None => {
                return match operands {
                    [] => Err(error!(TooFewOperands; "ASSIGN expects a value")),
                    [operand] => {
                        let val = self.evaluate_defined(operand)?;
                        self.vars.store(target.as_str(), val);
                        Ok(())
                    }
                    _ => Err(error!(
                        TooFewOperands;
                        "An operator and two operands are required for this operation"
                    )),
                };
            }
            Some(op) => op,
        };
        let (lhs, rhs) = match operands {
            [lhs, rhs] => (lhs, rhs),
            _ => {
                return Err(error!(
                    TooFewOperands;
                    "An operator and two operands are required for this operation"
                ))
            }
        };
        let val = match op {
            Operator::Replicate => match (self.evaluate(lhs), self.evaluate(rhs)) {
                (Some(l), Some(r)) => Operation::replicate(l, r)?,
                _ => return Err(error!(TooFewOperands; "Replication operation expects two operands")),
            },
            Operator::Add | Operator::Subtract => {
                let current = match self.vars.fetch(lhs.as_str()) {
                    Some(val) => val,
                    None => return Err(error!(VariableNotDefined; format!("{} is not defined", lhs))),
                };
                if *op == Operator::Add {
                    Operation::add(current, rhs.as_str())?
                } else {
                    Operation::subtract(current, rhs.as_str())?
                }
            }
            Operator::Greater | Operator::GreaterEqual => {
                let l = self.numeric(lhs)?;
                let r = self.numeric(rhs)?;
                Operation::greater(&l, &r, *op == Operator::GreaterEqual)?
            }
            Operator::Concat => match (self.evaluate(lhs), self.evaluate(rhs)) {
                (Some(l), Some(r)) => Operation::concat(l, r)?,
                _ => return Err(error!(TooFewOperands; "Concatenation operation expects two operands")),
            },
            Operator::Less | Operator::LessEqual | Operator::Unknown(_) => {
                return Err(error!(InvalidExpression; format!("{} is not a valid operator", op)))
            }
        };
        self.vars.store(target.as_str(), val);
        Ok(())
    }

    /// Evaluates an operand that must turn out numeric.
    fn numeric(&self, operand: &Operand) -> Result<Val> {
        match self.evaluate(operand) {
            Some(val) => {
                i64::try_from(&val)?;
                Ok(val)
            }
            None => Err(error!(InvalidValueType; format!("'{}' is not numeric", operand))),
        }
    }

    fn print(&self, operands: &[Operand]) -> Result<Step> {
        let mut vals = Vec::with_capacity(operands.len());
        for operand in operands {
            match self.evaluate(operand) {
                Some(val) => vals.push(val.to_string()),
                None => {
                    return Err(error!(
                        VariableNotDefined;
                        format!("{} is not a variable, numeric constant, or string constant", operand)
                    ))
                }
            }
        }
        let mut s = vals.join(" ");
        s.push('\n');
        Ok(Step::Print(s))
    }

    fn branch(&self, op: &Operator, lhs: &Operand, rhs: &Operand, label: &Ident) -> Result<Step> {
        let comparison = Comparison::try_from(op)?;
        let holds = self
            .compare_operands(comparison, lhs, rhs)
            .map_err(|e| e.wrap(ErrorCode::InvalidExpression, "Invalid comparison"))?;
        if !holds {
            return Ok(Step::Next);
        }
        match self.link.resolve(label.as_str()) {
            Ok(line_number) => Ok(Step::Jump(line_number)),
            Err(e) => Err(e.wrap(
                ErrorCode::InvalidExpression,
                &format!("Cannot branch to {}", label),
            )),
        }
    }

    fn compare_operands(&self, comparison: Comparison, lhs: &Operand, rhs: &Operand) -> Result<bool> {
        let l = i64::try_from(&self.evaluate_defined(lhs)?)?;
        let r = i64::try_from(&self.evaluate_defined(rhs)?)?;
        Ok(comparison.compare(l, r))
    }
}
