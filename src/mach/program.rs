use crate::lang::Line;
use std::rc::Rc;

/// The ordered source lines of one BEEP program. Numbering starts at 1
/// and never changes once loaded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Program {
    lines: Rc<Vec<Line>>,
}

impl Program {
    pub fn new(lines: Vec<Line>) -> Program {
        debug_assert!(lines.iter().enumerate().all(|(i, l)| l.number() == i + 1));
        Program {
            lines: Rc::new(lines),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, line_number: usize) -> Option<&Line> {
        match line_number {
            0 => None,
            n => self.lines.get(n - 1),
        }
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}
