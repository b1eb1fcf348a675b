use super::*;
use crate::lang::ErrorCode;
use crate::mach::{Val, EXECUTION_LIMIT};

#[test]
fn test_blank_lines_are_free() {
    let mut r = runtime("PRINT 1\n\n   \nPRINT 2\n");
    assert_eq!(run(&mut r), "1\n2\n");
    assert_eq!(r.executed(), 2);
}

#[test]
fn test_unrecognized_and_declarations_count() {
    let mut r = runtime("VAR INT x 1\n# nothing here\nend:\n");
    assert_eq!(run(&mut r), "");
    assert_eq!(r.executed(), 3);
}

#[test]
fn test_goto_skips_lines() {
    let mut r = runtime("GOTO skip\nPRINT \"no\"\nskip: PRINT \"yes\"\n");
    assert_eq!(run(&mut r), "yes\n");
    assert_eq!(r.executed(), 2);
}

#[test]
fn test_infinite_loop_hits_limit() {
    let mut r = runtime("loop: GOTO loop\n");
    assert_eq!(run(&mut r), "LIMIT\n");
    assert_eq!(r.executed(), EXECUTION_LIMIT);
    assert_eq!(r.halted(), Some(&Halt::Limit));
}

#[test]
fn test_limit_not_reached_by_finishing_program() {
    let mut r = runtime("VAR INT n 0\ntop: ASSIGN n + n 1\nIF < n 2499 top\n");
    assert_eq!(run(&mut r), "");
    assert_eq!(r.executed(), 1 + 2 * 2499);
    assert_eq!(r.vars().fetch("n"), Some(&Val::Integer(2499)));
}

#[test]
fn test_error_stops_run() {
    let mut r = runtime("PRINT 1\nPRINT x\nPRINT 3\n");
    assert_eq!(
        run(&mut r),
        "1\nVARIABLE NOT DEFINED IN 2; x is not a variable, numeric constant, or string constant\n"
    );
    assert_eq!(r.line_number(), 2);
    assert_eq!(r.executed(), 1);
}

#[test]
fn test_error_in_print_writes_nothing() {
    let mut r = runtime("PRINT 1 x 3\n");
    match r.execute(10) {
        Event::Halted(Halt::Error(e)) => {
            assert!(e.is(ErrorCode::VariableNotDefined));
            assert_eq!(e.line_number(), Some(1));
        }
        event => panic!("{:?}", event),
    }
}

#[test]
fn test_operand_precedence() {
    let mut r = runtime("VAR STRING n5 five\nVAR STRING x \"X\"\nPRINT x \"x\" 5 n5\n");
    assert_eq!(run(&mut r), "X x 5 five\n");
}
