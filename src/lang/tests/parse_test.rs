use super::*;

#[test]
fn test_assign_copy() {
    assert_eq!(
        classify_str("ASSIGN x 5"),
        Statement::Assign(Ident::new("X"), None, operands(&["5"]))
    );
}

#[test]
fn test_assign_with_operator() {
    assert_eq!(
        classify_str(r#"ASSIGN x * "ab" 3"#),
        Statement::Assign(
            Ident::new("X"),
            Some(Operator::Replicate),
            operands(&[r#""ab""#, "3"])
        )
    );
    assert_eq!(
        classify_str("assign total >= a b"),
        Statement::Assign(
            Ident::new("TOTAL"),
            Some(Operator::GreaterEqual),
            operands(&["a", "b"])
        )
    );
}

#[test]
fn test_assign_keeps_unknown_operator() {
    assert_eq!(
        classify_str("ASSIGN x % a b"),
        Statement::Assign(
            Ident::new("X"),
            Some(Operator::Unknown("%".to_string())),
            operands(&["a", "b"])
        )
    );
}

#[test]
fn test_assign_shapes_left_to_runtime() {
    assert_eq!(
        classify_str("ASSIGN x"),
        Statement::Assign(Ident::new("X"), None, vec![])
    );
    assert_eq!(
        classify_str("ASSIGN x & a"),
        Statement::Assign(Ident::new("X"), Some(Operator::Concat), operands(&["a"]))
    );
}

#[test]
fn test_assign_too_many_operands_is_unrecognized() {
    assert_eq!(classify_str("ASSIGN x + a b c"), Statement::Unrecognized);
    assert_eq!(classify_str("ASSIGN + a b"), Statement::Unrecognized);
}

#[test]
fn test_print() {
    assert_eq!(
        classify_str(r#"PRINT "Total:" t ?"#),
        Statement::Print(operands(&[r#""Total:""#, "t", "?"]))
    );
    assert_eq!(classify_str("PRINT"), Statement::Print(vec![]));
}

#[test]
fn test_goto() {
    assert_eq!(
        classify_str("here: GOTO there"),
        Statement::Goto(Ident::new("THERE"))
    );
    assert_eq!(classify_str("GOTO"), Statement::Unrecognized);
    assert_eq!(classify_str("GOTO a b"), Statement::Unrecognized);
}

#[test]
fn test_if() {
    assert_eq!(
        classify_str("if > count 10 done"),
        Statement::If(
            Operator::Greater,
            Operand::new("count"),
            Operand::new("10"),
            Ident::new("DONE")
        )
    );
    assert_eq!(
        classify_str("IF == a b done"),
        Statement::If(
            Operator::Unknown("==".to_string()),
            Operand::new("a"),
            Operand::new("b"),
            Ident::new("DONE")
        )
    );
    assert_eq!(classify_str("IF > a b"), Statement::Unrecognized);
}

#[test]
fn test_declare() {
    assert_eq!(
        classify_str("VAR int count 0"),
        Statement::Declare(Ident::new("INT"), Ident::new("COUNT"), "0".into())
    );
    assert_eq!(
        classify_str(r#"VAR STRING greeting "Hello there""#),
        Statement::Declare(
            Ident::new("STRING"),
            Ident::new("GREETING"),
            "Hello there".into()
        )
    );
    assert_eq!(classify_str("VAR INT count"), Statement::Unrecognized);
}

#[test]
fn test_unrecognized() {
    assert_eq!(classify_str("# a comment"), Statement::Unrecognized);
    assert_eq!(classify_str("hello world"), Statement::Unrecognized);
    assert_eq!(classify_str(""), Statement::Blank);
}
