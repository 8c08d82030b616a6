use radix_parser::ast::{BinOp, Expr, Radix, UnaryOp};
use radix_parser::parse_expression;

#[test]
fn test_integer_arithmetic() {
    parse_expression("1 + 2 * 3", Radix::Decimal).expect("Failed to parse");
}

#[test]
fn test_grouping() {
    parse_expression("(1 + 2) * 3", Radix::Decimal).expect("Failed to parse grouping");
}

#[test]
fn test_binary_expression_with_shift() {
    // (1010 + 11) >> 1 should parse as Shr(Add(1010, 11), 1)
    let expr = parse_expression("(1010+11)>>1", Radix::Binary).unwrap();
    match expr {
        Expr::BinOp { op, lhs, rhs, .. } => {
            assert!(matches!(op, BinOp::Shr));
            match lhs.as_ref() {
                Expr::BinOp {
                    op: BinOp::Add,
                    lhs: inner_lhs,
                    rhs: inner_rhs,
                    ..
                } => {
                    match inner_lhs.as_ref() {
                        Expr::Number { digits, .. } => assert_eq!(digits, "1010"),
                        _ => panic!("expected number 1010"),
                    }
                    match inner_rhs.as_ref() {
                        Expr::Number { digits, .. } => assert_eq!(digits, "11"),
                        _ => panic!("expected number 11"),
                    }
                }
                _ => panic!("expected BinOp(Add) as lhs, got: {lhs:?}"),
            }
            match rhs.as_ref() {
                Expr::Number { digits, radix, .. } => {
                    assert_eq!(digits, "1");
                    assert_eq!(*radix, Radix::Binary);
                }
                _ => panic!("expected number 1 as rhs, got: {rhs:?}"),
            }
        }
        _ => panic!("expected BinOp at top level"),
    }
}

#[test]
fn test_caret_is_xor_not_power() {
    // 2^3^2 is left-associative XOR: Xor(Xor(2, 3), 2)
    let expr = parse_expression("2^3^2", Radix::Decimal).unwrap();
    match expr {
        Expr::BinOp { op, lhs, .. } => {
            assert!(matches!(op, BinOp::BitXor));
            assert!(matches!(lhs.as_ref(), Expr::BinOp { op: BinOp::BitXor, .. }));
        }
        _ => panic!("expected BinOp(Xor)"),
    }
}

#[test]
fn test_not_over_hex_literal() {
    let expr = parse_expression("~FF", Radix::Hex).unwrap();
    match expr {
        Expr::UnaryOp { op, operand, .. } => {
            assert!(matches!(op, UnaryOp::BitNot));
            assert!(matches!(operand.as_ref(), Expr::Number { .. }));
        }
        _ => panic!("expected UnaryOp(BitNot)"),
    }
}

#[test]
fn test_rejects_statement_separators() {
    assert!(parse_expression("1; drop", Radix::Decimal).is_err());
    assert!(parse_expression("1,2", Radix::Decimal).is_err());
}
