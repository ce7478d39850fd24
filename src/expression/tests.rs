use crate::expression::{Expression, ExpressionError, Operator, Priority};

fn num(n: i64) -> Expression {
    Expression::Number(n)
}

fn bin(left: Expression, operator: Operator, right: Expression) -> Expression {
    Expression::binary(left, operator, right).unwrap_or(Expression::Number(0))
}

#[test]
fn test_number_properties() {
    let expr = num(25);
    assert_eq!(expr.value(), 25);
    assert_eq!(expr.count(), 1);
    assert_eq!(expr.numbers(), vec![25]);
    assert_eq!(expr.parentheses(), 0);
    assert_eq!(expr.priority(), Priority::Atomic);
    assert_eq!(format!("{}", expr), "25");
}

#[test]
fn test_binary_properties() {
    let expr = bin(num(10), Operator::Add, num(5));
    assert_eq!(expr.value(), 15);
    assert_eq!(expr.count(), 2);
    assert_eq!(expr.numbers(), vec![10, 5]);
    assert_eq!(expr.parentheses(), 0);
    assert_eq!(expr.priority(), Priority::Low);
    assert_eq!(format!("{}", expr), "10 + 5");
}

#[test]
fn test_numbers_keep_duplicates_in_leaf_order() {
    let left = bin(num(4), Operator::Multiply, num(3));
    let right = bin(num(4), Operator::Subtract, num(3));
    let expr = bin(left, Operator::Add, right);
    assert_eq!(expr.numbers(), vec![4, 3, 4, 3]);
    assert_eq!(expr.count(), 4);
    assert_eq!(expr.leaves(), 4);
    assert_eq!(expr.value(), 13);
}

#[test]
fn test_left_operand_parenthesised_when_lower_priority() {
    let sum = bin(num(2), Operator::Add, num(3));
    let expr = bin(sum, Operator::Multiply, num(4));
    assert_eq!(format!("{}", expr), "(2 + 3) * 4");
    assert_eq!(expr.parentheses(), 1);
    assert_eq!(expr.value(), 20);
}

#[test]
fn test_left_operand_not_parenthesised_at_equal_priority() {
    let diff = bin(num(9), Operator::Subtract, num(3));
    let expr = bin(diff, Operator::Subtract, num(2));
    assert_eq!(format!("{}", expr), "9 - 3 - 2");
    assert_eq!(expr.parentheses(), 0);
}

#[test]
fn test_right_operand_parenthesised_for_non_commutative_operator() {
    let diff = bin(num(5), Operator::Subtract, num(2));
    let expr = bin(num(10), Operator::Subtract, diff);
    assert_eq!(format!("{}", expr), "10 - (5 - 2)");
    assert_eq!(expr.parentheses(), 1);
    assert_eq!(expr.value(), 7);

    let quotient = bin(num(8), Operator::Divide, num(2));
    let expr = bin(num(100), Operator::Divide, quotient);
    assert_eq!(format!("{}", expr), "100 / (8 / 2)");
    assert_eq!(expr.value(), 25);
}

#[test]
fn test_right_operand_not_parenthesised_for_commutative_operator() {
    let sum = bin(num(5), Operator::Add, num(2));
    let expr = bin(num(10), Operator::Add, sum);
    assert_eq!(format!("{}", expr), "10 + 5 + 2");
    assert_eq!(expr.parentheses(), 0);

    let product = bin(num(5), Operator::Multiply, num(2));
    let expr = bin(num(10), Operator::Multiply, product);
    assert_eq!(format!("{}", expr), "10 * 5 * 2");
    assert_eq!(expr.parentheses(), 0);
}

#[test]
fn test_parentheses_accumulate_from_both_sides() {
    let left = bin(num(7), Operator::Add, num(3));
    let right = bin(num(6), Operator::Subtract, num(4));
    let expr = bin(left, Operator::Multiply, right);
    assert_eq!(format!("{}", expr), "(7 + 3) * (6 - 4)");
    assert_eq!(expr.parentheses(), 2);

    let outer = bin(num(100), Operator::Divide, expr);
    assert_eq!(format!("{}", outer), "100 / ((7 + 3) * (6 - 4))");
    assert_eq!(outer.parentheses(), 3);
    assert_eq!(outer.value(), 5);
}

#[test]
fn test_to_string_with_value() {
    let expr = bin(bin(num(50), Operator::Add, num(4)), Operator::Multiply, num(7));
    assert_eq!(expr.to_string_with_value(), "(50 + 4) * 7 = 378");
}

#[test]
fn test_binary_rejects_inapplicable_operands() {
    assert!(Expression::binary(num(7), Operator::Divide, num(2)).is_none());
    assert!(Expression::binary(num(7), Operator::Divide, num(0)).is_none());
    assert!(Expression::binary(num(i64::MAX), Operator::Multiply, num(2)).is_none());
}

#[test]
fn test_evaluate_matches_cached_value() {
    let left = bin(num(75), Operator::Subtract, num(5));
    let right = bin(num(100), Operator::Divide, num(25));
    let expr = bin(left, Operator::Multiply, right);
    let result = expr.evaluate();
    assert!(result.is_ok());
    assert_eq!(result, Ok(expr.value()));
    assert_eq!(expr.value(), 280);
}

#[test]
fn test_evaluate_number() {
    assert_eq!(num(3).evaluate(), Ok(3));
}

#[test]
fn test_expression_error_messages() {
    assert_eq!(ExpressionError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(
        ExpressionError::InexactDivision {
            dividend: 7,
            divisor: 2
        }
        .to_string(),
        "Inexact division: 7 is not divisible by 2"
    );
}

#[test]
fn test_operator_metadata() {
    assert_eq!(Operator::Add.symbol(), "+");
    assert_eq!(Operator::Subtract.symbol(), "-");
    assert_eq!(Operator::Multiply.symbol(), "*");
    assert_eq!(Operator::Divide.symbol(), "/");
    assert!(Operator::Add.is_commutative());
    assert!(Operator::Multiply.is_commutative());
    assert!(!Operator::Subtract.is_commutative());
    assert!(!Operator::Divide.is_commutative());
    assert_eq!(Operator::Subtract.priority(), Priority::Low);
    assert_eq!(Operator::Divide.priority(), Priority::High);
    assert!(Priority::Low < Priority::High);
    assert!(Priority::High < Priority::Atomic);
}

#[test]
fn test_operator_apply() {
    assert_eq!(Operator::Add.apply(2, 3), Some(5));
    assert_eq!(Operator::Subtract.apply(2, 3), Some(-1));
    assert_eq!(Operator::Multiply.apply(6, 7), Some(42));
    assert_eq!(Operator::Divide.apply(42, 7), Some(6));
    assert_eq!(Operator::Divide.apply(43, 7), None);
    assert_eq!(Operator::Divide.apply(43, 0), None);
}
