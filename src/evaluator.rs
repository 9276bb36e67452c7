use crate::ast::{BinaryOp, Expr};

/// Computes the value of `expr`. Left operands are evaluated before right ones.
///
/// Arithmetic follows IEEE 754: dividing by zero gives an infinity or NaN
/// rather than an error, and `%` takes the sign of the dividend.
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Number { value, .. } => *value,
        Expr::Negate { operand, .. } => -1.0 * evaluate(operand),
        Expr::Binary {
            left,
            operator,
            right,
            ..
        } => {
            let left_val = evaluate(left);
            let right_val = evaluate(right);
            evaluate_binary_op(*operator, left_val, right_val)
        }
    }
}

fn evaluate_binary_op(operator: BinaryOp, left: f64, right: f64) -> f64 {
    match operator {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
        // Truncating remainder, not Euclidean.
        BinaryOp::Mod => left % right,
    }
}
