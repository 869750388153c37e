use crate::expression::ast::{BinaryOp, Expr, UnaryOp};

impl Expr {
    /// Evaluate the tree to a number.
    ///
    /// Evaluation is total: division by zero and out-of-domain function
    /// arguments surface as infinities or NaN rather than errors, so a
    /// renderer can probe any x and treat a non-finite result as a gap.
    pub fn value(&self) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Binary(op, l, r) => {
                let left = l.value();
                let right = r.value();
                match op {
                    BinaryOp::Add => left + right,
                    BinaryOp::Sub => left - right,
                    BinaryOp::Mul => left * right,
                    BinaryOp::Div => left / right,
                    BinaryOp::Pow => left.powf(right),
                }
            }
            Expr::Unary(op, e) => match op {
                UnaryOp::Plus => e.value(),
                UnaryOp::Minus => -e.value(),
            },
            Expr::Call(function, arg) => function.apply(arg.value()),
            Expr::CallWith(function, param, arg) => function.apply(*param, arg.value()),
        }
    }
}
