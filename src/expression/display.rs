use std::fmt;

use crate::expression::ast::{BinaryOp, Expr, UnaryOp};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expr) -> u8 {
            match expr {
                Expr::Binary(BinaryOp::Add | BinaryOp::Sub, _, _) => 1,
                Expr::Binary(BinaryOp::Mul | BinaryOp::Div, _, _) => 2,
                Expr::Unary(_, _) => 3,
                Expr::Binary(BinaryOp::Pow, _, _) => 4,
                Expr::Number(_) | Expr::Call(_, _) | Expr::CallWith(_, _, _) => 5,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expr,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expr(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expr(f, expr)
            }
        }

        fn fmt_expr(f: &mut fmt::Formatter, expr: &Expr) -> fmt::Result {
            match expr {
                Expr::Number(n) => write!(f, "{}", n),
                Expr::Binary(op, l, r) => {
                    let own = precedence(expr);
                    // right operand needs parens at equal precedence for the
                    // left-associative operators; `^` is right-associative
                    let right_assoc = matches!(op, BinaryOp::Pow);
                    let need_l = if right_assoc {
                        precedence(l) <= own
                    } else {
                        precedence(l) < own
                    };
                    write_with_parens(f, l, need_l)?;
                    write!(f, " {} ", op.symbol())?;
                    let need_r = if right_assoc {
                        precedence(r) < own
                    } else {
                        precedence(r) <= own
                    };
                    write_with_parens(f, r, need_r)
                }
                Expr::Unary(op, e) => {
                    if matches!(op, UnaryOp::Minus) {
                        write!(f, "-")?;
                    }
                    write_with_parens(f, e, precedence(e) <= 3)
                }
                Expr::Call(function, arg) => {
                    write!(f, "{}(", function.name())?;
                    fmt_expr(f, arg)?;
                    write!(f, ")")
                }
                Expr::CallWith(function, param, arg) => {
                    write!(f, "{}{{{}}}(", function.name(), param)?;
                    fmt_expr(f, arg)?;
                    write!(f, ")")
                }
            }
        }

        fmt_expr(f, self)
    }
}
