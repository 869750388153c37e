use crate::expression::function::{ParamFn, UnaryFn};

/// Binary operators recognized by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

/// Unary sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// A parsed expression tree. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Unary(UnaryOp, Box<Expr>),
    /// A single-argument function call, e.g. `sin(...)`.
    Call(UnaryFn, Box<Expr>),
    /// A parameterized call carrying the numeric parameter from the braces,
    /// e.g. `log{2}(...)` or `root{3}(...)`.
    CallWith(ParamFn, f64, Box<Expr>),
}
