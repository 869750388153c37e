//! Expression tree model split into submodules for clarity

mod ast;
mod display;
mod eval;
mod function;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use function::{ParamFn, UnaryFn};

pub(crate) use function::is_even_integer;
