//! Evaluation engine: bindings, substitution, and per-curve caching

pub mod constants;
mod curve;
mod errors;
mod evaluator;
mod substitute;

pub use curve::Curve;
pub use errors::EvalError;
pub use evaluator::Evaluator;

#[cfg(test)]
mod tests;
