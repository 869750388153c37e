use std::collections::HashMap;

use log::{debug, warn};

use crate::domain::{Domain, analyze};
use crate::engine::constants::MAX_FUNCTION_EXPANSIONS;
use crate::engine::errors::EvalError;
use crate::engine::substitute::replace_word;
use crate::parser::parse;

/// Binds the collaborator state the surrounding application supplies — named
/// parameters and named functions — and drives parsing and evaluation.
///
/// Binding order follows the calculator's convention: named functions expand
/// to their parenthesized bodies first, then parameters substitute as bare
/// literals, then (for [`Evaluator::evaluate`] only) the free variable `x`
/// substitutes wrapped in parentheses, so `x^2` at `x = -2` reads `(-2)^2`
/// and yields 4.
#[derive(Debug, Default)]
pub struct Evaluator {
    parameters: HashMap<String, f64>,
    functions: HashMap<String, String>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a named parameter, e.g. `a = 1.5`. Matching against expression
    /// text is whole-word and case-insensitive.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: f64) {
        self.parameters.insert(name.into(), value);
    }

    pub fn remove_parameter(&mut self, name: &str) {
        self.parameters.remove(name);
    }

    /// Bind a named function to its right-hand-side expression text, e.g.
    /// `f` to `x^2`. References to `name` expand to `(body)`.
    pub fn set_function(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.functions.insert(name.into(), body.into());
    }

    pub fn remove_function(&mut self, name: &str) {
        self.functions.remove(name);
    }

    /// Evaluate an expression at a value of the free variable `x`.
    ///
    /// # Errors
    ///
    /// Returns an error when the substituted text is not parseable, e.g. an
    /// unbound identifier remains. Division by zero and out-of-domain
    /// arguments are not errors; they evaluate to infinities or NaN.
    pub fn evaluate(&self, text: &str, x: f64) -> Result<f64, EvalError> {
        let value = self.run(text, Some(x))?;
        debug!("Evaluated '{}' at x = {} to {}", text, x, value);
        Ok(value)
    }

    /// Evaluate an expression with no free variable, e.g. a point coordinate
    /// that may still reference parameters or named functions.
    ///
    /// # Errors
    ///
    /// Returns an error when the substituted text is not parseable; in
    /// particular a bare `x` is an unbound identifier here.
    pub fn evaluate_constant(&self, text: &str) -> Result<f64, EvalError> {
        let value = self.run(text, None)?;
        debug!("Evaluated constant '{}' to {}", text, value);
        Ok(value)
    }

    /// The valid input domain of an expression over `x`.
    ///
    /// Fails open: if the text does not parse even after substitution, the
    /// unrestricted domain comes back so rendering is never blocked here.
    pub fn domain_of(&self, text: &str) -> Domain {
        // the restriction table ignores argument values, so any placeholder
        // for x yields the same domain
        let substituted = self.substituted(text, Some(0.0));
        match parse(&substituted) {
            Ok(expr) => analyze(&expr),
            Err(err) => {
                warn!(
                    "Domain analysis skipped for unparseable '{}' ({}); using unrestricted",
                    text, err
                );
                Domain::unrestricted()
            }
        }
    }

    fn run(&self, text: &str, x: Option<f64>) -> Result<f64, EvalError> {
        let substituted = self.substituted(text, x);
        let expr = parse(&substituted).map_err(|source| EvalError::Unparseable {
            text: substituted.clone(),
            source,
        })?;
        Ok(expr.value())
    }

    fn substituted(&self, text: &str, x: Option<f64>) -> String {
        let mut working = text.to_string();

        for _ in 0..MAX_FUNCTION_EXPANSIONS {
            let mut changed = false;
            for (name, body) in &self.functions {
                let expanded = replace_word(&working, name, &format!("({})", body));
                if expanded != working {
                    working = expanded;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        for (name, value) in &self.parameters {
            working = replace_word(&working, name, &value.to_string());
        }

        if let Some(x) = x {
            working = replace_word(&working, "x", &format!("({})", x));
        }

        debug!("Substituted '{}' into '{}'", text, working);
        working
    }
}
