use log::{debug, warn};
use thiserror::Error;

use crate::domain::constants::OPEN_BOUND_SHIFT;
use crate::domain::types::{Domain, Interval};
use crate::expression::{Expr, ParamFn, UnaryFn, is_even_integer};

/// Internal analysis failures. Never escape [`analyze`]: the caller always
/// gets a usable domain back.
#[derive(Error, Debug, Clone, PartialEq)]
enum AnalysisError {
    #[error("non-finite parameter {0} on '{1}'")]
    NonFiniteParameter(f64, &'static str),
}

/// How a function constrains the values fed to it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Restriction {
    Unrestricted,
    /// `lo <= arg <= hi`, with either bound optionally open.
    Band {
        lo: f64,
        hi: f64,
        lo_open: bool,
        hi_open: bool,
    },
    /// `arg != 0`, splitting the line at the origin.
    ExcludeZero,
    /// `|arg| >= 1` (closed) or `|arg| > 1` (open), splitting the line.
    OutsideUnit { open: bool },
}

fn restriction_of(function: UnaryFn) -> Restriction {
    match function {
        UnaryFn::Ln => Restriction::Band {
            lo: 0.0,
            hi: f64::INFINITY,
            lo_open: true,
            hi_open: false,
        },
        UnaryFn::Sqrt => Restriction::Band {
            lo: 0.0,
            hi: f64::INFINITY,
            lo_open: false,
            hi_open: false,
        },
        UnaryFn::Asin | UnaryFn::Acos => Restriction::Band {
            lo: -1.0,
            hi: 1.0,
            lo_open: false,
            hi_open: false,
        },
        UnaryFn::Acosh => Restriction::Band {
            lo: 1.0,
            hi: f64::INFINITY,
            lo_open: false,
            hi_open: false,
        },
        UnaryFn::Atanh => Restriction::Band {
            lo: -1.0,
            hi: 1.0,
            lo_open: true,
            hi_open: true,
        },
        UnaryFn::Asech => Restriction::Band {
            lo: 0.0,
            hi: 1.0,
            lo_open: true,
            hi_open: false,
        },
        UnaryFn::Acot | UnaryFn::Acsch => Restriction::ExcludeZero,
        UnaryFn::Asec | UnaryFn::Acsc => Restriction::OutsideUnit { open: false },
        UnaryFn::Acoth => Restriction::OutsideUnit { open: true },
        _ => Restriction::Unrestricted,
    }
}

fn param_restriction(function: ParamFn, param: f64) -> Result<Restriction, AnalysisError> {
    if !param.is_finite() {
        return Err(AnalysisError::NonFiniteParameter(param, function.name()));
    }
    let restriction = match function {
        ParamFn::Log => Restriction::Band {
            lo: 0.0,
            hi: f64::INFINITY,
            lo_open: true,
            hi_open: false,
        },
        ParamFn::Root => {
            if is_even_integer(param) {
                Restriction::Band {
                    lo: 0.0,
                    hi: f64::INFINITY,
                    lo_open: false,
                    hi_open: false,
                }
            } else {
                Restriction::Unrestricted
            }
        }
    };
    Ok(restriction)
}

/// Running merge of the restrictions collected so far. Simple bands tighten
/// the `[min, max]` pair; the first splitting restriction fixes a composed
/// result and later tightening is dropped for that branch.
struct Restrictions {
    min: f64,
    max: f64,
    split: Option<Domain>,
}

impl Restrictions {
    fn new() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            split: None,
        }
    }

    fn apply(&mut self, restriction: Restriction) {
        if self.split.is_some() {
            return;
        }
        match restriction {
            Restriction::Unrestricted => {}
            Restriction::Band {
                lo,
                hi,
                lo_open,
                hi_open,
            } => {
                let lo = if lo_open { lo + OPEN_BOUND_SHIFT } else { lo };
                let hi = if hi_open { hi - OPEN_BOUND_SHIFT } else { hi };
                self.min = self.min.max(lo);
                self.max = self.max.min(hi);
            }
            Restriction::ExcludeZero => {
                self.split = Some(Domain::Composed(vec![
                    Domain::Interval(Interval::new(f64::NEG_INFINITY, -OPEN_BOUND_SHIFT)),
                    Domain::Interval(Interval::new(OPEN_BOUND_SHIFT, f64::INFINITY)),
                ]));
            }
            Restriction::OutsideUnit { open } => {
                let edge = if open { 1.0 + OPEN_BOUND_SHIFT } else { 1.0 };
                self.split = Some(Domain::Composed(vec![
                    Domain::Interval(Interval::new(f64::NEG_INFINITY, -edge)),
                    Domain::Interval(Interval::new(edge, f64::INFINITY)),
                ]));
            }
        }
    }

    fn into_domain(self) -> Domain {
        match self.split {
            Some(domain) => domain,
            // min > max stays as the degenerate empty interval
            None => Domain::Interval(Interval::new(self.min, self.max)),
        }
    }
}

/// Compute the valid input domain of an expression tree.
///
/// Restrictions are keyed by function name and applied to the running bound
/// pair directly, regardless of the argument subtree's shape; this mirrors
/// the calculator's reference behavior and is an approximation, not inverse
/// solving. Analysis fails open: any internal error degrades to the
/// unrestricted domain so rendering is never blocked.
pub fn analyze(expr: &Expr) -> Domain {
    match try_analyze(expr) {
        Ok(domain) => {
            debug!("Analyzed domain of {} as {:?}", expr, domain);
            domain
        }
        Err(err) => {
            warn!(
                "Domain analysis failed ({}); falling back to the unrestricted domain",
                err
            );
            Domain::unrestricted()
        }
    }
}

fn try_analyze(expr: &Expr) -> Result<Domain, AnalysisError> {
    let mut acc = Restrictions::new();
    collect(expr, &mut acc)?;
    Ok(acc.into_domain())
}

fn collect(expr: &Expr, acc: &mut Restrictions) -> Result<(), AnalysisError> {
    match expr {
        Expr::Number(_) => Ok(()),
        Expr::Binary(_, left, right) => {
            collect(left, acc)?;
            collect(right, acc)
        }
        Expr::Unary(_, operand) => collect(operand, acc),
        Expr::Call(function, arg) => {
            collect(arg, acc)?;
            acc.apply(restriction_of(*function));
            Ok(())
        }
        Expr::CallWith(function, param, arg) => {
            collect(arg, acc)?;
            acc.apply(param_restriction(*function, *param)?);
            Ok(())
        }
    }
}
