use std::f64::consts::FRAC_PI_2;

#[inline]
pub(crate) fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

#[inline]
pub(crate) fn is_even_integer(value: f64) -> bool {
    if !is_integer(value) {
        return false;
    }

    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        let rounded = value.round();
        (rounded % 2.0).abs() < f64::EPSILON
    }
}

/// The closed set of single-argument functions the grammar recognizes.
///
/// Names are resolved to a variant once, at parse time, so evaluation never
/// compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Asin,
    Acos,
    Atan,
    Acot,
    Asec,
    Acsc,
    Sinh,
    Cosh,
    Tanh,
    Coth,
    Sech,
    Csch,
    Asinh,
    Acosh,
    Atanh,
    Acoth,
    Asech,
    Acsch,
    Ln,
    Abs,
    Sqrt,
}

impl UnaryFn {
    /// Look up a function by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_ascii_lowercase();
        let function = match lowered.as_str() {
            "sin" => UnaryFn::Sin,
            "cos" => UnaryFn::Cos,
            "tan" => UnaryFn::Tan,
            "cot" => UnaryFn::Cot,
            "sec" => UnaryFn::Sec,
            "csc" => UnaryFn::Csc,
            "asin" => UnaryFn::Asin,
            "acos" => UnaryFn::Acos,
            "atan" => UnaryFn::Atan,
            "acot" => UnaryFn::Acot,
            "asec" => UnaryFn::Asec,
            "acsc" => UnaryFn::Acsc,
            "sinh" => UnaryFn::Sinh,
            "cosh" => UnaryFn::Cosh,
            "tanh" => UnaryFn::Tanh,
            "coth" => UnaryFn::Coth,
            "sech" => UnaryFn::Sech,
            "csch" => UnaryFn::Csch,
            "asinh" => UnaryFn::Asinh,
            "acosh" => UnaryFn::Acosh,
            "atanh" => UnaryFn::Atanh,
            "acoth" => UnaryFn::Acoth,
            "asech" => UnaryFn::Asech,
            "acsch" => UnaryFn::Acsch,
            "ln" => UnaryFn::Ln,
            "abs" => UnaryFn::Abs,
            "sqrt" => UnaryFn::Sqrt,
            _ => return None,
        };
        Some(function)
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Cot => "cot",
            UnaryFn::Sec => "sec",
            UnaryFn::Csc => "csc",
            UnaryFn::Asin => "asin",
            UnaryFn::Acos => "acos",
            UnaryFn::Atan => "atan",
            UnaryFn::Acot => "acot",
            UnaryFn::Asec => "asec",
            UnaryFn::Acsc => "acsc",
            UnaryFn::Sinh => "sinh",
            UnaryFn::Cosh => "cosh",
            UnaryFn::Tanh => "tanh",
            UnaryFn::Coth => "coth",
            UnaryFn::Sech => "sech",
            UnaryFn::Csch => "csch",
            UnaryFn::Asinh => "asinh",
            UnaryFn::Acosh => "acosh",
            UnaryFn::Atanh => "atanh",
            UnaryFn::Acoth => "acoth",
            UnaryFn::Asech => "asech",
            UnaryFn::Acsch => "acsch",
            UnaryFn::Ln => "ln",
            UnaryFn::Abs => "abs",
            UnaryFn::Sqrt => "sqrt",
        }
    }

    /// Apply the function numerically. Out-of-domain arguments follow IEEE
    /// semantics and produce NaN or an infinity, never an error.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            UnaryFn::Sin => x.sin(),
            UnaryFn::Cos => x.cos(),
            UnaryFn::Tan => x.tan(),
            UnaryFn::Cot => x.cos() / x.sin(),
            UnaryFn::Sec => 1.0 / x.cos(),
            UnaryFn::Csc => 1.0 / x.sin(),
            UnaryFn::Asin => x.asin(),
            UnaryFn::Acos => x.acos(),
            UnaryFn::Atan => x.atan(),
            // acot with range (0, pi), the graphing convention
            UnaryFn::Acot => FRAC_PI_2 - x.atan(),
            UnaryFn::Asec => (1.0 / x).acos(),
            UnaryFn::Acsc => (1.0 / x).asin(),
            UnaryFn::Sinh => x.sinh(),
            UnaryFn::Cosh => x.cosh(),
            UnaryFn::Tanh => x.tanh(),
            UnaryFn::Coth => x.cosh() / x.sinh(),
            UnaryFn::Sech => 1.0 / x.cosh(),
            UnaryFn::Csch => 1.0 / x.sinh(),
            UnaryFn::Asinh => x.asinh(),
            UnaryFn::Acosh => x.acosh(),
            UnaryFn::Atanh => x.atanh(),
            UnaryFn::Acoth => (1.0 / x).atanh(),
            UnaryFn::Asech => (1.0 / x).acosh(),
            UnaryFn::Acsch => (1.0 / x).asinh(),
            UnaryFn::Ln => x.ln(),
            UnaryFn::Abs => x.abs(),
            UnaryFn::Sqrt => x.sqrt(),
        }
    }
}

/// Functions that take a numeric parameter in braces ahead of the argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamFn {
    /// `log{base}(x)`
    Log,
    /// `root{n}(x)`
    Root,
}

impl ParamFn {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "log" => Some(ParamFn::Log),
            "root" => Some(ParamFn::Root),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParamFn::Log => "log",
            ParamFn::Root => "root",
        }
    }

    /// Apply with the braced parameter. An odd integer root of a negative
    /// argument is real; even roots of negatives fall through to NaN.
    pub fn apply(&self, param: f64, x: f64) -> f64 {
        match self {
            ParamFn::Log => x.log(param),
            ParamFn::Root => {
                if x < 0.0 && is_integer(param) && !is_even_integer(param) {
                    -((-x).powf(1.0 / param))
                } else {
                    x.powf(1.0 / param)
                }
            }
        }
    }
}
