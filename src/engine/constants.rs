// Configuration constants for the evaluation engine

/// Upper bound on named-function expansion passes. A cyclic definition stops
/// expanding here and degrades to a parse error on the leftover name.
pub const MAX_FUNCTION_EXPANSIONS: usize = 8;
