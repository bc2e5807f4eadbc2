use std::fmt;

/// An error that can occur while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplifyError {
    /// The expression tree is deeper than [`SimplifyOptions::max_depth`] allows.
    ///
    /// [`SimplifyOptions::max_depth`]: super::SimplifyOptions::max_depth
    RecursionLimitExceeded {
        /// The maximum depth.
        limit: usize,
    },

    /// The simplifier applied more than [`SimplifyOptions::max_steps`] rules without reaching a
    /// fixed point.
    ///
    /// [`SimplifyOptions::max_steps`]: super::SimplifyOptions::max_steps
    StepLimitExceeded {
        /// The maximum number of rules.
        limit: usize,
    },
}

impl fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RecursionLimitExceeded { limit } => {
                write!(f, "expression is nested deeper than {} levels", limit)
            },
            Self::StepLimitExceeded { limit } => {
                write!(f, "simplification did not finish within {} steps", limit)
            },
        }
    }
}

impl std::error::Error for SimplifyError {}
