/// Options that control the simplifier.
///
/// To create a set of options, use the [`SimplifyOptionsBuilder`], or use the [`Default`] options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplifyOptions {
    /// The maximum depth of the expression tree the simplifier will descend into. A leaf has
    /// depth 1.
    ///
    /// The default value is `512`.
    pub max_depth: usize,

    /// The maximum number of rules the simplifier will apply before giving up.
    ///
    /// The default value is `100000`.
    pub max_steps: usize,

    /// Whether to apply the associative regrouping rules, which move variables and literals
    /// through chains of additions, subtractions and multiplications.
    ///
    /// These rules can grow an expression as easily as they shrink it, so they are disabled by
    /// default.
    pub regroup: bool,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_steps: 100_000,
            regroup: false,
        }
    }
}

/// A builder for [`SimplifyOptions`].
#[derive(Debug, Clone, Default)]
pub struct SimplifyOptionsBuilder(SimplifyOptions);

impl SimplifyOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum depth of the expression tree.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Sets the maximum number of rules to apply.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.0.max_steps = max_steps;
        self
    }

    /// Sets whether to apply the associative regrouping rules.
    pub fn regroup(mut self, regroup: bool) -> Self {
        self.0.regroup = regroup;
        self
    }

    /// Builds the options.
    pub fn build(self) -> SimplifyOptions {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let options = SimplifyOptionsBuilder::new()
            .max_steps(10)
            .regroup(true)
            .build();
        assert_eq!(options, SimplifyOptions {
            max_depth: 512,
            max_steps: 10,
            regroup: true,
        });
    }
}
