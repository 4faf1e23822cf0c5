//! Parsing options and configuration.

/// Options for parsing a profile export.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether to parse independent sections in parallel
    pub parallel: bool,

    /// Minimum number of retained lines for a document to count as non-empty
    pub min_content_lines: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel section parsing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel section parsing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the minimum retained-line threshold for `EmptyDocument`.
    pub fn with_min_content_lines(mut self, lines: usize) -> Self {
        self.min_content_lines = lines;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            min_content_lines: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ParseOptions::new().sequential().with_min_content_lines(5);
        assert!(!options.parallel);
        assert_eq!(options.min_content_lines, 5);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(options.parallel);
        assert_eq!(options.min_content_lines, 2);
    }
}
