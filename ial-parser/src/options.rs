/// Options controlling how inline attribute lists are scanned.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Options {
    /// Strict mode - fail on unrecognized tokens instead of dropping them.
    ///
    /// A token that is not `#id`, `.class` or `key=value` is normally ignored.
    /// With strict mode enabled, [`crate::parse_ial`] reports it as
    /// [`crate::Error::UnrecognizedToken`]. Empty tokens (e.g. from two
    /// adjacent spaces) are always ignored.
    pub strict: bool,
}

impl Options {
    /// Create a new `OptionsBuilder` for fluent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use ial_parser::Options;
    ///
    /// let options = Options::builder().with_strict().build();
    /// assert!(options.strict);
    /// ```
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Create a new `Options` with default settings.
    ///
    /// Equivalent to `Options::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builder for `Options`.
///
/// Create an `OptionsBuilder` using `Options::builder()`.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct OptionsBuilder {
    strict: bool,
}

impl OptionsBuilder {
    /// Enable strict mode.
    ///
    /// # Example
    ///
    /// ```
    /// use ial_parser::Options;
    ///
    /// let options = Options::builder()
    ///     .with_strict()
    ///     .build();
    /// ```
    #[must_use]
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build the `Options` from this builder.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            strict: self.strict,
        }
    }
}
