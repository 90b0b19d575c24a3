use tracing::instrument;

use crate::{Error, Ial, Options, parse_ial};

/// The inline attribute lists collected while parsing one document.
///
/// Records are kept in the order they were found. A block parser owns one
/// context per document, offers candidate buffers to [`ParseContext::scan`]
/// and hands the collected records off to its attachment logic with
/// [`ParseContext::drain`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseContext {
    ials: Vec<Ial>,
}

impl ParseContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to scan an inline attribute list at the start of `data`.
    ///
    /// Returns the number of bytes consumed, or `0` if `data` does not start
    /// with an inline attribute list. A record is appended only when the
    /// return value is non-zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ial_parser::ParseContext;
    ///
    /// let mut context = ParseContext::new();
    /// assert_eq!(context.scan(b"{.note} text"), 7);
    /// assert_eq!(context.scan(b"{mainmatter}"), 0);
    /// assert_eq!(context.len(), 1);
    /// ```
    #[instrument(level = "trace", skip(self, data), fields(len = data.len()))]
    pub fn scan(&mut self, data: &[u8]) -> usize {
        match self.scan_with(data, &Options::default()) {
            Ok(consumed) => consumed,
            Err(error) => {
                tracing::trace!(%error, "not an inline attribute list");
                0
            }
        }
    }

    /// Like [`ParseContext::scan`], but reports why `data` is not an inline
    /// attribute list.
    ///
    /// # Errors
    ///
    /// See [`parse_ial`]. The context is left untouched on error.
    pub fn scan_with(&mut self, data: &[u8], options: &Options) -> Result<usize, Error> {
        let (ial, consumed) = parse_ial(data, options)?;
        self.ials.push(ial);
        Ok(consumed)
    }

    #[must_use]
    pub fn ials(&self) -> &[Ial] {
        &self.ials
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ials.is_empty()
    }

    /// Take every collected record, leaving the context empty.
    pub fn drain(&mut self) -> Vec<Ial> {
        std::mem::take(&mut self.ials)
    }

    #[must_use]
    pub fn into_ials(self) -> Vec<Ial> {
        self.ials
    }
}
