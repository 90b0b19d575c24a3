//! HTML rendering of inline attribute lists.
//!
//! Every inline attribute list attached to a block is merged into a single
//! attribute fragment that is spliced into the block's opening tag, right
//! before the closing `>`:
//!
//! ```
//! use ial_converters_html::render_ials;
//! use ial_parser::ParseContext;
//!
//! let mut context = ParseContext::new();
//! context.scan(br#"{#id .c1 .c2 k="v"}"#);
//! assert_eq!(render_ials(context.ials()), r#" anchor="id" class="c1 c2" k="v""#);
//! ```

use std::fmt::Write;

use ial_parser::Ial;

mod error;
mod ial;

pub use error::Error;

/// Options for rendering attribute fragments.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RenderOptions {
    /// Emit a warning when a later list's id replaces an earlier one.
    ///
    /// Only the last non-empty id attached to a block is rendered; the others
    /// are lost. The output is the same either way.
    pub warn_on_anchor_overwrite: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            warn_on_anchor_overwrite: true,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn without_anchor_overwrite_warning(mut self) -> Self {
        self.warn_on_anchor_overwrite = false;
        self
    }
}

/// A simple trait for helping in rendering attribute fragments.
trait Render {
    type Error;

    fn render<W: Write>(&self, w: &mut W, options: &RenderOptions) -> Result<(), Self::Error>;
}

/// Render the attribute fragment for the lists attached to one block.
///
/// The result is empty, or starts with a single space and holds, in this
/// order: `anchor="..."`, `class="..."` and the `key="value"` pairs.
#[must_use]
pub fn render_ials(ials: &[Ial]) -> String {
    render_ials_with(ials, &RenderOptions::default())
}

/// Like [`render_ials`], with explicit options.
#[must_use]
pub fn render_ials_with(ials: &[Ial], options: &RenderOptions) -> String {
    let mut fragment = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_ials(&mut fragment, ials, options);
    fragment
}

/// Write the attribute fragment for `ials` into `w`.
///
/// # Errors
///
/// Returns [`Error::Fmt`] if the writer fails.
pub fn write_ials<W: Write>(w: &mut W, ials: &[Ial], options: &RenderOptions) -> Result<(), Error> {
    ials.render(w, options)
}
