//! Scanner for inline attribute lists.
//!
//! An inline attribute list (IAL) is a `{...}` annotation carrying an optional
//! `#id`, any number of `.class` tokens and `key=value` pairs:
//!
//! ```text
//! {#intro .lead .wide data-level="2"}
//! ```
//!
//! The block parser decides where a list may start and calls
//! [`ParseContext::scan`] with the bytes from the opening brace onwards. A
//! non-zero result is the number of bytes consumed and a new [`Ial`] is
//! appended to the context. [`parse_ial`] is the same scan with a typed error
//! explaining why a buffer was rejected.
//!
//! `{frontmatter}`, `{mainmatter}` and `{backmatter}` are document structure
//! markers ([`StructureMarker`]) and are never attribute lists.

mod context;
mod error;
mod key_value;
mod marker;
mod model;
mod options;
mod scanner;

#[cfg(test)]
mod proptests;

pub use context::ParseContext;
pub use error::Error;
pub use marker::StructureMarker;
pub use model::{AttributeName, AttributeValue, ElementAttributes, Ial, Role};
pub use options::{Options, OptionsBuilder};
pub use scanner::parse_ial;
