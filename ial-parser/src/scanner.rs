//! Single-pass scanner for inline attribute lists.
//!
//! The scanner walks the buffer once, left to right, tracking three pieces of
//! state: whether the previous byte was an unconsumed backslash, whether we
//! are inside double quotes, and the index of the last token boundary. Tokens
//! are the runs between boundaries (the opening brace, unquoted spaces and the
//! closing brace).

use tracing::instrument;

use crate::{Error, Ial, Options, StructureMarker, key_value::parse_key_value};

const OPEN: u8 = b'{';
const CLOSE: u8 = b'}';

#[derive(Debug)]
struct Scanner<'a> {
    data: &'a [u8],
    options: &'a Options,
    ial: Ial,
    escaped: bool,
    in_quote: bool,
    boundary: usize,
    unrecognized: Option<String>,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a [u8], options: &'a Options) -> Self {
        Self {
            data,
            options,
            ial: Ial::default(),
            escaped: false,
            in_quote: false,
            boundary: 0,
            unrecognized: None,
        }
    }

    fn run(mut self) -> Result<(Ial, usize), Error> {
        let data = self.data;
        for (i, &byte) in data.iter().enumerate().skip(1) {
            match byte {
                b' ' => {
                    if self.in_quote {
                        continue;
                    }
                    self.take_token(i);
                }
                b'"' => {
                    if self.escaped {
                        self.escaped = false;
                    } else {
                        self.in_quote = !self.in_quote;
                    }
                }
                b'\\' => self.escaped = !self.escaped,
                CLOSE => {
                    if self.escaped {
                        self.escaped = false;
                        continue;
                    }
                    // Checked only here so the scan never backtracks.
                    let content = data.get(1..i).unwrap_or_default();
                    if let Some(marker) = StructureMarker::from_bytes(content) {
                        return Err(Error::StructureMarker(marker));
                    }
                    self.take_token(i);
                    if let Some(token) = self.unrecognized {
                        return Err(Error::UnrecognizedToken(token));
                    }
                    return Ok((self.ial, i + 1));
                }
                _ => self.escaped = false,
            }
        }
        Err(Error::Unterminated(data.len()))
    }

    /// Classify the token ending at `end` and move the boundary there.
    fn take_token(&mut self, end: usize) {
        let token = self.data.get(self.boundary + 1..end).unwrap_or_default();
        self.classify(token);
        self.boundary = end;
    }

    /// In strict mode the first unrecognized token is remembered and only
    /// reported once the closing brace commits the record.
    fn classify(&mut self, token: &[u8]) {
        match token.split_first() {
            Some((b'.', class)) => {
                self.ial
                    .classes
                    .push(String::from_utf8_lossy(class).into_owned());
            }
            Some((b'#', id)) => {
                self.ial.id = String::from_utf8_lossy(id).into_owned();
            }
            Some(_) => match parse_key_value(token) {
                Some((key, value)) if !key.is_empty() => {
                    self.ial.attributes.insert(key, value);
                }
                _ if self.options.strict => {
                    if self.unrecognized.is_none() {
                        self.unrecognized = Some(String::from_utf8_lossy(token).into_owned());
                    }
                }
                _ => {
                    tracing::trace!(token = %String::from_utf8_lossy(token), "dropping unrecognized token");
                }
            },
            None => {}
        }
    }
}

/// Scan one inline attribute list at the start of `data`.
///
/// On success returns the parsed record and the number of bytes consumed, i.e.
/// the index of the closing `}` plus one. The record is only ever returned
/// whole; nothing is produced on failure.
///
/// # Errors
///
/// - [`Error::MissingOpeningBrace`] when `data` does not start with `{`.
/// - [`Error::Unterminated`] when no unescaped `}` follows.
/// - [`Error::StructureMarker`] when the content is exactly `frontmatter`,
///   `mainmatter` or `backmatter`.
/// - [`Error::UnrecognizedToken`] in strict mode, for a token that is not
///   `#id`, `.class` or `key=value`.
///
/// # Example
///
/// ```
/// use ial_parser::{Options, parse_ial};
///
/// let (ial, consumed) = parse_ial(b"{#intro .lead} rest", &Options::default())?;
/// assert_eq!(consumed, 14);
/// assert_eq!(ial.id, "intro");
/// assert_eq!(ial.classes, vec!["lead".to_string()]);
/// # Ok::<(), ial_parser::Error>(())
/// ```
#[instrument(level = "trace", skip(data), fields(len = data.len()))]
pub fn parse_ial(data: &[u8], options: &Options) -> Result<(Ial, usize), Error> {
    if data.first() != Some(&OPEN) {
        return Err(Error::MissingOpeningBrace);
    }
    Scanner::new(data, options).run()
}
