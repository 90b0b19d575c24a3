use crate::StructureMarker;

/// Reasons a candidate buffer is not an inline attribute list.
///
/// The sentinel API ([`crate::ParseContext::scan`]) collapses all of these into
/// "zero bytes consumed"; [`crate::parse_ial`] keeps them apart.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("inline attribute list must start with '{{'")]
    MissingOpeningBrace,

    #[error("unterminated inline attribute list: no closing '}}' in {0} bytes")]
    Unterminated(usize),

    #[error("'{{{0}}}' is a document structure marker, not an inline attribute list")]
    StructureMarker(StructureMarker),

    #[error("unrecognized token in inline attribute list: '{0}'")]
    UnrecognizedToken(String),
}

impl Error {
    /// The structure marker found instead of an attribute list, if any.
    #[must_use]
    pub fn structure_marker(&self) -> Option<StructureMarker> {
        match self {
            Self::StructureMarker(marker) => Some(*marker),
            Self::MissingOpeningBrace | Self::Unterminated(_) | Self::UnrecognizedToken(_) => {
                None
            }
        }
    }

    /// Get advice for this error if available.
    /// Returns helpful information for resolving the error.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::Unterminated(..) => Some(
                "Close the attribute list with '}'. A '}' preceded by a backslash is literal and does not close it",
            ),
            Self::UnrecognizedToken(..) => Some(
                "Tokens must be '#id', '.class' or 'key=value'. Disable strict mode to ignore other tokens",
            ),
            Self::MissingOpeningBrace | Self::StructureMarker(..) => None,
        }
    }
}
