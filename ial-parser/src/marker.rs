use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Document structure markers share the `{...}` syntax with inline attribute
/// lists. When one of these words is the entire content between the braces,
/// the braces are a marker for the block parser and never an attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureMarker {
    /// `{frontmatter}`: preface, table of contents and similar material.
    Frontmatter,
    /// `{mainmatter}`: the body of the document.
    Mainmatter,
    /// `{backmatter}`: appendices, bibliography and index.
    Backmatter,
}

impl StructureMarker {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontmatter => "frontmatter",
            Self::Mainmatter => "mainmatter",
            Self::Backmatter => "backmatter",
        }
    }

    /// Match the raw bytes between the braces against the reserved words.
    ///
    /// Comparison is exact and case sensitive.
    #[must_use]
    pub fn from_bytes(content: &[u8]) -> Option<Self> {
        match content {
            b"frontmatter" => Some(Self::Frontmatter),
            b"mainmatter" => Some(Self::Mainmatter),
            b"backmatter" => Some(Self::Backmatter),
            _ => None,
        }
    }
}

impl fmt::Display for StructureMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureMarker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or_else(|| {
            format!("invalid structure marker: '{s}', expected: frontmatter, mainmatter, backmatter")
        })
    }
}
