//! Data model for inline attribute lists.

use serde::{Deserialize, Serialize};

mod attributes;

pub use attributes::{AttributeName, AttributeValue, ElementAttributes};

pub type Role = String;

/// An `Ial` is one parsed inline attribute list, e.g. `{#intro .lead lang="en"}`.
///
/// An empty `id` means no `#token` was seen. All three parts may be empty;
/// such a record still consumed its input but renders as nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Ial {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<Role>,
    #[serde(default, skip_serializing_if = "ElementAttributes::is_empty")]
    pub attributes: ElementAttributes,
}

impl Ial {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id, replacing any previous one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<Role>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_attribute(
        mut self,
        name: impl Into<AttributeName>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// True when the record carries no id, classes or attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.classes.is_empty() && self.attributes.is_empty()
    }
}
