use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An `AttributeName` is the key half of a `key=value` token.
pub type AttributeName = String;

/// An `AttributeValue` is the value half of a `key=value` token, with every
/// double quote already removed.
pub type AttributeValue = String;

/// The `key=value` pairs of a single inline attribute list.
///
/// Keys are unique. Iteration is ordered lexicographically by key so that
/// rendering never depends on insertion or hashing order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementAttributes(BTreeMap<AttributeName, AttributeValue>);

impl ElementAttributes {
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeName, &AttributeValue)> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Insert an attribute into the list.
    //
    // NOTE: A repeated key overwrites the earlier value.
    pub fn insert(&mut self, name: AttributeName, value: AttributeValue) {
        self.0.insert(name, value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl<'a> IntoIterator for &'a ElementAttributes {
    type Item = (&'a AttributeName, &'a AttributeValue);
    type IntoIter = std::collections::btree_map::Iter<'a, AttributeName, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ElementAttributes
where
    K: Into<AttributeName>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_overwrites_existing_key() {
        let mut attributes = ElementAttributes::default();
        attributes.insert("k".into(), "first".into());
        attributes.insert("k".into(), "second".into());
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("k"), Some(&"second".to_string()));
    }

    #[test]
    fn iteration_is_sorted_by_key() {
        let attributes: ElementAttributes = [("b", "2"), ("c", "3"), ("a", "1")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
