//! Case-insensitive header map.
//!
//! Names compare without regard to ASCII case, and iteration is ordered by
//! the case-insensitive name so that serialization is deterministic. A name
//! keeps the spelling it was first inserted with; a later `put` under any
//! spelling replaces only the value.

use std::collections::BTreeMap;
use std::collections::btree_map;

use unicase::UniCase;

use crate::protocol::ParseError;

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const USER_AGENT: &str = "User-Agent";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    storage: BTreeMap<UniCase<String>, String>,
}

impl Headers {
    pub fn new() -> Self {
        Default::default()
    }

    /// Inserts or overwrites the value stored under `name`.
    pub fn put<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) -> &mut Self {
        self.storage.insert(UniCase::new(name.into()), value.into());
        self
    }

    /// Linear scan: `UniCase<String>` cannot be borrowed as `UniCase<&str>`,
    /// and a head capped at 8 KiB holds few headers.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = UniCase::new(name);
        self.storage.iter().find(|(key, _)| **key == name).map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.storage.iter() }
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.get(USER_AGENT)
    }

    /// The declared body length in bytes, zero when the header is absent.
    pub fn content_length(&self) -> Result<u64, ParseError> {
        match self.get(CONTENT_LENGTH) {
            None => Ok(0),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ParseError::invalid_content_length(format!("value {value} is not u64"))),
        }
    }
}

/// Iterator over `(name, value)` pairs in case-insensitive name order.
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, UniCase<String>, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
