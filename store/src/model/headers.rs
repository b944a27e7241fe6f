use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Case-insensitive mapping of header names to values. Keys are stored
/// lowercased so lookups behave the same regardless of the casing the
/// transport delivered. Serializes as a flat JSON object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct HeaderBag {
    headers: BTreeMap<String, String>,
}

impl HeaderBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut bag = HeaderBag::new();

        for (name, value) in pairs {
            bag.insert(name, value);
        }

        bag
    }

    /// Sets a header, replacing any existing value for the same name
    pub fn insert(&mut self, name: &str, value: &str) {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.headers.iter()
    }
}
