// File: src/values.rs
// Purpose: Trimmed snapshot of form values taken at submission time

use serde::Serialize;

/// Field values in capture order. Every value is trimmed on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues {
    entries: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every named field through `read` in one pass. Fields the reader
    /// does not know capture as the empty string.
    pub fn capture<'a, I, R>(fields: I, mut read: R) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        R: FnMut(&str) -> Option<String>,
    {
        let mut values = Self::new();
        for field in fields {
            let value = read(field).unwrap_or_default();
            values.insert(field, value);
        }
        values
    }

    /// Insert or replace a value, trimming it
    pub fn insert(&mut self, field: impl Into<String>, value: impl AsRef<str>) {
        let field = field.into();
        let value = value.as_ref().trim().to_string();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Empty string for unknown fields
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (field, value) in iter {
            values.insert(field, value);
        }
        values
    }
}
