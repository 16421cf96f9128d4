use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use itertools::Itertools;

use crate::decode::{decode_array, Decode, DecodeError};
use crate::frame::Frame;

/// Field/value pairs of a stream entry.
///
/// Values are kept as strings. Typed access goes through `FromStr`/`Display`, so a number
/// written with [`FieldMap::insert`] reads back as the same number with [`FieldMap::get`].
/// Insertion order is kept for the wire, but equality ignores it.
///
/// Field names are unique. A repeated field, whether inserted or decoded from a reply, keeps
/// the position of its first occurrence and the value of its last one.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> FieldMap {
        FieldMap::default()
    }

    pub fn with_capacity(capacity: usize) -> FieldMap {
        FieldMap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Sets `field`, replacing a previous value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Display) {
        let field = field.into();
        let value = value.to_string();

        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, v)) => *v = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Reads `field` converted to `T`. `None` when missing or when the stored string does not
    /// parse as `T`.
    pub fn get<T: FromStr>(&self, field: &str) -> Option<T> {
        self.get_str(field).and_then(|v| v.parse().ok())
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        let position = self.entries.iter().position(|(f, _)| f == field)?;
        Some(self.entries.remove(position).1)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.entries.iter().any(|(f, _)| f == field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }

    /// `[field1, value1, field2, value2, ...]`, ready to be appended to a command.
    pub fn flatten(&self) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(self.entries.len() * 2);
        for (field, value) in &self.entries {
            frames.push(Frame::from(field));
            frames.push(Frame::from(value));
        }
        frames
    }
}

impl PartialEq for FieldMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(field, value)| other.get_str(field) == Some(value))
    }
}

impl Eq for FieldMap {}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (field, value) in iter {
            map.insert(field, value);
        }
        map
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for FieldMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Decode for FieldMap {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        let items = decode_array(frame)?;

        if items.len() % 2 != 0 {
            return Err(DecodeError::type_mismatch::<FieldMap>(frame));
        }

        let mut entries: Vec<(String, String)> = Vec::with_capacity(items.len() / 2);
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(items.len() / 2);
        for (field, value) in items.iter().tuples::<(_, _)>() {
            let field = String::decode(field)?;
            let value = String::decode(value)?;

            match positions.get(&field) {
                Some(&i) => entries[i].1 = value,
                None => {
                    positions.insert(field.clone(), entries.len());
                    entries.push((field, value));
                }
            }
        }
        Ok(FieldMap { entries })
    }
}
