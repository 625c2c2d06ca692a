//! Fill values — the current value typed in for each variable.
//!
//! An insertion-ordered map from variable name to value. Order matters:
//! `assemble` substitutes in this order, so when one value contains
//! another variable's token, the later entry still gets replaced.
//!
//! Assigning to an existing name keeps its position; new names go last.

use promptdeck_core::prompt::VariableDefinition;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillValues {
    entries: Vec<(String, String)>,
}

impl FillValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from declared variables: each name maps to its default value.
    /// With duplicate names the last definition's default wins.
    pub fn from_definitions(variables: &[VariableDefinition]) -> Self {
        let mut values = Self::new();
        for v in variables {
            values.set(v.name.clone(), v.default_value.clone());
        }
        values
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Move the value stored under `old` to `new`.
    ///
    /// The old key is always dropped and the new key always written (with
    /// `""` when `old` had no value), overwriting whatever `new` held.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) {
        let value = self.remove(old).unwrap_or_default();
        self.set(new, value);
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FillValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.set(k, v);
        }
        values
    }
}

impl Serialize for FillValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FillValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FillVisitor;

        impl<'de> Visitor<'de> for FillVisitor {
            type Value = FillValues;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of variable names to fill values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FillValues, A::Error> {
                let mut values = FillValues::new();
                while let Some((name, value)) = access.next_entry::<String, Option<String>>()? {
                    values.set(name, value.unwrap_or_default());
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(FillVisitor)
    }
}
