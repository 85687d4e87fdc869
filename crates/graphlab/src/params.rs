//! Ordered parameter mappings.

use std::{borrow::Cow, fmt};

use smallvec::SmallVec;

/// Inline capacity; no built-in family declares more than five parameters.
const INLINE: usize = 5;

/// An insertion-ordered `name -> value` mapping.
///
/// Families produce mappings in their declared parameter order. Mappings
/// from outside (CLI, GUI) may arrive in any order; the evaluator boundary
/// binds them by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    /// Entries in insertion order with unique names.
    entries: SmallVec<[(Cow<'static, str>, f64); INLINE]>,
}

impl Params {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from declared names and matching values.
    pub fn from_declared(names: &[&'static str], values: &[f64]) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self {
            entries: names
                .iter()
                .zip(values)
                .map(|(n, v)| (Cow::Borrowed(*n), *v))
                .collect(),
        }
    }

    /// Insert or overwrite a value, keeping the original position on overwrite.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_ref())
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), *v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Cow<'static, str>>> FromIterator<(K, f64)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap,
    };

    use super::Params;

    impl Serialize for Params {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, value) in self.iter() {
                map.serialize_entry(name, &value)?;
            }
            map.end()
        }
    }

    /// Visitor that keeps keys in the order the input lists them.
    struct ParamsVisitor;

    impl<'de> Visitor<'de> for ParamsVisitor {
        type Value = Params;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of parameter names to numbers")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Params, A::Error> {
            let mut params = Params::new();
            while let Some((name, value)) = access.next_entry::<String, f64>()? {
                params.insert(name, value);
            }
            Ok(params)
        }
    }

    impl<'de> Deserialize<'de> for Params {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(ParamsVisitor)
        }
    }
}
