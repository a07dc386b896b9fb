use crate::common::bit;
use crate::ports::provided::BitfieldError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Ordered option name → bit index map.
///
/// Iteration follows the first appearance of each name. Re-inserting a name
/// overwrites its index but keeps its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(String, u32)>,
    forward: HashMap<String, usize>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from declared names, each name taking its position as index.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::common::OptionMap;
    ///
    /// let map = OptionMap::from_names(["a", "b", "a"]).unwrap();
    ///
    /// // last occurrence wins the index, first occurrence keeps the order
    /// assert_eq!(map.index_of("a"), Some(2));
    /// assert_eq!(map.index_of("b"), Some(1));
    /// assert_eq!(map.names().collect::<Vec<_>>(), vec!["a", "b"]);
    /// ```
    pub fn from_names<I, S>(names: I) -> Result<Self, BitfieldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() > bit::REGISTER_BITS as usize {
            return Err(BitfieldError::TooManyOptions(names.len()));
        }

        let mut map = Self::new();
        for (index, name) in names.into_iter().enumerate() {
            map.insert(name, index as u32);
        }
        Ok(map)
    }

    /// Inserts `name` at `index`, overwriting the index of an existing name.
    pub fn insert(&mut self, name: String, index: u32) {
        match self.forward.entry(name) {
            Entry::Occupied(e) => {
                self.entries[*e.get()].1 = index;
            }
            Entry::Vacant(e) => {
                self.entries.push((e.key().clone(), index));
                e.insert(self.entries.len() - 1);
            }
        }
    }

    /// Returns the bit index of `name`, or `None` if it was never declared.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::common::OptionMap;
    ///
    /// let map = OptionMap::from_names(["read", "write"]).unwrap();
    /// assert_eq!(map.index_of("write"), Some(1));
    /// assert_eq!(map.index_of("exec"), None);
    /// ```
    pub fn index_of(&self, name: &str) -> Option<u32> {
        let slot = *self.forward.get(name)?;
        Some(self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(name, index)| (name.as_str(), *index))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every index fits the register and no two names share a bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_bitfield::common::OptionMap;
    ///
    /// let mut map = OptionMap::new();
    /// map.insert("a".to_string(), 0);
    /// assert!(map.validate().is_ok());
    ///
    /// map.insert("b".to_string(), 0);
    /// assert!(map.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), String> {
        let mut used = 0u64;
        for (name, index) in self.iter() {
            let m = bit::mask(index).ok_or_else(|| {
                format!("option '{}' has index {} past {} bits", name, index, bit::REGISTER_BITS)
            })?;
            if used & m != 0 {
                return Err(format!("option '{}' shares bit {} with another option", name, index));
            }
            used |= m;
        }
        Ok(())
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, index) in self.iter() {
            map.serialize_entry(name, &index)?;
        }
        map.end()
    }
}

struct OptionMapVisitor;

impl<'de> Visitor<'de> for OptionMapVisitor {
    type Value = OptionMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of option name to bit index")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<OptionMap, A::Error> {
        let mut map = OptionMap::new();
        while let Some((name, index)) = access.next_entry::<String, u32>()? {
            map.insert(name, index);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for OptionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionMapVisitor)
    }
}
