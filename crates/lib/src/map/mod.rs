//! Dotted-key nested mapping.
//!
//! [`DotMap`] is a string-keyed map whose values are [`Value`]s, where a key
//! containing `'.'` is interpreted as a path through nested maps that are
//! created on demand. Both flat access ([`DotMap::set`], indexing) and
//! path access ([`DotMap::set_path`], [`DotMap::get`]) read and write the
//! same underlying data.
//!
//! # Usage
//!
//! ```
//! use dotmap::DotMap;
//!
//! let mut map = DotMap::new();
//! map.set_path("user.profile.name", "Alice")?;
//! map.set_path("user.profile.age", 30)?;
//!
//! assert_eq!(map["user"]["profile"]["name"], "Alice");
//! assert_eq!(map.get_as::<i64>("user.profile.age"), Some(30));
//! # Ok::<(), dotmap::MapError>(())
//! ```
//!
//! # Overwrite policy
//!
//! Assigning through a path whose prefix holds a non-map value discards that
//! value and replaces it with a fresh empty map. This matches the documented
//! contract; because it silently drops data, the replacement is reported as a
//! `tracing` debug event.
//!
//! # Auto-vivification
//!
//! [`DotMap::auto`] constructs a vivifying map: reading a missing key through
//! indexing yields an empty vivifying map instead of panicking, so
//! `m["a"]["b"]["c"]` never fails, and [`DotMap::at`] materializes every
//! missing level of a path. Maps created by vivification inherit the policy.
//! The policy is not data: it is ignored by equality and serialization.

use std::{
    collections::HashMap,
    fmt,
    ops::{Index, IndexMut},
    sync::LazyLock,
};

mod errors;
pub mod path;
pub mod proxy;
pub mod value;

pub use errors::MapError;
pub use path::{Path, PathBuf};
pub use proxy::{MapStore, Proxy};
pub use value::Value;

/// Shared read target for missing keys on vivifying maps.
static EMPTY_AUTO: LazyLock<Value> = LazyLock::new(|| Value::Map(DotMap::auto()));

/// A nested map with dotted-path access.
///
/// See the [module documentation](self) for an overview.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DotMap {
    /// Direct entries indexed by string keys.
    entries: HashMap<String, Value>,
    /// Auto-vivification policy; inherited by maps created through this one.
    #[serde(skip)]
    vivify: bool,
}

impl DotMap {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            vivify: false,
        }
    }

    /// Creates a new empty auto-vivifying map.
    ///
    /// Missing keys read through indexing yield an empty vivifying map
    /// instead of panicking, and every map created by path assignment or
    /// [`DotMap::at`] under this one inherits the policy.
    pub fn auto() -> Self {
        Self {
            entries: HashMap::new(),
            vivify: true,
        }
    }

    /// Returns true if this map auto-vivifies missing keys.
    pub fn is_vivifying(&self) -> bool {
        self.vivify
    }

    /// An empty map carrying this map's vivification policy.
    fn child(&self) -> DotMap {
        Self {
            entries: HashMap::new(),
            vivify: self.vivify,
        }
    }

    /// Returns the number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if a value exists at the given key or path.
    pub fn contains_key(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Sets a single flat key, with no path splitting.
    ///
    /// A key containing dots is stored verbatim as one entry; use
    /// [`DotMap::set_path`] for dotted semantics. Returns the previous value
    /// at that key, if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Sets a value at a dotted path, creating intermediate maps as needed.
    ///
    /// Every path prefix is guaranteed to hold a map before the leaf is set:
    /// a missing prefix springs into existence as an empty map, and a non-map
    /// value at a prefix is discarded and replaced (see the
    /// [module documentation](self) on the overwrite policy). Returns the
    /// previous value at the leaf, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidPath`] if the path has no components.
    pub fn set_path(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, MapError> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let Some((leaf, prefix)) = segments.split_last() else {
            return Err(MapError::InvalidPath {
                path: path.as_str().to_string(),
            });
        };

        let mut current = self;
        for segment in prefix {
            // Freshly created intermediates inherit the vivification policy
            let child = current.child();
            let replacement = current.child();
            let entry = current
                .entries
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Map(child));
            if !matches!(entry, Value::Map(_)) {
                tracing::debug!(
                    segment = *segment,
                    path = %path,
                    discarded = %entry,
                    "dotted assignment replaced a non-map value at an intermediate segment"
                );
                *entry = Value::Map(replacement);
            }
            match entry {
                Value::Map(map) => current = map,
                _ => unreachable!(),
            }
        }
        Ok(current.entries.insert((*leaf).to_string(), value.into()))
    }

    /// Merges key/value pairs into this map, interpreting dotted keys.
    ///
    /// Each pair is applied through [`DotMap::set_path`] in iteration order,
    /// so later pairs win. Returns `&mut self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidPath`] on the first pair with an empty key.
    pub fn update<K, V, I>(&mut self, entries: I) -> Result<&mut Self, MapError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<Path>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.set_path(key.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Gets a value by key or dotted path.
    ///
    /// A direct entry under the whole key wins over path navigation, so flat
    /// keys stored verbatim by [`DotMap::set`] stay readable. Numeric path
    /// segments index into lists.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        if let Some(value) = self.entries.get(path.as_ref().as_str()) {
            return Some(value);
        }
        let mut components = path.as_ref().components();
        let mut current = self.entries.get(components.next()?)?;
        for segment in components {
            match current {
                Value::Map(map) => current = map.entries.get(segment)?,
                Value::List(list) => {
                    let index: usize = segment.parse().ok()?;
                    current = list.get(index)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }

    /// Gets a mutable reference to a value by key or dotted path.
    ///
    /// Same lookup rules as [`DotMap::get`].
    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        if self.entries.contains_key(path.as_ref().as_str()) {
            return self.entries.get_mut(path.as_ref().as_str());
        }
        let mut components = path.as_ref().components();
        let mut current = self.entries.get_mut(components.next()?)?;
        for segment in components {
            match current {
                Value::Map(map) => current = map.entries.get_mut(segment)?,
                Value::List(list) => {
                    let index: usize = segment.parse().ok()?;
                    current = list.get_mut(index)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }

    /// Gets a value, surfacing a [`MapError::NotFound`] carrying the path.
    pub fn try_get(&self, path: impl AsRef<Path>) -> Result<&Value, MapError> {
        let path = path.as_ref();
        self.get(path).ok_or_else(|| MapError::NotFound {
            key: path.as_str().to_string(),
        })
    }

    /// Gets a value by key or path with automatic type conversion.
    ///
    /// Returns `None` if the path is missing or the value has a different
    /// type.
    ///
    /// ```
    /// # use dotmap::DotMap;
    /// let mut map = DotMap::new();
    /// map.set("name", "Alice");
    /// assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(map.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = MapError>,
    {
        T::try_from(self.get(path)?).ok()
    }

    /// Gets a reference to a nested map by key or path.
    pub fn get_map(&self, path: impl AsRef<Path>) -> Option<&DotMap> {
        self.get(path)?.as_map()
    }

    /// Gets a mutable reference to a nested map by key or path.
    pub fn get_map_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut DotMap> {
        self.get_mut(path)?.as_map_mut()
    }

    /// Removes the value at a key or dotted path, returning it.
    ///
    /// Returns `None` if any path prefix is missing or not a map. Empty
    /// intermediate maps left behind are kept.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        if self.entries.contains_key(path.as_ref().as_str()) {
            return self.entries.remove(path.as_ref().as_str());
        }
        let segments: Vec<&str> = path.as_ref().components().collect();
        let (leaf, prefix) = segments.split_last()?;
        let mut current = self;
        for segment in prefix {
            match current.entries.get_mut(*segment) {
                Some(Value::Map(map)) => current = map,
                _ => return None,
            }
        }
        current.entries.remove(*leaf)
    }

    /// Removes a value, surfacing a [`MapError::NotFound`] carrying the path.
    pub fn try_remove(&mut self, path: impl AsRef<Path>) -> Result<Value, MapError> {
        let path = path.as_ref();
        self.remove(path).ok_or_else(|| MapError::NotFound {
            key: path.as_str().to_string(),
        })
    }

    /// Mutable auto-vivifying access to a dotted path.
    ///
    /// Every missing level of the path springs into existence as an empty map
    /// inheriting this map's vivification policy; a non-map value at a prefix
    /// is replaced under the same policy as [`DotMap::set_path`]. An existing
    /// leaf value is returned as-is, whatever its type.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidPath`] if the path has no components.
    pub fn at(&mut self, path: impl AsRef<Path>) -> Result<&mut Value, MapError> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let Some((leaf, prefix)) = segments.split_last() else {
            return Err(MapError::InvalidPath {
                path: path.as_str().to_string(),
            });
        };

        let mut current = self;
        for segment in prefix {
            let child = current.child();
            let replacement = current.child();
            let entry = current
                .entries
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Map(child));
            if !matches!(entry, Value::Map(_)) {
                tracing::debug!(
                    segment = *segment,
                    path = %path,
                    discarded = %entry,
                    "vivifying access replaced a non-map value at an intermediate segment"
                );
                *entry = Value::Map(replacement);
            }
            match entry {
                Value::Map(map) => current = map,
                _ => unreachable!(),
            }
        }
        let child = current.child();
        Ok(current
            .entries
            .entry((*leaf).to_string())
            .or_insert_with(|| Value::Map(child)))
    }

    /// Returns an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all key-value pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Converts to the plain `serde_json` object representation.
    ///
    /// Every nested map converts recursively, so the result contains no
    /// `DotMap` values.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Builds a map from a `serde_json` object, converting nested objects
    /// into nested maps recursively.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::TypeMismatch`] if the value is not an object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, MapError> {
        match Value::from(value) {
            Value::Map(map) => Ok(map),
            other => Err(MapError::TypeMismatch {
                expected: "map".to_string(),
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Serializes any `Serialize` value and sets it at the given path.
    ///
    /// JSON objects become nested maps, so structs land as dotted-capable
    /// subtrees.
    pub fn set_json<T>(&mut self, path: impl AsRef<Path>, value: &T) -> crate::Result<Option<Value>>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_value(value)?;
        self.set_path(path, Value::from(json)).map_err(Into::into)
    }

    /// Gets the value at a path and deserializes it into `T`.
    pub fn get_json<T>(&self, path: impl AsRef<Path>) -> crate::Result<T>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let value = self.try_get(path)?;
        Ok(serde_json::from_value(value.to_json())?)
    }
}

// Builder pattern methods
impl DotMap {
    /// Builder method to set a value at a dotted path and return self.
    ///
    /// Empty paths are ignored.
    pub fn with(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        let _ = self.set_path(path, value);
        self
    }
}

/// Equality compares entries only; the vivification policy is an access
/// policy, not data.
impl PartialEq for DotMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Key or dotted-path lookup.
///
/// On a vivifying map a missing key yields a shared empty vivifying map, so
/// `m["a"]["b"]["c"]` never panics. On a plain map a missing key panics with
/// the key name, mirroring `std` map indexing.
impl Index<&str> for DotMap {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None if self.vivify => &*EMPTY_AUTO,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

/// Mutable key or dotted-path lookup; panics on a missing key. Use
/// [`DotMap::at`] for vivifying mutable access.
impl IndexMut<&str> for DotMap {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

impl fmt::Display for DotMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted for deterministic output
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        write!(f, "{{")?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {}", self.entries[*key])?;
        }
        write!(f, "}}")
    }
}

impl From<HashMap<String, Value>> for DotMap {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self {
            entries,
            vivify: false,
        }
    }
}

/// Flat construction: keys are stored verbatim, with no path splitting.
impl FromIterator<(String, Value)> for DotMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            vivify: false,
        }
    }
}

impl Extend<(String, Value)> for DotMap {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for DotMap {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DotMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
