//! Proxying access to a foreign map.
//!
//! [`Proxy`] presents the map surface of this crate over any target that
//! implements [`MapStore`], without copying its data. The trait is the
//! explicit seam that replaces dynamic attribute interception: reads, writes,
//! and deletes are named accessors, with indexing layered on top as sugar.
//!
//! The proxy's own surface is a fixed, documented set of names that is never
//! forwarded to the target: [`Proxy::target`], [`Proxy::target_mut`], and
//! [`Proxy::into_inner`]. Everything else delegates verbatim.
//!
//! ```
//! use std::collections::HashMap;
//! use dotmap::{Proxy, Value};
//!
//! let mut data = HashMap::from([("a".to_string(), Value::Int(1))]);
//! let mut proxy = Proxy::new(&mut data);
//! assert_eq!(proxy["a"], 1);
//! proxy.set("a", 2);
//! drop(proxy);
//! assert_eq!(data["a"], 2);
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    ops::{Index, IndexMut},
};

use super::{DotMap, MapError, Value};

/// Flat keyed storage of [`Value`]s.
///
/// Implemented by [`DotMap`], the std map types keyed by `String`, and
/// mutable references to any of them, so a [`Proxy`] can either own its
/// target or borrow one in place.
pub trait MapStore {
    /// Gets the value at a key.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Gets a mutable reference to the value at a key.
    fn get_mut(&mut self, key: &str) -> Option<&mut Value>;

    /// Inserts a value, returning the previous one if present.
    fn insert(&mut self, key: String, value: Value) -> Option<Value>;

    /// Removes the value at a key, returning it.
    fn remove(&mut self, key: &str) -> Option<Value>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over the keys.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns true if a value exists at the key.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if the store has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MapStore for DotMap {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.keys().map(String::as_str))
    }
}

impl MapStore for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        HashMap::get_mut(self, key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(HashMap::keys(self).map(String::as_str))
    }
}

impl MapStore for BTreeMap<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        BTreeMap::get_mut(self, key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        BTreeMap::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(BTreeMap::keys(self).map(String::as_str))
    }
}

impl<T: MapStore + ?Sized> MapStore for &mut T {
    fn get(&self, key: &str) -> Option<&Value> {
        (**self).get(key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        (**self).get_mut(key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        (**self).insert(key, value)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        (**self).remove(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).keys()
    }
}

/// A wrapper forwarding map access to a wrapped target.
///
/// The target is the proxy's sole state. See the
/// [module documentation](self) for the reserved, non-forwarded surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Proxy<T: MapStore> {
    target: T,
}

impl<T: MapStore> Proxy<T> {
    /// Wraps a target.
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// The wrapped target. Reserved: never forwarded.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the wrapped target. Reserved: never forwarded.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Unwraps the proxy, returning the target. Reserved: never forwarded.
    pub fn into_inner(self) -> T {
        self.target
    }

    /// Gets the value at a key on the target.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.target.get(key)
    }

    /// Gets the value at a key, surfacing [`MapError::NotFound`].
    pub fn try_get(&self, key: &str) -> Result<&Value, MapError> {
        self.target.get(key).ok_or_else(|| MapError::NotFound {
            key: key.to_string(),
        })
    }

    /// Gets a mutable reference to the value at a key on the target.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.target.get_mut(key)
    }

    /// Sets a value on the target, returning the previous one if present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.target.insert(key.into(), value.into())
    }

    /// Deletes the value at a key on the target, returning it.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.target.remove(key)
    }

    /// Deletes the value at a key, surfacing [`MapError::NotFound`].
    pub fn try_delete(&mut self, key: &str) -> Result<Value, MapError> {
        self.target.remove(key).ok_or_else(|| MapError::NotFound {
            key: key.to_string(),
        })
    }

    /// Returns true if the target has a value at the key.
    pub fn has(&self, key: &str) -> bool {
        self.target.contains_key(key)
    }

    /// Returns the number of entries in the target.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// Returns true if the target has no entries.
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Returns an iterator over the target's keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.target.keys()
    }
}

/// Key lookup on the target; panics with the key name if absent.
impl<T: MapStore> Index<&str> for Proxy<T> {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.target.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

/// Mutable key lookup on the target; panics with the key name if absent.
impl<T: MapStore> IndexMut<&str> for Proxy<T> {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.target.get_mut(key) {
            Some(value) => value,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

impl<T: MapStore> fmt::Display for Proxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.target.keys().collect();
        keys.sort_unstable();
        write!(f, "{{")?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.target.get(key) {
                Some(value) => write!(f, "{key}: {value}")?,
                None => write!(f, "{key}: <missing>")?,
            }
        }
        write!(f, "}}")
    }
}
