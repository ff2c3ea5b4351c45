//! Dotted-path types for nested map access.
//!
//! The [`Path`]/[`PathBuf`] pair follows the same borrowed/owned pattern as
//! `std::path::Path`/`PathBuf`: `PathBuf` owns its storage, `Path` is an
//! unsized view that is always used behind a reference.
//!
//! All constructors are infallible. Instead of rejecting malformed input,
//! paths are normalized: empty components produced by leading, trailing, or
//! consecutive separators are filtered out, so `".user..name."` means the same
//! as `"user.name"`. An all-separator string normalizes to the empty path.
//!
//! ```
//! use dotmap::{Path, PathBuf};
//!
//! let path = PathBuf::new().push("user").push("profile.name");
//! assert_eq!(path.as_str(), "user.profile.name");
//!
//! let (head, rest) = path.split_first().unwrap();
//! assert_eq!(head, "user");
//! assert_eq!(rest.as_str(), "profile.name");
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Separator character between path components.
pub const SEPARATOR: char = '.';

/// Normalizes a dotted-path string by filtering empty components.
///
/// ```
/// use dotmap::map::path::normalize;
///
/// assert_eq!(normalize("user.name"), "user.name");
/// assert_eq!(normalize(".user..name."), "user.name");
/// assert_eq!(normalize("..."), "");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .split(SEPARATOR)
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// An owned dotted path.
///
/// Stored as a normalized string; component access never allocates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed dotted path.
///
/// Unsized; always used behind a reference. Any `&str` can be viewed as a
/// `&Path` via [`AsRef`], so map operations accept bare string literals.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Appends a path fragment, normalizing it first.
    ///
    /// Accepts single components as well as dotted fragments; empty input is
    /// a no-op.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let normalized = normalize(fragment.as_ref());
        if normalized.is_empty() {
            return self;
        }
        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push(SEPARATOR);
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        self.push(other.as_ref().as_str())
    }

    /// Returns the parent path, or `None` if this path has at most one
    /// component.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind(SEPARATOR).map(|last| PathBuf {
            inner: self.inner[..last].to_string(),
        })
    }
}

impl Path {
    /// Views a string slice as a path.
    ///
    /// The input is not normalized; component iteration filters empty
    /// components lazily, so un-normalized strings behave identically to
    /// their normalized form.
    pub fn new(s: &str) -> &Path {
        // Cast is sound: Path is a repr(transparent) wrapper around str.
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the non-empty components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Splits the path into its first component and the remainder.
    ///
    /// This is the head/rest step of recursive dotted assignment. Returns
    /// `None` for the empty path; the remainder of a single-component path is
    /// the empty path.
    pub fn split_first(&self) -> Option<(&str, &Path)> {
        let trimmed = self.inner.trim_start_matches(SEPARATOR);
        let (head, rest) = match trimmed.split_once(SEPARATOR) {
            Some((head, rest)) => (head, rest),
            None => (trimmed, ""),
        };
        if head.is_empty() {
            return None;
        }
        Some((head, Path::new(rest)))
    }

    /// Returns the last component, or `None` if the path is empty.
    pub fn leaf(&self) -> Option<&str> {
        self.inner
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned, normalized `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: normalize(&self.inner),
        }
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PathBuf {
            inner: normalize(s),
        })
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        PathBuf {
            inner: normalize(s),
        }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}
