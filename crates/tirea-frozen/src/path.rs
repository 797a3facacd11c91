//! Locations inside a dynamic JSON document.
//!
//! A [`Path`] is the address that [`ValueView::at`](crate::ValueView::at)
//! walks, and the context every [`FrozenError`](crate::FrozenError) reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Object member lookup.
    Key(String),
    /// Array element lookup.
    Index(usize),
}

impl Seg {
    /// The key, if this is a key step.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Seg::Key(k) => Some(k),
            Seg::Index(_) => None,
        }
    }

    /// The index, if this is an index step.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Seg::Key(_) => None,
            Seg::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, ".{}", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// A sequence of [`Seg`]s starting at the document root.
///
/// ```
/// use tirea_frozen::Path;
///
/// let path = Path::root().key("users").index(0).key("name");
/// assert_eq!(path.to_string(), "$.users[0].name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// The empty path, addressing the document itself.
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Append a key step (builder style).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index step (builder style).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first `len` steps of this path.
    #[inline]
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }

    /// `self` followed by every step of `other`.
    pub fn join(&self, other: &Path) -> Path {
        let mut joined = self.clone();
        joined.0.extend(other.0.iter().cloned());
        joined
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Seg> {
        self.0.iter()
    }

    /// Parse a dot-separated path such as `server.flags.0`.
    ///
    /// Purely numeric steps become index steps; empty steps are ignored.
    pub fn parse(dotted: &str) -> Path {
        dotted
            .split('.')
            .filter(|s| !s.is_empty())
            .map(|s| match parse_index(s) {
                Some(i) => Seg::Index(i),
                None => Seg::Key(s.to_owned()),
            })
            .collect()
    }

    /// Parse an RFC 6901 JSON pointer such as `/server/flags/0`.
    ///
    /// Returns `None` when the pointer is neither empty nor starts with `/`.
    pub fn from_pointer(pointer: &str) -> Option<Path> {
        if pointer.is_empty() {
            return Some(Path::root());
        }
        let rest = pointer.strip_prefix('/')?;
        Some(
            rest.split('/')
                .map(|raw| {
                    let token = raw.replace("~1", "/").replace("~0", "~");
                    match parse_index(&token) {
                        Some(i) if !token.starts_with('0') || token == "0" => Seg::Index(i),
                        _ => Seg::Key(token),
                    }
                })
                .collect(),
        )
    }
}

/// A step made only of ASCII digits that fits in `usize`.
fn parse_index(step: &str) -> Option<usize> {
    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    step.parse().ok()
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Build a [`Path`]: string expressions become keys, `usize` expressions
/// become indices.
///
/// ```
/// use tirea_frozen::path;
///
/// let p = path!("users", 0, "name");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Seg::from($seg));
        )+
        p
    }};
}
