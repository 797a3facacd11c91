//! `Frozen<T>`: a value marked deeply read-only by convention.
//!
//! `Frozen<T>` combines two capabilities on one value:
//!
//! - [`Frozen::view`] hands out the [`DeepReadonly`] projection, for code
//!   that should only read;
//! - `Deref`/`DerefMut` expose `T` itself, so every write `T` allows still
//!   works and every function taking `&T` or `&mut T` accepts it as is.
//!
//! Where the two meet, writable wins. The wrapper is `#[repr(transparent)]`:
//! a `Frozen<T>` is the same memory as the `T` it wraps, and
//! [`Frozen::from_ref`]/[`Frozen::from_mut`] reinterpret an existing
//! borrow without copying.

use crate::DeepReadonly;
use ref_cast::RefCast;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A `T` annotated as deeply read-only, with no write restriction.
///
/// ```
/// use tirea_frozen::{DeepReadonly, Frozen};
///
/// #[derive(DeepReadonly)]
/// struct Server {
///     port: u16,
///     flags: Vec<String>,
/// }
///
/// fn harden(server: &mut Server) {
///     server.flags.push("secure".into());
/// }
///
/// let mut server = Frozen::new(Server { port: 3000, flags: vec![] });
///
/// // Reads through the projection...
/// assert_eq!(server.view().port(), 3000);
///
/// // ...and writes through the value itself.
/// server.port = 8080;
/// harden(&mut server);
/// assert_eq!(server.view().flags().last(), Some("secure"));
/// ```
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, RefCast,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Frozen<T>(T);

impl<T> Frozen<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwrap into the original value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reinterpret a shared borrow of `T` as a borrow of `Frozen<T>`.
    #[inline]
    pub fn from_ref(value: &T) -> &Self {
        Self::ref_cast(value)
    }

    /// Reinterpret a mutable borrow of `T` as a borrow of `Frozen<T>`.
    ///
    /// Writes through the returned reference land in `value`.
    #[inline]
    pub fn from_mut(value: &mut T) -> &mut Self {
        Self::ref_cast_mut(value)
    }

    #[inline]
    pub fn as_inner(&self) -> &T {
        &self.0
    }

    #[inline]
    pub fn as_inner_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: DeepReadonly> Frozen<T> {
    /// The deep read-only projection of the inner value.
    #[inline]
    pub fn view(&self) -> T::Projection<'_> {
        self.0.project()
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Frozen<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Frozen<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for Frozen<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Borrow<T> for Frozen<T> {
    fn borrow(&self) -> &T {
        &self.0
    }
}

impl<T> BorrowMut<T> for Frozen<T> {
    fn borrow_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: IntoIterator> IntoIterator for Frozen<T> {
    type Item = T::Item;
    type IntoIter = T::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Frozen<T>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = <&'a T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Frozen<T>
where
    &'a mut T: IntoIterator,
{
    type Item = <&'a mut T as IntoIterator>::Item;
    type IntoIter = <&'a mut T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&mut self.0).into_iter()
    }
}

impl<T: Extend<A>, A> Extend<A> for Frozen<T> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: FromIterator<A>, A> FromIterator<A> for Frozen<T> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(T::from_iter(iter))
    }
}

impl<T: DeepReadonly> DeepReadonly for Frozen<T> {
    type Projection<'a> = T::Projection<'a> where Self: 'a;

    #[inline]
    fn project(&self) -> Self::Projection<'_> {
        self.0.project()
    }
}

/// Conversions into [`Frozen`] for any sized value.
pub trait Freeze: Sized {
    /// Wrap `self`; the value moves, nothing is copied.
    fn freeze(self) -> Frozen<Self> {
        Frozen::new(self)
    }

    /// See [`Frozen::from_ref`].
    fn frozen_ref(&self) -> &Frozen<Self> {
        Frozen::from_ref(self)
    }

    /// See [`Frozen::from_mut`].
    fn frozen_mut(&mut self) -> &mut Frozen<Self> {
        Frozen::from_mut(self)
    }
}

impl<T> Freeze for T {}
