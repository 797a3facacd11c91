//! The deep read-only projection.
//!
//! [`DeepReadonly`] maps a type to a borrow-only view of itself. Structured
//! types (derived structs and enums, sequences, maps, callables) get a view
//! type whose accessors hand out the projection of each part; leaves come
//! back by value or as a shared reference.
//!
//! The mapping is resolved one accessor at a time, so a type that contains
//! itself (`struct Tree { children: Vec<Tree> }`) has a projection that is a
//! fixed point rather than an infinite unrolling.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Types with a deep read-only projection.
///
/// Usually implemented with `#[derive(DeepReadonly)]`; see the crate docs.
///
/// # Example
///
/// ```
/// use tirea_frozen::DeepReadonly;
///
/// let tags = vec![String::from("a"), String::from("b")];
/// let view = tags.project();
/// let first: Option<&str> = view.first();
/// assert_eq!(first, Some("a"));
/// assert_eq!(view.len(), 2);
/// ```
pub trait DeepReadonly {
    /// Borrow-only view of `Self`.
    ///
    /// Projections are `Copy` and expose no mutators: structured parts are
    /// reached through accessors that return their own projection.
    type Projection<'a>: Copy
    where
        Self: 'a;

    /// Borrow `self` as its projection.
    fn project(&self) -> Self::Projection<'_>;
}

macro_rules! impl_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepReadonly for $ty {
                type Projection<'a> = $ty;

                #[inline]
                fn project(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

impl_by_value!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    Duration,
);

impl<T: ?Sized> DeepReadonly for PhantomData<T> {
    type Projection<'a> = PhantomData<T> where Self: 'a;

    #[inline]
    fn project(&self) -> PhantomData<T> {
        PhantomData
    }
}

impl DeepReadonly for str {
    type Projection<'a> = &'a str;

    #[inline]
    fn project(&self) -> &str {
        self
    }
}

impl DeepReadonly for String {
    type Projection<'a> = &'a str;

    #[inline]
    fn project(&self) -> &str {
        self.as_str()
    }
}

impl DeepReadonly for std::path::Path {
    type Projection<'a> = &'a std::path::Path;

    #[inline]
    fn project(&self) -> &std::path::Path {
        self
    }
}

impl DeepReadonly for std::path::PathBuf {
    type Projection<'a> = &'a std::path::Path;

    #[inline]
    fn project(&self) -> &std::path::Path {
        self.as_path()
    }
}

// Set members cannot be reached mutably, so a shared borrow is already deep.
impl<T> DeepReadonly for BTreeSet<T> {
    type Projection<'a> = &'a BTreeSet<T> where Self: 'a;

    #[inline]
    fn project(&self) -> &BTreeSet<T> {
        self
    }
}

impl<T, S> DeepReadonly for HashSet<T, S> {
    type Projection<'a> = &'a HashSet<T, S> where Self: 'a;

    #[inline]
    fn project(&self) -> &HashSet<T, S> {
        self
    }
}

impl<T: DeepReadonly> DeepReadonly for Option<T> {
    type Projection<'a> = Option<T::Projection<'a>> where Self: 'a;

    #[inline]
    fn project(&self) -> Self::Projection<'_> {
        self.as_ref().map(|v| v.project())
    }
}

impl<T: DeepReadonly, E: DeepReadonly> DeepReadonly for Result<T, E> {
    type Projection<'a> = Result<T::Projection<'a>, E::Projection<'a>> where Self: 'a;

    #[inline]
    fn project(&self) -> Self::Projection<'_> {
        match self {
            Ok(v) => Ok(v.project()),
            Err(e) => Err(e.project()),
        }
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: DeepReadonly + ?Sized> DeepReadonly for $ptr<T> {
                type Projection<'a> = T::Projection<'a> where Self: 'a;

                #[inline]
                fn project(&self) -> Self::Projection<'_> {
                    (**self).project()
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<'r, T: DeepReadonly + ?Sized> DeepReadonly for &'r T {
    type Projection<'a> = T::Projection<'a> where Self: 'a;

    #[inline]
    fn project(&self) -> Self::Projection<'_> {
        (**self).project()
    }
}

impl<'c, B> DeepReadonly for Cow<'c, B>
where
    B: DeepReadonly + ToOwned + ?Sized,
{
    type Projection<'a> = B::Projection<'a> where Self: 'a;

    #[inline]
    fn project(&self) -> Self::Projection<'_> {
        (**self).project()
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: DeepReadonly),+> DeepReadonly for ($($name,)+) {
            type Projection<'a> = ($($name::Projection<'a>,)+) where Self: 'a;

            #[inline]
            #[allow(non_snake_case)]
            fn project(&self) -> Self::Projection<'_> {
                let ($($name,)+) = self;
                ($($name.project(),)+)
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);

/// Declare types as opaque leaves: their projection is a shared reference
/// and no accessors are generated.
///
/// Useful for local types with no inner structure worth projecting, or whose
/// fields are private. `#[derive(DeepReadonly)]` with `#[frozen(leaf)]` does
/// the same for a single type.
///
/// ```
/// use tirea_frozen::{frozen_leaf, DeepReadonly};
///
/// #[derive(Debug, PartialEq)]
/// pub struct Token(u64);
/// frozen_leaf!(Token);
///
/// let t = Token(7);
/// assert_eq!(t.project(), &Token(7));
/// ```
#[macro_export]
macro_rules! frozen_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DeepReadonly for $ty {
                type Projection<'a> = &'a $ty;

                #[inline]
                fn project(&self) -> &$ty {
                    self
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_projection<T: DeepReadonly + ?Sized>(_: &T) {}

    #[test]
    fn test_scalars_project_by_value() {
        let n: i32 = 42;
        let projected: i32 = n.project();
        assert_eq!(projected, 42);
        assert!(true.project());
        assert_eq!(Duration::from_secs(3).project(), Duration::from_secs(3));
    }

    #[test]
    fn test_strings_project_to_str() {
        let owned = String::from("Ravikiran");
        let view: &str = owned.project();
        assert_eq!(view, "Ravikiran");
        assert!(std::ptr::eq(view.as_ptr(), owned.as_ptr()));

        let path = std::path::PathBuf::from("/etc/hosts");
        assert_eq!(path.project(), std::path::Path::new("/etc/hosts"));
    }

    #[test]
    fn test_option_keeps_absence() {
        let none: Option<String> = None;
        assert_eq!(none.project(), None);

        let some = Some(String::from("x"));
        assert_eq!(some.project(), Some("x"));
    }

    #[test]
    fn test_result_projects_each_side() {
        let ok: Result<u16, String> = Ok(8080);
        let err: Result<u16, String> = Err("refused".into());
        assert_eq!(ok.project(), Ok(8080));
        assert_eq!(err.project(), Err("refused"));
    }

    #[test]
    fn test_pointers_are_transparent() {
        let boxed = Box::new(String::from("b"));
        let rc = Rc::new(5u8);
        let arc: Arc<str> = Arc::from("a");
        let cow: Cow<'_, str> = Cow::Owned("c".to_string());
        assert_eq!(boxed.project(), "b");
        assert_eq!(rc.project(), 5);
        assert_eq!(arc.project(), "a");
        assert_eq!(cow.project(), "c");
        assert_eq!((&&7i64).project(), 7);
    }

    #[test]
    fn test_tuples_project_elementwise() {
        let pair = (1u32, String::from("one"));
        assert_eq!(pair.project(), (1, "one"));
    }

    #[test]
    fn test_sets_and_markers() {
        let set: BTreeSet<u8> = [1, 2].into_iter().collect();
        assert!(set.project().contains(&2));
        assert_projection(&PhantomData::<dyn Fn()>);
        assert_projection("unsized");
    }

    #[test]
    fn test_frozen_leaf_macro() {
        #[derive(Debug, PartialEq)]
        struct Opaque(Vec<u8>);
        frozen_leaf!(Opaque);

        let o = Opaque(vec![1]);
        assert!(std::ptr::eq(o.project(), &o));
    }
}
