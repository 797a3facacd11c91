//! Read-only projection of callables.
//!
//! Calling through a projection leaves the arguments alone and freezes the
//! result: a callable that builds structured data hands that data back as a
//! [`Frozen`] value instead of a bare one.

use crate::{DeepReadonly, Frozen};
use std::fmt;

/// Borrowed callable whose results come back [`Frozen`].
pub struct FnView<'a, F: ?Sized> {
    f: &'a F,
}

impl<'a, F: ?Sized> FnView<'a, F> {
    #[inline]
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }

    /// The callable itself; calling it directly returns unfrozen results.
    #[inline]
    pub fn inner(&self) -> &'a F {
        self.f
    }
}

impl<F: ?Sized> Clone for FnView<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for FnView<'_, F> {}

impl<F: ?Sized> fmt::Debug for FnView<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnView")
            .field("callable", &std::any::type_name::<F>())
            .finish()
    }
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl_callable!(@dyn [dyn Fn($($arg),*) -> R] $($arg),*);
        impl_callable!(@dyn [dyn Fn($($arg),*) -> R + Send + Sync] $($arg),*);

        impl<R, $($arg),*> DeepReadonly for fn($($arg),*) -> R {
            type Projection<'a> = FnView<'a, Self> where Self: 'a;

            #[inline]
            fn project(&self) -> FnView<'_, Self> {
                FnView::new(self)
            }
        }

        impl<'a, R, $($arg),*> FnView<'a, fn($($arg),*) -> R> {
            /// Call with the original arguments and freeze the result.
            #[allow(non_snake_case, clippy::too_many_arguments)]
            pub fn call(&self, $($arg: $arg),*) -> Frozen<R> {
                Frozen::new((self.f)($($arg),*))
            }
        }
    };
    (@dyn [$($fn_ty:tt)*] $($arg:ident),*) => {
        impl<R, $($arg),*> DeepReadonly for $($fn_ty)* {
            type Projection<'a> = FnView<'a, Self> where Self: 'a;

            #[inline]
            fn project(&self) -> FnView<'_, Self> {
                FnView::new(self)
            }
        }

        impl<'a, R, $($arg),*> FnView<'a, $($fn_ty)*> {
            /// Call with the original arguments and freeze the result.
            #[allow(non_snake_case)]
            pub fn call(&self, $($arg: $arg),*) -> Frozen<R> {
                Frozen::new((self.f)($($arg),*))
            }
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
