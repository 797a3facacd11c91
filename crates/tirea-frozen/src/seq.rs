//! Read-only projection of sequences.

use crate::{DeepReadonly, FrozenError, FrozenResult, Path};
use std::collections::{vec_deque, VecDeque};
use std::fmt;
use std::iter::FusedIterator;

/// Read-only view of a sequence whose elements come back projected.
///
/// Produced by projecting a `Vec<T>`, `[T]`, `[T; N]` or `Box<[T]>`. There
/// is no way to append, remove or overwrite elements through it.
pub struct SeqView<'a, T> {
    items: &'a [T],
}

impl<'a, T> SeqView<'a, T> {
    #[inline]
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The elements as a shared slice, without projecting them.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    pub fn contains(&self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(needle)
    }

    /// Clone the elements into a new, independent `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<'a, T: DeepReadonly> SeqView<'a, T> {
    #[inline]
    pub fn get(&self, index: usize) -> Option<T::Projection<'a>> {
        self.items.get(index).map(|item| item.project())
    }

    /// Like [`get`](Self::get), but reports the miss as an error.
    pub fn try_get(&self, index: usize) -> FrozenResult<T::Projection<'a>> {
        self.get(index).ok_or_else(|| {
            FrozenError::index_out_of_bounds(Path::root().index(index), index, self.items.len())
        })
    }

    #[inline]
    pub fn first(&self) -> Option<T::Projection<'a>> {
        self.items.first().map(|item| item.project())
    }

    #[inline]
    pub fn last(&self) -> Option<T::Projection<'a>> {
        self.items.last().map(|item| item.project())
    }

    #[inline]
    pub fn iter(&self) -> SeqIter<'a, T> {
        SeqIter {
            inner: self.items.iter(),
        }
    }
}

impl<T> Clone for SeqView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SeqView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for SeqView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}

impl<T: PartialEq> PartialEq<[T]> for SeqView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SeqView<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == other.as_slice()
    }
}

impl<'a, T: DeepReadonly> IntoIterator for SeqView<'a, T> {
    type Item = T::Projection<'a>;
    type IntoIter = SeqIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the projected elements of a [`SeqView`].
pub struct SeqIter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T: DeepReadonly> Iterator for SeqIter<'a, T> {
    type Item = T::Projection<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.project())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: DeepReadonly> DoubleEndedIterator for SeqIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|item| item.project())
    }
}

impl<T: DeepReadonly> ExactSizeIterator for SeqIter<'_, T> {}

impl<T: DeepReadonly> FusedIterator for SeqIter<'_, T> {}

impl<T: DeepReadonly> DeepReadonly for [T] {
    type Projection<'a> = SeqView<'a, T> where Self: 'a;

    #[inline]
    fn project(&self) -> SeqView<'_, T> {
        SeqView::new(self)
    }
}

impl<T: DeepReadonly> DeepReadonly for Vec<T> {
    type Projection<'a> = SeqView<'a, T> where Self: 'a;

    #[inline]
    fn project(&self) -> SeqView<'_, T> {
        SeqView::new(self.as_slice())
    }
}

impl<T: DeepReadonly, const N: usize> DeepReadonly for [T; N] {
    type Projection<'a> = SeqView<'a, T> where Self: 'a;

    #[inline]
    fn project(&self) -> SeqView<'_, T> {
        SeqView::new(self.as_slice())
    }
}

/// Read-only view of a `VecDeque`, front to back.
///
/// The ring buffer may be split in two, so unlike [`SeqView`] there is no
/// single slice to hand out.
pub struct DequeView<'a, T> {
    items: &'a VecDeque<T>,
}

impl<'a, T> DequeView<'a, T> {
    #[inline]
    pub fn new(items: &'a VecDeque<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The two halves of the ring buffer, without projecting them.
    #[inline]
    pub fn as_slices(&self) -> (&'a [T], &'a [T]) {
        self.items.as_slices()
    }

    pub fn contains(&self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(needle)
    }

    /// Clone the elements, front to back, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<'a, T: DeepReadonly> DequeView<'a, T> {
    #[inline]
    pub fn get(&self, index: usize) -> Option<T::Projection<'a>> {
        self.items.get(index).map(|item| item.project())
    }

    /// Like [`get`](Self::get), but reports the miss as an error.
    pub fn try_get(&self, index: usize) -> FrozenResult<T::Projection<'a>> {
        self.get(index).ok_or_else(|| {
            FrozenError::index_out_of_bounds(Path::root().index(index), index, self.items.len())
        })
    }

    #[inline]
    pub fn front(&self) -> Option<T::Projection<'a>> {
        self.items.front().map(|item| item.project())
    }

    #[inline]
    pub fn back(&self) -> Option<T::Projection<'a>> {
        self.items.back().map(|item| item.project())
    }

    #[inline]
    pub fn iter(&self) -> DequeIter<'a, T> {
        DequeIter {
            inner: self.items.iter(),
        }
    }
}

impl<T> Clone for DequeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DequeView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for DequeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}

impl<T: PartialEq> PartialEq<VecDeque<T>> for DequeView<'_, T> {
    fn eq(&self, other: &VecDeque<T>) -> bool {
        self.items == other
    }
}

impl<'a, T: DeepReadonly> IntoIterator for DequeView<'a, T> {
    type Item = T::Projection<'a>;
    type IntoIter = DequeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the projected elements of a [`DequeView`].
pub struct DequeIter<'a, T> {
    inner: vec_deque::Iter<'a, T>,
}

impl<'a, T: DeepReadonly> Iterator for DequeIter<'a, T> {
    type Item = T::Projection<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.project())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: DeepReadonly> DoubleEndedIterator for DequeIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|item| item.project())
    }
}

impl<T: DeepReadonly> ExactSizeIterator for DequeIter<'_, T> {}

impl<T: DeepReadonly> FusedIterator for DequeIter<'_, T> {}

impl<T: DeepReadonly> DeepReadonly for VecDeque<T> {
    type Projection<'a> = DequeView<'a, T> where Self: 'a;

    #[inline]
    fn project(&self) -> DequeView<'_, T> {
        DequeView::new(self)
    }
}
