use core::fmt;
use core::ptr::NonNull;

use super::traits::{Link, LinkWithPrev};

/// The forward and backward pointers embedded in every node.
///
/// The pointers are non-owning: a queue only relinks nodes that the caller
/// already owns, and never allocates or frees them.
pub struct DoubleLink<T> {
    next: Option<NonNull<T>>,
    prev: Option<NonNull<T>>,
}

impl<T> DoubleLink<T> {
    /// Creates an unlinked link.
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }
}

impl<T> Link for DoubleLink<T> {
    type Target = T;

    #[inline]
    fn next(&self) -> Option<NonNull<T>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<T>>) {
        self.next = next;
    }
}

impl<T> LinkWithPrev for DoubleLink<T> {
    #[inline]
    fn prev(&self) -> Option<NonNull<T>> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NonNull<T>>) {
        self.prev = prev;
    }
}

impl<T> Default for DoubleLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DoubleLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleLink")
            .field("next", &self.next)
            .field("prev", &self.prev)
            .finish()
    }
}

// The link only carries addresses; access to the pointees is governed by
// whoever owns the queue the node sits in.
unsafe impl<T: Send> Send for DoubleLink<T> {}
unsafe impl<T: Sync> Sync for DoubleLink<T> {}
