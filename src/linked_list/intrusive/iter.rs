use core::marker::PhantomData;
use core::ptr::NonNull;

use super::traits::Node;

/// An iterator over a queue, from head to tail.
pub struct QueueIter<'a, T: Node> {
    current: Option<NonNull<T>>,
    _queue: PhantomData<&'a T>,
}

impl<'a, T> QueueIter<'a, T>
where
    T: Node,
{
    /// Creates a new iterator starting at `head`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the chain is not modified while the iterator is alive.
    pub unsafe fn new(head: Option<NonNull<T>>) -> Self {
        Self {
            current: head,
            _queue: PhantomData,
        }
    }
}

impl<'a, T> Iterator for QueueIter<'a, T>
where
    T: Node,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

/// An iterator over a queue, from tail to head.
pub struct QueueIterRev<'a, T: Node> {
    current: Option<NonNull<T>>,
    _queue: PhantomData<&'a T>,
}

impl<'a, T> QueueIterRev<'a, T>
where
    T: Node,
{
    /// Creates a new iterator starting at `tail`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the chain is not modified while the iterator is alive.
    pub unsafe fn new(tail: Option<NonNull<T>>) -> Self {
        Self {
            current: tail,
            _queue: PhantomData,
        }
    }
}

impl<'a, T> Iterator for QueueIterRev<'a, T>
where
    T: Node,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().prev() };
        })
    }
}

/// A chain of nodes detached from a queue by [`drain`](super::queue::LinkedQueue::drain).
///
/// The chain is no longer owned by any queue. Iterating it yields the nodes
/// in FIFO order; each node is unlinked right before it is yielded, so the
/// caller may free it or link it somewhere else while the walk continues.
/// Dropping a `Drained` only forgets the pointers.
#[derive(Debug)]
pub struct Drained<T: Node> {
    head: Option<NonNull<T>>,
    remaining: usize,
}

impl<T> Drained<T>
where
    T: Node,
{
    /// Wraps a detached chain.
    ///
    /// # Safety
    ///
    /// `head` must start a chain of exactly `len` valid nodes linked through
    /// their `next` pointers, and no queue may still refer to them.
    pub unsafe fn new(head: Option<NonNull<T>>, len: usize) -> Self {
        Self {
            head,
            remaining: len,
        }
    }

    /// A chain with nothing in it.
    pub const fn empty() -> Self {
        Self {
            head: None,
            remaining: 0,
        }
    }

    /// The first node not yet yielded.
    pub fn head(&self) -> Option<NonNull<T>> {
        self.head
    }

    /// Number of nodes not yet yielded.
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Whether every node has been yielded.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

impl<T> Iterator for Drained<T>
where
    T: Node,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.head?;
        unsafe {
            let node_ref = &mut *node.as_ptr();
            self.head = node_ref.next();
            node_ref.unlink();
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Node> ExactSizeIterator for Drained<T> {}

impl<T: Node> Default for Drained<T> {
    fn default() -> Self {
        Self::empty()
    }
}

unsafe impl<T: Node + Send> Send for Drained<T> {}
