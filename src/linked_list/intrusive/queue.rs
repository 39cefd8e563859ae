use core::ptr::NonNull;

use super::{
    iter::{Drained, QueueIter, QueueIterRev},
    traits::Node,
};

/// A FIFO queue threaded through intrusive nodes.
///
/// Nodes are appended at the tail and taken from the head. The queue only
/// stores pointers; the memory behind every node stays owned by the caller.
#[derive(Debug)]
pub struct LinkedQueue<T: Node> {
    head: Option<NonNull<T>>,
    tail: Option<NonNull<T>>,
    count: usize,
}

impl<T> LinkedQueue<T>
where
    T: Node,
{
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        LinkedQueue {
            head: None,
            tail: None,
            count: 0,
        }
    }

    /// Get the first node of the queue
    pub fn head(&self) -> Option<NonNull<T>> {
        self.head
    }

    /// Get the last node of the queue
    pub fn tail(&self) -> Option<NonNull<T>> {
        self.tail
    }

    /// Append a node at the tail of the queue.
    ///
    /// Whatever the node's links held from a previous membership is discarded.
    ///
    /// # Safety
    ///
    /// The node must be valid for reads and writes, must not be linked into
    /// any other queue, and must stay alive and untouched until it leaves this
    /// queue through [`dequeue`](Self::dequeue) or [`drain`](Self::drain).
    pub unsafe fn enqueue(&mut self, node: NonNull<T>) {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            node_ref.unlink();
            node_ref.set_prev(self.tail);
            match self.tail {
                Some(tail) => (*tail.as_ptr()).set_next(Some(node)),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.count += 1;
    }

    /// Remove the node at the head of the queue.
    ///
    /// The returned node is fully unlinked and may be enqueued elsewhere.
    pub fn dequeue(&mut self) -> Option<NonNull<T>> {
        let head = self.head?;
        unsafe {
            let head_ref = &mut *head.as_ptr();
            self.head = head_ref.next();
            match self.head {
                Some(next) => (*next.as_ptr()).set_prev(None),
                None => self.tail = None,
            }
            head_ref.unlink();
        }
        self.count -= 1;
        Some(head)
    }

    /// Detach the whole chain from the queue.
    ///
    /// The queue is left empty. The nodes keep their links so the returned
    /// [`Drained`] can walk them in FIFO order.
    pub fn drain(&mut self) -> Drained<T> {
        let head = self.head.take();
        self.tail = None;
        let count = core::mem::take(&mut self.count);
        unsafe { Drained::new(head, count) }
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the number of nodes in the queue
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get an iterator from head to tail.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the queue is not modified while iterating.
    pub unsafe fn iter(&self) -> QueueIter<'_, T> {
        unsafe { QueueIter::new(self.head) }
    }

    /// Get an iterator from tail to head.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the queue is not modified while iterating.
    pub unsafe fn iter_rev(&self) -> QueueIterRev<'_, T> {
        unsafe { QueueIterRev::new(self.tail) }
    }
}

impl<T> Default for LinkedQueue<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<T: Node + Send> Send for LinkedQueue<T> {}
unsafe impl<T: Node + Sync> Sync for LinkedQueue<T> {}
