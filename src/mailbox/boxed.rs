use std::borrow::Cow;
use std::fmt;
use std::ptr::NonNull;
use std::time::{Duration, Instant};

use crate::linked_list::intrusive::traits::Node;

use super::blocking_impl::Mailbox;
use super::error::{MailboxError, SendError};

/// A [`Mailbox`] whose nodes are heap allocations owned by the caller.
///
/// Every node enters as a `Box<T>` and leaves as the same `Box<T>`, so the
/// whole interface is safe. The mailbox still never allocates: the box is the
/// caller's allocation, and it travels through the queue without being copied.
///
/// Dropping a `BoxMailbox` closes it and frees every node still queued.
pub struct BoxMailbox<T: Node> {
    inner: Mailbox<T>,
}

impl<T> BoxMailbox<T>
where
    T: Node,
{
    /// Creates an open, empty mailbox.
    pub const fn new() -> Self {
        Self {
            inner: Mailbox::new(),
        }
    }

    /// Creates an open, empty mailbox labelled `name` in log events.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: Mailbox::named(name),
        }
    }

    pub(crate) fn with_name(name: Option<Cow<'static, str>>) -> Self {
        Self {
            inner: Mailbox::with_name(name),
        }
    }

    /// The label given at construction, if any.
    pub fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    /// Append `node` and wake one waiting receiver.
    ///
    /// On a closed mailbox the node comes back inside the [`SendError`].
    pub fn send(&self, node: Box<T>) -> Result<(), SendError<Box<T>>> {
        let ptr = NonNull::from(Box::leak(node));
        // The pointer came from a live box that nothing else can reach.
        match unsafe { self.inner.send(ptr) } {
            Ok(()) => Ok(()),
            Err(_) => Err(SendError(unsafe { Box::from_raw(ptr.as_ptr()) })),
        }
    }

    /// See [`Mailbox::receive`].
    pub fn receive(&self, timeout: Duration) -> Result<Box<T>, MailboxError> {
        self.inner.receive(timeout).map(|ptr| unsafe { reclaim(ptr) })
    }

    /// See [`Mailbox::receive_until`].
    pub fn receive_until(&self, deadline: Instant) -> Result<Box<T>, MailboxError> {
        self.inner.receive_until(deadline).map(|ptr| unsafe { reclaim(ptr) })
    }

    /// See [`Mailbox::try_receive`].
    pub fn try_receive(&self) -> Result<Box<T>, MailboxError> {
        self.inner.try_receive().map(|ptr| unsafe { reclaim(ptr) })
    }

    /// See [`Mailbox::receive_blocking`].
    pub fn receive_blocking(&self) -> Result<Box<T>, MailboxError> {
        self.inner.receive_blocking().map(|ptr| unsafe { reclaim(ptr) })
    }

    /// See [`Mailbox::interrupt`].
    pub fn interrupt(&self) -> Result<(), MailboxError> {
        self.inner.interrupt()
    }

    /// Close the mailbox and return the nodes still queued, oldest first.
    ///
    /// Later calls return an empty vector.
    pub fn close(&self) -> Vec<Box<T>> {
        self.inner.close().map(|ptr| unsafe { reclaim(ptr) }).collect()
    }

    /// Number of nodes currently queued. Always zero after close.
    pub fn letters(&self) -> usize {
        self.inner.letters()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Turns a node pointer handed out by the inner mailbox back into its box.
///
/// # Safety
///
/// `ptr` must have been produced by `Box::leak` in [`BoxMailbox::send`] and
/// must have left the mailbox, so no other pointer to it remains.
unsafe fn reclaim<T>(ptr: NonNull<T>) -> Box<T> {
    unsafe { Box::from_raw(ptr.as_ptr()) }
}

impl<T> Drop for BoxMailbox<T>
where
    T: Node,
{
    fn drop(&mut self) {
        drop(self.close());
    }
}

impl<T> Default for BoxMailbox<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BoxMailbox<T>
where
    T: Node,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxMailbox").field(&self.inner).finish()
    }
}
