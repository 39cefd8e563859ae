use std::borrow::Cow;
use std::fmt;
use std::ptr::NonNull;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace};

use crate::linked_list::intrusive::{iter::Drained, queue::LinkedQueue, traits::Node};

use super::error::MailboxError;

/// Everything the mailbox lock protects.
struct State<T: Node> {
    queue: LinkedQueue<T>,
    closed: bool,
    interrupted: bool,
}

/// A blocking FIFO handoff between threads.
///
/// Producers [`send`](Self::send) caller-owned nodes, consumers
/// [`receive`](Self::receive) them in the order they were sent. The mailbox
/// never allocates or frees node memory: it only links the nodes it is given
/// and hands them back through `receive` or [`close`](Self::close).
///
/// A single mutex serializes every operation. Only the receive family
/// suspends the calling thread, and only while the lock is released.
pub struct Mailbox<T: Node> {
    state: Mutex<State<T>>,
    available: Condvar,
    name: Option<Cow<'static, str>>,
}

impl<T> Mailbox<T>
where
    T: Node,
{
    /// Creates an open, empty mailbox.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State {
                queue: LinkedQueue::new(),
                closed: false,
                interrupted: false,
            }),
            available: Condvar::new(),
            name: None,
        }
    }

    /// Creates an open, empty mailbox labelled `name` in log events.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub(crate) fn with_name(name: Option<Cow<'static, str>>) -> Self {
        Self {
            name,
            ..Self::new()
        }
    }

    /// The label given at construction, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn label(&self) -> &str {
        self.name().unwrap_or("")
    }

    /// Append `node` to the mailbox and wake one waiting receiver.
    ///
    /// Fails with [`MailboxError::Closed`] once the mailbox is closed, in which
    /// case the node is left untouched and still belongs to the caller.
    ///
    /// # Safety
    ///
    /// `node` must point to a valid node that is not linked into any other
    /// mailbox or queue. Until it comes back out through a receive or through
    /// the chain returned by [`close`](Self::close), the caller must not move,
    /// free, or mutate it, and must keep it alive for as long as the mailbox
    /// may hand it out.
    pub unsafe fn send(&self, node: NonNull<T>) -> Result<(), MailboxError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(MailboxError::Closed);
        }
        unsafe { state.queue.enqueue(node) };
        let letters = state.queue.count();
        drop(state);

        self.available.notify_one();
        trace!(mailbox = self.label(), letters, "letter sent");
        Ok(())
    }

    /// Wait up to `timeout` for the next letter.
    ///
    /// At entry and after every wake-up the checks run in a fixed order:
    /// closed, then a pending interrupt (which is consumed), then a queued
    /// letter, then the deadline. A zero timeout checks once without waiting.
    /// A timeout too large to express as an [`Instant`] waits without a deadline.
    pub fn receive(&self, timeout: Duration) -> Result<NonNull<T>, MailboxError> {
        self.receive_inner(Instant::now().checked_add(timeout))
    }

    /// Wait until `deadline` for the next letter.
    ///
    /// Same checks as [`receive`](Self::receive); a deadline in the past checks once.
    pub fn receive_until(&self, deadline: Instant) -> Result<NonNull<T>, MailboxError> {
        self.receive_inner(Some(deadline))
    }

    /// Take the next letter if one is queued, without waiting.
    pub fn try_receive(&self) -> Result<NonNull<T>, MailboxError> {
        self.receive(Duration::ZERO)
    }

    /// Wait for the next letter with no deadline.
    ///
    /// Still returns early with [`MailboxError::Closed`] or
    /// [`MailboxError::Interrupted`].
    pub fn receive_blocking(&self) -> Result<NonNull<T>, MailboxError> {
        self.receive_inner(None)
    }

    fn receive_inner(&self, deadline: Option<Instant>) -> Result<NonNull<T>, MailboxError> {
        let mut state = self.state.lock();
        loop {
            if state.closed {
                return Err(MailboxError::Closed);
            }
            if state.interrupted {
                state.interrupted = false;
                debug!(mailbox = self.label(), "receive interrupted");
                return Err(MailboxError::Interrupted);
            }
            if let Some(node) = state.queue.dequeue() {
                trace!(mailbox = self.label(), letters = state.queue.count(), "letter received");
                return Ok(node);
            }
            match deadline {
                Some(deadline) => {
                    if Instant::now() >= deadline {
                        trace!(mailbox = self.label(), "receive timed out");
                        return Err(MailboxError::Timeout);
                    }
                    // Spurious and stolen wake-ups loop back here with the
                    // same deadline, so they cannot extend the wait.
                    self.available.wait_until(&mut state, deadline);
                }
                None => self.available.wait(&mut state),
            }
        }
    }

    /// Wake one blocked receiver, or cancel the next receive, with
    /// [`MailboxError::Interrupted`].
    ///
    /// Only one interrupt is tracked at a time: a second call before a receive
    /// consumes the first fails with [`MailboxError::AlreadyInterrupted`].
    pub fn interrupt(&self) -> Result<(), MailboxError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(MailboxError::Closed);
        }
        if state.interrupted {
            return Err(MailboxError::AlreadyInterrupted);
        }
        state.interrupted = true;
        drop(state);

        self.available.notify_one();
        debug!(mailbox = self.label(), "interrupt raised");
        Ok(())
    }

    /// Close the mailbox for good and hand back every letter still queued.
    ///
    /// Blocked receivers wake up with [`MailboxError::Closed`], and so does
    /// every later send, receive, or interrupt. Only the first call drains;
    /// later calls return an empty chain.
    pub fn close(&self) -> Drained<T> {
        let mut state = self.state.lock();
        if state.closed {
            return Drained::empty();
        }
        state.closed = true;
        state.interrupted = false;
        let drained = state.queue.drain();
        drop(state);

        self.available.notify_all();
        debug!(mailbox = self.label(), drained = drained.len(), "mailbox closed");
        drained
    }

    /// Number of letters currently queued. Always zero after close.
    pub fn letters(&self) -> usize {
        self.state.lock().queue.count()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

impl<T> Default for Mailbox<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Mailbox<T>
where
    T: Node,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Mailbox")
            .field("name", &self.name)
            .field("letters", &state.queue.count())
            .field("closed", &state.closed)
            .field("interrupted", &state.interrupted)
            .finish()
    }
}
