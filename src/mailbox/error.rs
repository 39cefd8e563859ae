use core::fmt;

use thiserror::Error;

/// Why a mailbox operation did not complete.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailboxError {
    /// The mailbox was closed and accepts no more work.
    #[error("mailbox is closed")]
    Closed,

    /// No letter arrived before the deadline.
    #[error("timed out waiting for a letter")]
    Timeout,

    /// A pending interrupt cancelled this receive.
    #[error("receive was interrupted")]
    Interrupted,

    /// An earlier interrupt has not been consumed by a receive yet.
    #[error("an interrupt is already pending")]
    AlreadyInterrupted,
}

impl MailboxError {
    /// `true` for [`MailboxError::Closed`].
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Whether retrying the same call later can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Interrupted)
    }
}

/// Returned by [`BoxMailbox::send`](super::boxed::BoxMailbox::send) when the
/// mailbox is closed. Carries the rejected node back to the caller.
#[derive(Error, PartialEq, Eq)]
#[error("mailbox is closed")]
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    /// Takes back the node that could not be sent.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SendError { .. }")
    }
}

impl<T> From<SendError<T>> for MailboxError {
    fn from(_: SendError<T>) -> Self {
        MailboxError::Closed
    }
}
