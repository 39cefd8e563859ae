//! # Mailbox
//!
//! A blocking FIFO handoff for intertask communication, built on the
//! intrusive queue in [`crate::linked_list::intrusive`].
//!
//! The same synchronized logic is instantiated in two shapes:
//!
//! - [`EnvelopeMailbox<T>`]: letters of any type travel inside an [`Envelope`].
//! - `Mailbox<MyNode>`: the caller's own type embeds the link and derives `Node`.
//!
//! [`BoxMailbox`] wraps either shape behind a safe, `Box`-based interface.
//!
//! ```
//! use std::ptr::NonNull;
//! use std::time::Duration;
//!
//! use mola_mailbox::mailbox::prelude::*;
//! use mola_mailbox::linked_list::intrusive::envelope::Envelope;
//! use mola_mailbox::linked_list::intrusive::traits::NodeWithData;
//!
//! let mailbox = EnvelopeMailbox::<u32>::new();
//! let mut letter = Envelope::new(42);
//!
//! unsafe { mailbox.send(NonNull::from(&mut letter)).unwrap() };
//! assert_eq!(mailbox.letters(), 1);
//!
//! let received = mailbox.receive(Duration::from_millis(100)).unwrap();
//! assert_eq!(unsafe { *received.as_ref().data() }, 42);
//!
//! assert!(mailbox.close().is_empty());
//! assert_eq!(mailbox.receive(Duration::ZERO), Err(MailboxError::Closed));
//! ```

use crate::linked_list::intrusive::envelope::Envelope;

mod blocking_impl;
mod boxed;
mod builder;
mod error;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::blocking_impl::Mailbox;
    pub use super::boxed::BoxMailbox;
    pub use super::builder::MailboxBuilder;
    pub use super::error::{MailboxError, SendError};
    pub use super::{BoxEnvelopeMailbox, EnvelopeMailbox};
}

pub use blocking_impl::Mailbox;
pub use boxed::BoxMailbox;
pub use builder::MailboxBuilder;
pub use error::{MailboxError, SendError};

/// A mailbox whose nodes are [`Envelope`]s carrying `T`.
pub type EnvelopeMailbox<T> = Mailbox<Envelope<T>>;

/// A boxed-node mailbox whose nodes are [`Envelope`]s carrying `T`.
pub type BoxEnvelopeMailbox<T> = BoxMailbox<Envelope<T>>;
