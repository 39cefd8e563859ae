//! Blocking FIFO mailboxes over intrusive, caller-owned nodes.
//!
//! - [`linked_list`]: the intrusive queue and the `Node` derive.
//! - [`mailbox`]: the synchronized mailbox built on top of it.

pub mod linked_list;
pub mod mailbox;

pub use linked_list::intrusive::Node;
pub use linked_list::intrusive::{envelope::Envelope, link::DoubleLink, traits::Node};
pub use mailbox::{BoxEnvelopeMailbox, BoxMailbox, EnvelopeMailbox, Mailbox, MailboxBuilder, MailboxError, SendError};
