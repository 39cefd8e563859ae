use std::borrow::Cow;

use crate::linked_list::intrusive::traits::Node;

use super::blocking_impl::Mailbox;
use super::boxed::BoxMailbox;

/// Builder for [`Mailbox`] and [`BoxMailbox`].
#[derive(Debug, Clone, Default)]
pub struct MailboxBuilder {
    name: Option<Cow<'static, str>>,
}

impl MailboxBuilder {
    /// Create a new builder with default settings.
    ///
    /// # Returns
    /// A new builder instance
    pub fn new() -> Self {
        Self { name: None }
    }

    /// Set the label attached to the mailbox's log events.
    ///
    /// # Arguments
    /// * `name` - The label, usually the role of the mailbox such as `"inbound"`
    ///
    /// # Returns
    /// The builder instance for method chaining
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build a mailbox for caller-managed node pointers.
    pub fn build<T: Node>(self) -> Mailbox<T> {
        Mailbox::with_name(self.name)
    }

    /// Build a mailbox for boxed nodes.
    pub fn build_boxed<T: Node>(self) -> BoxMailbox<T> {
        BoxMailbox::with_name(self.name)
    }
}
