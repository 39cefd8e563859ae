use core::ptr::NonNull;

/// A trait for a link in a linked list.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the previous pointer in the linked list
    fn prev(&self) -> Option<NonNull<Self::Target>>;

    /// Set the previous pointer in the linked list
    fn set_prev(&mut self, prev: Option<NonNull<Self::Target>>);
}

/// A trait for a node that can be linked into a [`LinkedQueue`](super::queue::LinkedQueue).
///
/// Nodes point at other nodes of the same type, so the link target is always `Self`.
/// Implement it with `#[derive(Node)]` on a struct that embeds a
/// [`DoubleLink<Self>`](super::link::DoubleLink) marked with `#[node(link)]`.
///
/// # Safety
///
/// Queues dereference whatever the link accessors return from safe code.
/// `next` and `prev` must return exactly the pointer most recently passed to
/// `set_next` and `set_prev` (`None` before the first call), and must not be
/// affected by anything else. Delegating to an embedded [`DoubleLink`], as the
/// derive does, satisfies this.
///
/// An implementation has to be written as `unsafe impl`:
///
/// ```compile_fail
/// use core::ptr::NonNull;
/// use mola_mailbox::linked_list::intrusive::traits::{Link, LinkWithPrev, Node};
///
/// struct Loose;
///
/// impl Link for Loose {
///     type Target = Self;
///     fn next(&self) -> Option<NonNull<Self>> { None }
///     fn set_next(&mut self, _next: Option<NonNull<Self>>) {}
/// }
///
/// impl LinkWithPrev for Loose {
///     fn prev(&self) -> Option<NonNull<Self>> { None }
///     fn set_prev(&mut self, _prev: Option<NonNull<Self>>) {}
/// }
///
/// impl Node for Loose {}
/// ```
///
/// [`DoubleLink`]: super::link::DoubleLink
pub unsafe trait Node: LinkWithPrev<Target = Self> {
    /// Clear both pointers so the node can be linked somewhere else.
    #[inline]
    fn unlink(&mut self) {
        self.set_next(None);
        self.set_prev(None);
    }

    /// Whether the node still carries a pointer to a neighbour.
    ///
    /// A node that is the only element of a queue is linked but has no
    /// neighbours, so this is a hint for debugging, not a membership test.
    #[inline]
    fn is_linked(&self) -> bool {
        self.next().is_some() || self.prev().is_some()
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
