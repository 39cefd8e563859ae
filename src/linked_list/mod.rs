//! An intrusive linked list implementation.
//!
//! In an intrusive linked list, the links are stored directly in the data structure
//! that is being linked. This means that the data structure must have a field that
//! is a `DoubleLink`. This is in contrast to a non-intrusive linked list, where the
//! nodes are allocated separately from the data structure.
//!
//! # Examples
//!
//! ```
//! use mola_mailbox::linked_list::intrusive::{
//!     link::DoubleLink,
//!     queue::LinkedQueue,
//!     traits::NodeWithData,
//!     Node,
//! };
//! use core::ptr::NonNull;
//!
//! #[derive(Node)]
//! struct Order {
//!     #[node(link)]
//!     link: DoubleLink<Self>,
//!     #[node(data)]
//!     quantity: u32,
//! }
//!
//! let mut orders: Vec<Order> = (1..=3)
//!     .map(|quantity| Order { link: DoubleLink::new(), quantity })
//!     .collect();
//!
//! let mut queue = LinkedQueue::<Order>::new();
//! for order in orders.iter_mut() {
//!     unsafe { queue.enqueue(NonNull::from(order)) };
//! }
//!
//! assert_eq!(queue.count(), 3);
//!
//! let values: Vec<u32> = queue
//!     .drain()
//!     .map(|order| unsafe { *order.as_ref().data() })
//!     .collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```
pub mod intrusive;
