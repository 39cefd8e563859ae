//! # Intrusive FIFO Queue
//!
//! This module provides the list half of a mailbox: a doubly linked FIFO
//! queue whose links live inside the queued values themselves.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits, such as `Link`, `LinkWithPrev`, `Node` and `NodeWithData`.
//! - [`link::DoubleLink`]: The pair of pointers a node embeds.
//! - [`queue::LinkedQueue`]: The queue itself, with O(1) enqueue, dequeue and drain.
//! - [`iter::Drained`]: A chain detached from a queue, walked by the caller to reclaim nodes.
//! - [`envelope::Envelope`]: A wrapper node for payloads that do not embed a link.
//!
//! ## Safety
//!
//! The queue never allocates. The user of this module is responsible for upholding several invariants:
//!
//! - Nodes must outlive the queue they are in.
//! - A node must not be in two queues at the same time.
//! - A linked node must not be moved, and its link must not be touched by anyone but the queue.
//! - When iterating, the queue must not be modified.

pub mod traits;
pub mod link;
pub mod queue;
pub mod iter;
pub mod envelope;

pub use mola_mailbox_derive::Node;
