//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing verbose `Box::new(Sequence::new(vec![...]))`, trees are
//! assembled from short functions that all return a boxed node:
//!
//! ```
//! use behavior_tree::builder::{action, condition, selector, sequence};
//! use behavior_tree::{Behavior, Status};
//!
//! struct Guard { alert: bool, shouts: u32 }
//!
//! let tree = selector(vec![
//!     sequence(vec![
//!         condition("alert", |g: &Guard| g.alert),
//!         action("shout", |g: &mut Guard| { g.shouts += 1; Status::Success }),
//!     ]),
//!     action("idle", |_: &mut Guard| Status::Failure),
//! ]);
//!
//! let mut guard = Guard { alert: true, shouts: 0 };
//! assert_eq!(tree.tick(&mut guard), Status::Success);
//! assert_eq!(guard.shouts, 1);
//! ```

use crate::{Action, Behavior, Condition, Selector, Sequence, Status};

/// Boxed node type produced by every builder function.
pub type Node<C> = Box<dyn Behavior<C>>;

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Box::new(Selector::new(children))
}

/// Creates a condition leaf.
#[inline]
pub fn condition<C: 'static>(
    name: &'static str,
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
) -> Node<C> {
    Box::new(Condition::new(name, predicate))
}

/// Creates an action leaf.
#[inline]
pub fn action<C: 'static>(
    name: &'static str,
    operation: impl Fn(&mut C) -> Status + Send + Sync + 'static,
) -> Node<C> {
    Box::new(Action::new(name, operation))
}
