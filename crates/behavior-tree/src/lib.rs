//! Lightweight behavior tree library for fixed-timestep real-time games.
//!
//! The tree is ticked once per simulation step and answers with a
//! [`Status`]. Nodes carry no tick-to-tick memory: an action that needs several
//! frames reports [`Status::Running`] and re-derives its progress from the
//! context next tick.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Leaf nodes: [`Condition`], [`Action`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - [`builder`]: boxed constructors for assembling trees

pub mod builder;
pub mod composite;
pub mod node;
pub mod status;

pub use builder::Node;
pub use composite::{Selector, Sequence};
pub use node::{Action, Behavior, Condition};
pub use status::Status;
