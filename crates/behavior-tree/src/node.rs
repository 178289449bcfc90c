//! Node trait and leaf nodes.
//!
//! [`Behavior`] is implemented by every node in a tree. Leaves come in two
//! flavours that differ only in what they are allowed to do with the context:
//!
//! - [`Condition`] wraps a read-only predicate and maps it onto
//!   `Success`/`Failure`
//! - [`Action`] wraps an effectful operation that reports its own status

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
///
/// Nodes are immutable once built: all per-tick state lives in the context,
/// which keeps a tree re-entrant and safe to share read-only.
pub trait Behavior<C>: Send + Sync {
    /// Evaluates this node against the entity context `ctx`.
    ///
    /// Conditions only read the context; actions may mutate it.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Lets `Box<dyn Behavior<C>>` be used wherever a node is expected.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;
type Operation<C> = Box<dyn Fn(&mut C) -> Status + Send + Sync>;

/// Leaf node wrapping a zero-argument predicate over the context.
pub struct Condition<C> {
    name: &'static str,
    predicate: Predicate<C>,
}

impl<C> Condition<C> {
    /// Creates a condition node. `name` only shows up in logs and `Debug`.
    pub fn new(name: &'static str, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
        }
    }

    /// Label given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

impl<C> std::fmt::Debug for Condition<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Condition").field("name", &self.name).finish()
    }
}

/// Leaf node wrapping a zero-argument operation that may mutate the context.
pub struct Action<C> {
    name: &'static str,
    operation: Operation<C>,
}

impl<C> Action<C> {
    /// Creates an action node. `name` only shows up in logs and `Debug`.
    pub fn new(
        name: &'static str,
        operation: impl Fn(&mut C) -> Status + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            operation: Box::new(operation),
        }
    }

    /// Label given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        (self.operation)(ctx)
    }
}

impl<C> std::fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: i32,
    }

    #[test]
    fn condition_maps_predicate() {
        let positive = Condition::new("positive", |ctx: &Counter| ctx.value > 0);

        assert_eq!(positive.tick(&mut Counter { value: 3 }), Status::Success);
        assert_eq!(positive.tick(&mut Counter { value: -3 }), Status::Failure);
    }

    #[test]
    fn action_mutates_context_and_reports_status() {
        let bump = Action::new("bump", |ctx: &mut Counter| {
            ctx.value += 1;
            if ctx.value >= 2 {
                Status::Success
            } else {
                Status::Running
            }
        });

        let mut ctx = Counter { value: 0 };
        assert_eq!(bump.tick(&mut ctx), Status::Running);
        assert_eq!(bump.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn boxed_node_delegates() {
        let node: Box<dyn Behavior<Counter>> =
            Box::new(Condition::new("zero", |ctx: &Counter| ctx.value == 0));
        assert_eq!(node.tick(&mut Counter { value: 0 }), Status::Success);
        assert_eq!(Condition::new("x", |_: &Counter| true).name(), "x");
    }
}
