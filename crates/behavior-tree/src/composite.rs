//! Composite behavior nodes.
//!
//! Composite nodes own an ordered list of children where insertion order is
//! priority order: [`Sequence`] (AND logic) and [`Selector`] (OR logic). Both
//! short-circuit on `Running`, so a long-running child keeps the rest of the
//! list from being evaluated until it settles.

use crate::{Behavior, Status};

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        Self { children }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; construction rejects empty child lists.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                other => return other,
            }
        }
        Status::Success
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately**
///   and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(!children.is_empty(), "Selector must have at least one child");
        Self { children }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; construction rejects empty child lists.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Failure => continue,
                other => return other,
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Condition};

    #[derive(Default)]
    struct Trace {
        calls: Vec<&'static str>,
    }

    fn leaf(name: &'static str, status: Status) -> Box<dyn Behavior<Trace>> {
        Box::new(Action::new(name, move |ctx: &mut Trace| {
            ctx.calls.push(name);
            status
        }))
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new(vec![
            leaf("a", Status::Success),
            leaf("b", Status::Success),
        ]);

        let mut ctx = Trace::default();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.calls, ["a", "b"]);
    }

    #[test]
    fn sequence_stops_on_failure() {
        let seq = Sequence::new(vec![
            leaf("a", Status::Success),
            leaf("b", Status::Failure),
            leaf("c", Status::Success),
        ]);

        let mut ctx = Trace::default();
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.calls, ["a", "b"]);
    }

    #[test]
    fn sequence_stops_on_running() {
        let seq = Sequence::new(vec![
            leaf("a", Status::Running),
            leaf("b", Status::Success),
        ]);

        let mut ctx = Trace::default();
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.calls, ["a"]);
    }

    #[test]
    fn selector_stops_on_running() {
        let sel = Selector::new(vec![
            leaf("a", Status::Failure),
            leaf("b", Status::Running),
            leaf("c", Status::Success),
        ]);

        let mut ctx = Trace::default();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.calls, ["a", "b"]);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let sel = Selector::new(vec![
            leaf("a", Status::Failure),
            leaf("b", Status::Success),
            leaf("c", Status::Success),
        ]);

        let mut ctx = Trace::default();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.calls, ["a", "b"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new(vec![
            Box::new(Condition::new("no", |_: &Trace| false)) as Box<dyn Behavior<Trace>>,
            leaf("b", Status::Failure),
        ]);

        let mut ctx = Trace::default();
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.calls, ["b"]);
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn empty_selector_is_rejected() {
        let _ = Selector::<Trace>::new(Vec::new());
    }
}
