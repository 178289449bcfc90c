//! Complete AI trees for enemies.
//!
//! ```text
//! hostile()
//!   └─ Selector
//!       ├─ attack_when_in_range()   CanSeePlayer → InAttackRange → AttackPlayer
//!       ├─ chase_when_visible()     CanSeePlayer → MoveTowardPlayer
//!       └─ patrol()                 HasPatrolPath → FollowPatrolPath
//! ```
//!
//! The selector is purely reactive: every tick starts again from the top, so
//! an enemy whose player steps out of attack range switches to chasing on
//! the very next tick.

use behavior_tree::Behavior;
use behavior_tree::builder::{selector, sequence};

use crate::enemy::Agent;

use super::EnemyAi;
use super::nodes::{
    AttackPlayer, CanSeePlayer, FollowPatrolPath, HasPatrolPath, InAttackRange, MoveTowardPlayer,
};

/// The tree every enemy kind runs.
pub fn hostile() -> EnemyAi {
    selector(vec![attack_when_in_range(), chase_when_visible(), patrol()])
}

/// Strike when the player is visible and within reach.
pub fn attack_when_in_range() -> EnemyAi {
    sequence(vec![leaf(CanSeePlayer), leaf(InAttackRange), leaf(AttackPlayer)])
}

/// Close the distance to a visible player.
pub fn chase_when_visible() -> EnemyAi {
    sequence(vec![leaf(CanSeePlayer), leaf(MoveTowardPlayer)])
}

/// Walk the assigned route, if any.
pub fn patrol() -> EnemyAi {
    sequence(vec![leaf(HasPatrolPath), leaf(FollowPatrolPath)])
}

fn leaf(node: impl Behavior<Agent> + 'static) -> EnemyAi {
    Box::new(node)
}
