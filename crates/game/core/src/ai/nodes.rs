//! Leaf nodes of the enemy AI.
//!
//! Conditions only read the [`Agent`]; actions call one of its capabilities
//! and translate the outcome into a [`Status`]:
//!
//! | Node               | Success               | Running                 | Failure              |
//! |--------------------|-----------------------|-------------------------|----------------------|
//! | `AttackPlayer`     | struck / cooling down | winding up              | dead or out of range |
//! | `MoveTowardPlayer` | already on target     | stepped or frozen       | dead or no player    |
//! | `FollowPatrolPath` | waypoint reached      | stepped or frozen       | dead or no route     |

use behavior_tree::{Behavior, Status};

use crate::enemy::{Agent, AttackOutcome, Step};

/// Player alive and closer than the vision range.
pub struct CanSeePlayer;

impl Behavior<Agent> for CanSeePlayer {
    fn tick(&self, agent: &mut Agent) -> Status {
        Status::from_bool(agent.can_see_player())
    }
}

/// Player closer than the attack range.
pub struct InAttackRange;

impl Behavior<Agent> for InAttackRange {
    fn tick(&self, agent: &mut Agent) -> Status {
        Status::from_bool(agent.is_in_attack_range())
    }
}

/// Enemy has a patrol route assigned.
pub struct HasPatrolPath;

impl Behavior<Agent> for HasPatrolPath {
    fn tick(&self, agent: &mut Agent) -> Status {
        Status::from_bool(agent.has_patrol_path())
    }
}

pub struct AttackPlayer;

impl Behavior<Agent> for AttackPlayer {
    fn tick(&self, agent: &mut Agent) -> Status {
        match agent.attack() {
            AttackOutcome::Struck { damage } => {
                tracing::debug!("{} strikes for {}", agent.id(), damage);
                Status::Success
            }
            AttackOutcome::CoolingDown => Status::Success,
            AttackOutcome::WindingUp => Status::Running,
            AttackOutcome::Unavailable => Status::Failure,
        }
    }
}

pub struct MoveTowardPlayer;

impl Behavior<Agent> for MoveTowardPlayer {
    fn tick(&self, agent: &mut Agent) -> Status {
        step_status(agent.chase_player())
    }
}

pub struct FollowPatrolPath;

impl Behavior<Agent> for FollowPatrolPath {
    fn tick(&self, agent: &mut Agent) -> Status {
        let status = step_status(agent.follow_patrol_path());
        if status.is_success() {
            tracing::debug!("{} reached a patrol waypoint", agent.id());
        }
        status
    }
}

fn step_status(step: Step) -> Status {
    match step {
        Step::Arrived => Status::Success,
        Step::Moved | Step::Frozen => Status::Running,
        Step::Unable => Status::Failure,
    }
}
