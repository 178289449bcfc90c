//! Hostile actors: state, capabilities and the AI tree each one owns.
//!
//! An [`Enemy`] pairs an [`Agent`] (everything that changes tick to tick)
//! with its behavior tree. [`Enemy::update`] is the only place the tree is
//! ticked:
//!
//! 1. copy the clock and a snapshot of the player into the agent,
//! 2. tick the tree against the agent,
//! 3. apply strikes the tree queued to the real player.
mod agent;
mod attack;
mod kind;
mod patrol;

pub use agent::{Agent, AttackOutcome, DamageOutcome, Step, TargetView};
pub use attack::{AttackCycle, AttackPhase, StrikeOutcome};
pub use kind::{EnemyKind, EnemyStats};
pub use patrol::PatrolRoute;

use std::fmt;

use behavior_tree::{Behavior, Status};

use crate::ai::{self, EnemyAi};
use crate::env::PlayerHandle;
use crate::geometry::{Hitbox, Position, Rect, Vec2};

/// Identifier unique within the roster that created the enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Hands out sequential [`EnemyId`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyIdAllocator {
    next: u32,
}

impl EnemyIdAllocator {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> EnemyId {
        let id = EnemyId(self.next.max(1));
        self.next = id.0.wrapping_add(1);
        id
    }
}

pub struct Enemy {
    agent: Agent,
    ai: EnemyAi,
}

impl Enemy {
    /// Creates an enemy running the hostile preset tree.
    pub fn new(id: EnemyId, kind: EnemyKind, position: Position) -> Self {
        Self::with_ai(id, kind, position, ai::presets::hostile())
    }

    pub fn with_ai(id: EnemyId, kind: EnemyKind, position: Position, ai: EnemyAi) -> Self {
        Self {
            agent: Agent::new(id, kind, position),
            ai,
        }
    }

    /// Assigns a patrol route; an empty list leaves the enemy without one.
    #[must_use]
    pub fn with_patrol(mut self, waypoints: Vec<Position>) -> Self {
        self.agent.set_patrol(waypoints);
        self
    }

    pub fn id(&self) -> EnemyId {
        self.agent.id()
    }

    pub fn kind(&self) -> EnemyKind {
        self.agent.kind()
    }

    pub fn position(&self) -> Position {
        self.agent.position()
    }

    pub fn hitbox(&self) -> Hitbox {
        self.agent.hitbox()
    }

    pub fn center(&self) -> Vec2 {
        self.agent.center()
    }

    pub fn health(&self) -> i32 {
        self.agent.health()
    }

    pub fn is_dead(&self) -> bool {
        self.agent.is_dead()
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    /// Damages this enemy; see [`Agent::damage`].
    pub fn damage(&mut self, amount: i32) -> DamageOutcome {
        let outcome = self.agent.damage(amount);
        if outcome == DamageOutcome::Killed {
            tracing::debug!("{} ({}) died", self.id(), self.kind());
        }
        outcome
    }

    /// Runs one AI tick. Dead enemies are not ticked and report `Failure`.
    pub fn update(&mut self, now_ms: u64, player: &mut dyn PlayerHandle) -> Status {
        if self.agent.is_dead() {
            return Status::Failure;
        }

        let target =
            (!player.is_dead()).then(|| TargetView::new(player.position(), player.hitbox()));
        self.agent.observe(now_ms, target);
        let status = self.ai.tick(&mut self.agent);

        let damage = self.agent.take_pending_damage();
        if damage > 0 {
            tracing::debug!(
                "{} ({}) struck the player for {} damage",
                self.id(),
                self.kind(),
                damage
            );
            player.damage(damage);
        }
        status
    }

    /// Pushes this enemy and every overlapping live peer apart.
    pub fn avoid_overlap(&mut self, peers: &mut [Enemy]) {
        for peer in peers {
            self.agent.push_apart(&mut peer.agent);
        }
    }
}

impl fmt::Debug for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enemy").field("agent", &self.agent).finish_non_exhaustive()
    }
}

/// Runs [`Enemy::avoid_overlap`] for every enemy against all the others, in
/// roster order.
pub fn separate(roster: &mut [Enemy]) {
    for index in 0..roster.len() {
        let (before, rest) = roster.split_at_mut(index);
        if let Some((enemy, after)) = rest.split_first_mut() {
            enemy.avoid_overlap(before);
            enemy.avoid_overlap(after);
        }
    }
}

/// Damages every live enemy whose hitbox intersects `area`; returns the
/// number hit.
pub fn strike_area<'a>(
    enemies: impl IntoIterator<Item = &'a mut Enemy>,
    area: Rect,
    amount: i32,
) -> usize {
    enemies
        .into_iter()
        .filter(|enemy| !enemy.is_dead())
        .filter(|enemy| {
            let position = enemy.position();
            enemy.hitbox().at(position.x, position.y).intersects(&area)
        })
        .map(|enemy| enemy.damage(amount))
        .filter(|outcome| *outcome != DamageOutcome::Ignored)
        .count()
}

/// Drops dead enemies, preserving the order of the survivors.
pub fn sweep_dead(roster: &mut Vec<Enemy>) -> usize {
    let before = roster.len();
    roster.retain(|enemy| !enemy.is_dead());
    before - roster.len()
}
