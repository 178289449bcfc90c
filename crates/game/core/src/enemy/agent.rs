//! Mutable state of one enemy plus the capabilities its AI calls.
//!
//! The behavior tree is ticked against an [`Agent`] rather than the owning
//! [`super::Enemy`], so the tree never needs a reference back to the entity
//! that owns it. Everything a leaf needs from the outside world is copied in
//! by [`Agent::observe`] before the tick; everything it wants to do to the
//! outside world (strikes on the player) is queued and drained afterwards.

use crate::geometry::{Hitbox, Position, Vec2};

use super::attack::{AttackCycle, StrikeOutcome};
use super::kind::{EnemyKind, EnemyStats};
use super::patrol::PatrolRoute;
use super::EnemyId;

/// Per-tick snapshot of the live player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetView {
    pub position: Position,
    pub hitbox: Hitbox,
}

impl TargetView {
    pub const fn new(position: Position, hitbox: Hitbox) -> Self {
        Self { position, hitbox }
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox.center_at(self.position)
    }
}

/// What happened when the agent tried to attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Damage was queued for the player.
    Struck { damage: i32 },
    WindingUp,
    CoolingDown,
    /// Dead, no target, or target out of range.
    Unavailable,
}

/// What happened when the agent tried to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Position changed; the destination is not reached yet.
    Moved,
    /// Already at (or just reached) the destination.
    Arrived,
    /// Movement is suppressed by an attack windup.
    Frozen,
    /// Dead, or nothing to move towards.
    Unable,
}

/// Result of [`Agent::damage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    Ignored,
    Wounded,
    Killed,
}

#[derive(Clone, Debug)]
pub struct Agent {
    id: EnemyId,
    kind: EnemyKind,
    stats: EnemyStats,
    position: Position,
    health: i32,
    dead: bool,
    patrol: Option<PatrolRoute>,
    attack: AttackCycle,
    now_ms: u64,
    target: Option<TargetView>,
    pending_damage: i32,
    /// Sub-unit part of past steps not yet committed to `position`.
    carry: Vec2,
}

impl Agent {
    pub fn new(id: EnemyId, kind: EnemyKind, position: Position) -> Self {
        let stats = kind.stats();
        Self {
            id,
            kind,
            stats,
            position,
            health: stats.max_health,
            dead: false,
            patrol: None,
            attack: AttackCycle::new(stats.windup_ms, stats.cooldown_ms),
            now_ms: 0,
            target: None,
            pending_damage: 0,
            carry: Vec2::ZERO,
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn stats(&self) -> &EnemyStats {
        &self.stats
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn hitbox(&self) -> Hitbox {
        self.stats.hitbox
    }

    pub fn center(&self) -> Vec2 {
        self.stats.hitbox.center_at(self.position)
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn patrol(&self) -> Option<&PatrolRoute> {
        self.patrol.as_ref()
    }

    pub fn attack_cycle(&self) -> &AttackCycle {
        &self.attack
    }

    pub fn target(&self) -> Option<&TargetView> {
        self.target.as_ref()
    }

    pub fn is_winding_up(&self) -> bool {
        self.attack.is_winding_up(self.now_ms)
    }

    /// Replaces the patrol route; an empty list removes it.
    pub fn set_patrol(&mut self, waypoints: Vec<Position>) {
        self.patrol = PatrolRoute::new(waypoints);
    }

    /// Loads the tick's inputs: the clock and the player, if alive.
    pub fn observe(&mut self, now_ms: u64, target: Option<TargetView>) {
        self.now_ms = now_ms;
        self.target = target;
        let in_range = self.is_in_attack_range();
        self.attack.observe(now_ms, in_range);
    }

    /// Center-to-center distance to the player, if there is one.
    pub fn distance_to_player(&self) -> Option<f32> {
        self.target.map(|target| self.center().distance(target.center()))
    }

    pub fn can_see_player(&self) -> bool {
        !self.dead
            && self
                .distance_to_player()
                .is_some_and(|distance| distance < self.stats.vision_range)
    }

    pub fn is_in_attack_range(&self) -> bool {
        !self.dead
            && self
                .distance_to_player()
                .is_some_and(|distance| distance < self.stats.attack_range)
    }

    pub fn has_patrol_path(&self) -> bool {
        self.patrol.is_some()
    }

    /// Attempts one strike on the player, gated by the attack cycle.
    pub fn attack(&mut self) -> AttackOutcome {
        if !self.is_in_attack_range() {
            return AttackOutcome::Unavailable;
        }
        match self.attack.try_strike(self.now_ms) {
            StrikeOutcome::Struck => {
                self.pending_damage = self.pending_damage.saturating_add(self.stats.damage);
                AttackOutcome::Struck {
                    damage: self.stats.damage,
                }
            }
            StrikeOutcome::WindingUp => AttackOutcome::WindingUp,
            StrikeOutcome::CoolingDown => AttackOutcome::CoolingDown,
        }
    }

    /// Steps towards `target` (compared against this agent's position).
    ///
    /// Does not consult collision; overlapping enemies are pushed apart by
    /// the roster's separation pass instead.
    pub fn move_towards(&mut self, target: Position) -> Step {
        self.step_along(target.to_vec2() - self.position.to_vec2())
    }

    /// Steps so that this agent's center approaches the player's center.
    pub fn chase_player(&mut self) -> Step {
        match self.target {
            Some(target) => self.step_along(target.center() - self.center()),
            None => Step::Unable,
        }
    }

    /// Walks the patrol route, advancing past waypoints as they are reached.
    pub fn follow_patrol_path(&mut self) -> Step {
        let Some(waypoint) = self.patrol.as_ref().map(PatrolRoute::current) else {
            return Step::Unable;
        };

        match self.move_towards(waypoint) {
            step @ (Step::Frozen | Step::Unable) => step,
            step => {
                let remaining = self.position.to_vec2().distance(waypoint.to_vec2());
                if remaining <= PatrolRoute::ARRIVAL_RADIUS {
                    if let Some(route) = self.patrol.as_mut() {
                        route.advance();
                    }
                    Step::Arrived
                } else {
                    step
                }
            }
        }
    }

    /// Applies incoming damage. Dead agents and non-positive amounts are
    /// ignored; the transition to dead happens exactly once.
    pub fn damage(&mut self, amount: i32) -> DamageOutcome {
        if amount <= 0 || self.dead {
            return DamageOutcome::Ignored;
        }
        self.health = self.health.saturating_sub(amount).max(0);
        if self.health > 0 {
            return DamageOutcome::Wounded;
        }
        self.dead = true;
        self.attack.reset();
        self.pending_damage = 0;
        DamageOutcome::Killed
    }

    /// Drains damage queued by strikes during the last tick.
    pub fn take_pending_damage(&mut self) -> i32 {
        std::mem::take(&mut self.pending_damage)
    }

    /// Pushes `self` and `other` apart when their centers are closer than
    /// this agent's hitbox width. Each moves half the overlap depth.
    pub fn push_apart(&mut self, other: &mut Agent) {
        if self.dead || other.dead {
            return;
        }
        let threshold = self.stats.hitbox.width as f32;
        let offset = other.center() - self.center();
        let distance = offset.length();
        if distance >= threshold {
            return;
        }

        let direction = offset.normalized().unwrap_or(Vec2::new(1.0, 0.0));
        let (dx, dy) = direction.scale((threshold - distance) / 2.0).round();
        self.position = self.position.offset(-dx, -dy);
        other.position = other.position.offset(dx, dy);
    }

    fn step_along(&mut self, delta: Vec2) -> Step {
        if self.dead {
            return Step::Unable;
        }
        if self.is_winding_up() {
            return Step::Frozen;
        }
        let distance = delta.length();
        let Some(direction) = delta.normalized() else {
            return Step::Arrived;
        };

        if self.stats.speed >= distance {
            self.carry = Vec2::ZERO;
            let (dx, dy) = delta.round();
            if dx == 0 && dy == 0 {
                return Step::Arrived;
            }
            self.position = self.position.offset(dx, dy);
            return Step::Moved;
        }

        let travel = direction.scale(self.stats.speed) + self.carry;
        let (dx, dy) = (whole_units(travel.x), whole_units(travel.y));
        self.carry = Vec2::new(travel.x - dx as f32, travel.y - dy as f32);
        self.position = self.position.offset(dx, dy);
        Step::Moved
    }
}

/// Whole-unit part of `value`, truncated toward zero. The nudge keeps float
/// error such as 0.99999 from dropping a full unit.
fn whole_units(value: f32) -> i32 {
    (value + value.signum() * 1e-4).trunc() as i32
}
