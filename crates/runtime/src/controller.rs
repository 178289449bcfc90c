//! Player input sources.
//!
//! The runtime asks its controller for a [`PlayerIntent`] once per step. A
//! frontend would translate key state into intents; the headless drivers
//! here either replay a script or steer toward the nearest enemy.
use std::collections::VecDeque;

use game_core::{PlayerHandle, Vec2};

use crate::session::Session;

/// What the player wants to do during one step.
///
/// `dx`/`dy` give a direction; only their sign is used and the session
/// scales them by the player's speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub dx: i32,
    pub dy: i32,
    pub dash: bool,
    pub attack: bool,
    pub start_waves: bool,
}

impl PlayerIntent {
    pub const IDLE: Self = Self {
        dx: 0,
        dy: 0,
        dash: false,
        attack: false,
        start_waves: false,
    };
    pub const START: Self = Self {
        start_waves: true,
        ..Self::IDLE
    };
    pub const ATTACK: Self = Self {
        attack: true,
        ..Self::IDLE
    };

    pub const fn moving(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            ..Self::IDLE
        }
    }

    #[must_use]
    pub const fn with_dash(mut self) -> Self {
        self.dash = true;
        self
    }
}

/// Source of player intents.
pub trait PlayerController {
    fn intent(&mut self, session: &Session) -> PlayerIntent;
}

impl<F> PlayerController for F
where
    F: FnMut(&Session) -> PlayerIntent,
{
    fn intent(&mut self, session: &Session) -> PlayerIntent {
        self(session)
    }
}

/// Never does anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleController;

impl PlayerController for IdleController {
    fn intent(&mut self, _session: &Session) -> PlayerIntent {
        PlayerIntent::IDLE
    }
}

/// Replays a fixed list of intents, one per step, then idles.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    script: VecDeque<PlayerIntent>,
}

impl ScriptedController {
    pub fn new(script: impl IntoIterator<Item = PlayerIntent>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PlayerController for ScriptedController {
    fn intent(&mut self, _session: &Session) -> PlayerIntent {
        self.script.pop_front().unwrap_or(PlayerIntent::IDLE)
    }
}

/// Starts the waves, walks toward the nearest enemy and swings when it is in
/// reach. Dashes to close long gaps.
#[derive(Clone, Copy, Debug)]
pub struct AutopilotController {
    /// Distance beyond which the autopilot dashes instead of walking.
    pub dash_beyond: f32,
}

impl Default for AutopilotController {
    fn default() -> Self {
        Self { dash_beyond: 240.0 }
    }
}

impl PlayerController for AutopilotController {
    fn intent(&mut self, session: &Session) -> PlayerIntent {
        let player = session.player();
        if player.is_dead() {
            return PlayerIntent::IDLE;
        }
        if !session.spawner().waves_started() {
            return PlayerIntent::START;
        }

        let here = player.hitbox.center_at(player.position);
        let nearest = session
            .live_enemies()
            .map(|enemy| (enemy, enemy.center().distance(here)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b));
        let Some((target, distance)) = nearest else {
            return PlayerIntent::IDLE;
        };

        let target_box = target.hitbox().at(target.position().x, target.position().y);
        if session.attack_area().intersects(&target_box) {
            return PlayerIntent::ATTACK;
        }

        let (dx, dy) = direction(here, target.center());
        let intent = PlayerIntent::moving(dx, dy);
        if distance > self.dash_beyond {
            intent.with_dash()
        } else {
            intent
        }
    }
}

/// Unit grid direction from `from` toward `to`, ignoring sub-unit offsets.
fn direction(from: Vec2, to: Vec2) -> (i32, i32) {
    let delta = to - from;
    let axis = |value: f32| {
        if value.abs() < 1.0 {
            0
        } else {
            value.signum() as i32
        }
    };
    (axis(delta.x), axis(delta.y))
}
