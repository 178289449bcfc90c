//! One play session: the world, the encounter and the player.
use game_core::movement::{dash, try_move};
use game_core::{
    Clock, CollisionQuery, Enemy, GameConfig, Hitbox, ManualClock, MessageSink, MobManager,
    PlayerBody, PlayerHandle, Rect, WaveSpawner,
};

use crate::config::{PlayerConfig, RuntimeConfig};
use crate::controller::PlayerIntent;
use crate::error::Result;
use crate::map::MapLayout;
use crate::messages::MessageLog;

/// Player collision box relative to its position.
pub const PLAYER_HITBOX: Hitbox = Hitbox::new(8, 8, 32, 32);

/// Owns every piece of simulation state and advances it one step at a time.
///
/// Within a step the player's intent is applied first, then the wave
/// spawner (transitions before AI ticks), then the level mobs of the active
/// map.
#[derive(Debug)]
pub struct Session {
    game: GameConfig,
    player_config: PlayerConfig,
    layout: MapLayout,
    spawner: WaveSpawner,
    mobs: MobManager,
    player: PlayerBody,
    clock: ManualClock,
    messages: MessageLog,
    steps: u64,
    next_attack_at_ms: u64,
    next_dash_at_ms: u64,
    player_fell: bool,
}

impl Session {
    pub fn new(config: &RuntimeConfig, layout: MapLayout) -> Result<Self> {
        let spawner = WaveSpawner::new(config.game.clone(), config.spawner.clone())?;

        let mut mobs = MobManager::new();
        mobs.populate(layout.id, layout.mobs.iter().cloned());

        let player = PlayerBody::new(
            layout.player_start,
            PLAYER_HITBOX,
            config.player.max_health,
        );

        tracing::info!(
            "Session ready on {} with {} level mobs",
            layout.id,
            mobs.total()
        );

        Ok(Self {
            game: config.game.clone(),
            player_config: config.player.clone(),
            layout,
            spawner,
            mobs,
            player,
            clock: ManualClock::starting_at(0),
            messages: MessageLog::new(config.message_capacity),
            steps: 0,
            next_attack_at_ms: 0,
            next_dash_at_ms: 0,
            player_fell: false,
        })
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn game(&self) -> &GameConfig {
        &self.game
    }

    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn spawner(&self) -> &WaveSpawner {
        &self.spawner
    }

    /// Level mobs of the active map.
    pub fn mobs(&self) -> &[Enemy] {
        self.mobs.mobs(self.layout.id)
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Every enemy the player can currently fight: wave enemies, the boss
    /// and level mobs.
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.spawner
            .enemies()
            .iter()
            .chain(self.spawner.boss())
            .chain(self.mobs())
            .filter(|enemy| !enemy.is_dead())
    }

    /// Area covered by a player attack.
    pub fn attack_area(&self) -> Rect {
        let body = self
            .player
            .hitbox
            .at(self.player.position.x, self.player.position.y);
        let reach = self.player_config.attack_reach;
        Rect::new(
            body.x - reach,
            body.y - reach,
            body.width + 2 * reach,
            body.height + 2 * reach,
        )
    }

    /// The run ends when the player falls or the boss is defeated.
    pub fn is_over(&self) -> bool {
        self.player.is_dead() || self.spawner.boss_defeated()
    }

    /// Advances the simulation to `now_ms` by one step.
    pub fn step(&mut self, now_ms: u64, intent: PlayerIntent) {
        self.clock.set(now_ms);
        let now = self.clock.now_ms();

        if !self.player.is_dead() {
            self.apply_intent(now, intent);
        }

        self.spawner
            .update(&self.clock, &mut self.player, &mut self.messages);
        self.mobs.update(self.layout.id, now, &mut self.player);

        if self.player.is_dead() && !self.player_fell {
            self.player_fell = true;
            self.messages.show_message("You have fallen.");
        }
        self.steps += 1;
    }

    fn apply_intent(&mut self, now: u64, intent: PlayerIntent) {
        if intent.start_waves {
            self.spawner.start_waves(&self.clock, &mut self.messages);
        }

        let (dir_x, dir_y) = (intent.dx.signum(), intent.dy.signum());
        if dir_x != 0 || dir_y != 0 {
            let query = CollisionQuery::new(
                &self.layout.tiles,
                &self.layout.objects,
                self.game.tile_size,
            );
            let hitbox = self.player.hitbox;
            let from = self.player.position;
            let player = &self.player_config;

            self.player.position = if intent.dash && now >= self.next_dash_at_ms {
                self.next_dash_at_ms = now + player.dash_cooldown_ms;
                dash(
                    &query,
                    &hitbox,
                    from,
                    (dir_x, dir_y),
                    player.dash_distance,
                    player.dash_step,
                )
            } else {
                try_move(&query, &hitbox, from, dir_x * player.speed, dir_y * player.speed)
            };
        }

        if intent.attack && now >= self.next_attack_at_ms {
            self.next_attack_at_ms = now + self.player_config.attack_cooldown_ms;
            let area = self.attack_area();
            let damage = self.player_config.attack_damage;
            let hits = self.spawner.strike_area(area, damage)
                + self.mobs.strike_area(self.layout.id, area, damage);
            tracing::debug!("Player attack at {} hit {} enemies", self.player.position, hits);
        }
    }
}
