//! End-to-end wave timeline, stepped at the simulation rate.

use game_core::{
    Clock, GameConfig, Hitbox, ManualClock, PlayerBody, Position, SpawnerConfig, SpawnerPhase,
    WaveSpawner,
};

const STEP_MS: u64 = 16;

/// Timestamp of every observed phase change, in order.
fn run_until(
    spawner: &mut WaveSpawner,
    clock: &mut ManualClock,
    player: &mut PlayerBody,
    messages: &mut Vec<String>,
    end_ms: u64,
) -> Vec<(u64, SpawnerPhase)> {
    let mut changes = Vec::new();
    let mut last = spawner.phase();
    while clock.now_ms() < end_ms {
        clock.advance(STEP_MS);
        spawner.update(&*clock, player, messages);
        if spawner.phase() != last {
            last = spawner.phase();
            changes.push((clock.now_ms(), last));
        }
    }
    changes
}

/// Player in a corner with enough health to outlast any test.
fn bystander() -> PlayerBody {
    PlayerBody::new(Position::new(0, 0), Hitbox::new(0, 0, 16, 16), 1_000_000)
}

fn within_one_step(actual: u64, expected: u64) -> bool {
    actual >= expected && actual < expected + STEP_MS
}

#[test]
fn waves_advance_on_cumulative_deadlines() {
    let config = SpawnerConfig::new().with_wave_deadlines(vec![10_000, 20_000, 30_000]);
    let mut spawner = WaveSpawner::new(GameConfig::default(), config).unwrap();
    let mut clock = ManualClock::starting_at(0);
    let mut player = bystander();
    let mut messages: Vec<String> = Vec::new();

    spawner.start_waves(&clock, &mut messages);
    assert_eq!(spawner.phase(), SpawnerPhase::Wave(1));
    assert_eq!(spawner.enemies().len(), 5);
    assert!(!spawner.boss_spawned());

    let changes = run_until(&mut spawner, &mut clock, &mut player, &mut messages, 40_000);

    let phases: Vec<_> = changes.iter().map(|(_, phase)| *phase).collect();
    assert_eq!(
        phases,
        vec![
            SpawnerPhase::Wave(2),
            SpawnerPhase::Wave(3),
            SpawnerPhase::BossPhase
        ]
    );
    assert!(within_one_step(changes[0].0, 10_000), "{changes:?}");
    assert!(within_one_step(changes[1].0, 20_000), "{changes:?}");
    assert!(within_one_step(changes[2].0, 30_000), "{changes:?}");

    assert!(spawner.boss_spawned());
    assert!(spawner.boss().is_some());
    assert_eq!(
        messages,
        vec![
            "Wave 1 started",
            "Wave 2 started",
            "Wave 3 started",
            "The boss has appeared!"
        ]
    );
}

#[test]
fn boss_flag_never_reverts() {
    let config = SpawnerConfig::new().with_wave_deadlines(vec![100, 200, 300]);
    let mut spawner = WaveSpawner::new(GameConfig::default(), config).unwrap();
    let mut clock = ManualClock::starting_at(0);
    let mut player = bystander();
    let mut messages: Vec<String> = Vec::new();
    spawner.start_waves(&clock, &mut messages);

    let mut flips = 0;
    let mut was_spawned = spawner.boss_spawned();
    while clock.now_ms() < 2_000 {
        clock.advance(STEP_MS);
        spawner.update(&clock, &mut player, &mut messages);
        if spawner.boss_spawned() != was_spawned {
            flips += 1;
            was_spawned = spawner.boss_spawned();
        }
    }
    assert_eq!(flips, 1);
    assert!(was_spawned);

    // Killing the boss ends it for good without reopening the boss phase.
    if let Some(boss) = spawner.boss_mut() {
        boss.damage(i32::MAX);
    }
    clock.advance(STEP_MS);
    spawner.update(&clock, &mut player, &mut messages);
    assert!(spawner.boss().is_none());
    assert!(spawner.boss_defeated());
    assert!(spawner.boss_spawned());
    assert_eq!(spawner.phase(), SpawnerPhase::BossPhase);

    run_until(&mut spawner, &mut clock, &mut player, &mut messages, 5_000);
    assert!(spawner.boss().is_none());
    let boss_messages = messages
        .iter()
        .filter(|message| message.as_str() == "The boss has appeared!")
        .count();
    assert_eq!(boss_messages, 1);
}

#[test]
fn boss_is_ticked_in_the_step_it_spawns() {
    let config = SpawnerConfig::new().with_wave_deadlines(vec![100]);
    let world = GameConfig::default();
    let mut spawner = WaveSpawner::new(world.clone(), config).unwrap();
    let mut clock = ManualClock::starting_at(0);
    // Stand on the boss spawn so its first tick starts an attack.
    let center = world.world_center();
    let mut player = PlayerBody::new(center, Hitbox::new(0, 0, 16, 16), 1_000);
    let mut messages: Vec<String> = Vec::new();
    spawner.start_waves(&clock, &mut messages);

    // Keep regular enemies from interfering.
    for enemy in spawner.enemies_mut() {
        enemy.damage(i32::MAX);
    }

    clock.set(100);
    let health_before = player.health();
    spawner.update(&clock, &mut player, &mut messages);

    assert_eq!(spawner.phase(), SpawnerPhase::BossPhase);
    let boss = spawner.boss().unwrap();
    // The Boss winds up on its first tick; being ticked is visible as an
    // attack cycle that left Idle.
    assert_ne!(
        boss.agent().attack_cycle().phase(),
        game_core::enemy::AttackPhase::Idle
    );
    assert_eq!(player.health(), health_before);
    assert!(spawner.enemies().is_empty());
}

#[test]
fn equal_seeds_replay_equal_spawns() {
    let layout = |seed: u64| {
        let config = SpawnerConfig::new().with_seed(seed);
        let mut spawner = WaveSpawner::new(GameConfig::default(), config).unwrap();
        let clock = ManualClock::starting_at(0);
        let mut messages: Vec<String> = Vec::new();
        spawner.start_waves(&clock, &mut messages);
        spawner
            .enemies()
            .iter()
            .map(|enemy| (enemy.kind(), enemy.position()))
            .collect::<Vec<_>>()
    };
    assert_eq!(layout(7), layout(7));
    assert_ne!(layout(7), layout(8));
}
