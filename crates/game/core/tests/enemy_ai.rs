//! Decision scenarios for the hostile AI tree.
//!
//! The player uses the Dummy's hitbox, so the center-to-center distance
//! between a Dummy and the player equals the distance between positions.

use behavior_tree::Status;
use game_core::enemy::DamageOutcome;
use game_core::{Enemy, EnemyId, EnemyKind, PlayerBody, PlayerHandle, Position};

const PLAYER_HEALTH: i32 = 100;

fn dummy_at(x: i32, y: i32) -> Enemy {
    Enemy::new(EnemyId(1), EnemyKind::Dummy, Position::new(x, y))
}

fn player_at(x: i32, y: i32) -> PlayerBody {
    PlayerBody::new(
        Position::new(x, y),
        EnemyKind::Dummy.stats().hitbox,
        PLAYER_HEALTH,
    )
}

#[test]
fn in_attack_range_attacks_without_moving() {
    let stats = EnemyKind::Dummy.stats();
    let mut enemy = dummy_at(100, 100);
    let mut player = player_at(120, 100);
    assert!(20.0 < stats.attack_range && stats.attack_range < stats.vision_range);

    let status = enemy.update(0, &mut player);

    assert_eq!(status, Status::Success);
    assert_eq!(enemy.position(), Position::new(100, 100));
    assert_eq!(player.health(), PLAYER_HEALTH - stats.damage);
}

#[test]
fn visible_but_out_of_reach_chases_only() {
    let mut enemy = dummy_at(100, 100);
    let mut player = player_at(200, 100);

    let status = enemy.update(0, &mut player);

    assert_eq!(status, Status::Running);
    assert_eq!(enemy.position(), Position::new(101, 100));
    assert_eq!(player.health(), PLAYER_HEALTH);
}

#[test]
fn chase_turns_into_attack_once_in_range() {
    let mut enemy = Enemy::new(EnemyId(1), EnemyKind::Dog, Position::new(0, 0));
    let mut player = PlayerBody::new(
        Position::new(60, 0),
        EnemyKind::Dog.stats().hitbox,
        PLAYER_HEALTH,
    );

    let mut now = 0;
    while player.health() == PLAYER_HEALTH {
        enemy.update(now, &mut player);
        now += 16;
        assert!(now < 1_000, "dog never reached the player");
    }
    assert_eq!(player.health(), PLAYER_HEALTH - EnemyKind::Dog.stats().damage);
    // Cooldown keeps the next strike from landing straight away.
    enemy.update(now, &mut player);
    assert_eq!(player.health(), PLAYER_HEALTH - EnemyKind::Dog.stats().damage);
}

#[test]
fn out_of_sight_with_route_patrols() {
    let mut enemy = dummy_at(100, 100).with_patrol(vec![Position::new(100, 200)]);
    let mut player = player_at(1_000, 1_000);

    let status = enemy.update(0, &mut player);

    assert_eq!(status, Status::Running);
    assert_eq!(enemy.position(), Position::new(100, 101));
}

#[test]
fn out_of_sight_without_route_idles_and_fails() {
    let mut enemy = dummy_at(100, 100);
    let mut player = player_at(1_000, 1_000);

    let status = enemy.update(0, &mut player);

    assert_eq!(status, Status::Failure);
    assert_eq!(enemy.position(), Position::new(100, 100));
}

#[test]
fn dead_player_is_ignored() {
    let mut enemy = dummy_at(100, 100);
    let mut player = player_at(110, 100);
    player.damage(PLAYER_HEALTH);

    assert_eq!(enemy.update(0, &mut player), Status::Failure);
    assert_eq!(enemy.position(), Position::new(100, 100));
}

#[test]
fn lethal_damage_kills_exactly_once() {
    let mut enemy = dummy_at(0, 0);
    assert_eq!(enemy.damage(25), DamageOutcome::Wounded);
    assert_eq!(enemy.health(), 5);

    assert_eq!(enemy.damage(5), DamageOutcome::Killed);
    assert_eq!(enemy.health(), 0);
    assert!(enemy.is_dead());

    assert_eq!(enemy.damage(5), DamageOutcome::Ignored);
    assert_eq!(enemy.health(), 0);
}

#[test]
fn windup_commits_the_tambay() {
    let stats = EnemyKind::Tambay.stats();
    let mut enemy = Enemy::new(EnemyId(1), EnemyKind::Tambay, Position::new(0, 0));
    let mut player = PlayerBody::new(Position::new(30, 0), stats.hitbox, PLAYER_HEALTH);

    assert_eq!(enemy.update(0, &mut player), Status::Running);
    assert_eq!(player.health(), PLAYER_HEALTH);

    // The player steps back out of reach during the windup; the Tambay stays
    // rooted until the windup expires, then gives chase.
    player.position = Position::new(150, 0);
    assert_eq!(enemy.update(200, &mut player), Status::Running);
    assert_eq!(enemy.position(), Position::new(0, 0));

    assert_eq!(enemy.update(stats.windup_ms, &mut player), Status::Running);
    // Speed 1.5: one whole unit now, the half unit carries into the next step.
    assert_eq!(enemy.position(), Position::new(1, 0));
    assert_eq!(player.health(), PLAYER_HEALTH);

    enemy.update(stats.windup_ms + 16, &mut player);
    assert_eq!(enemy.position(), Position::new(3, 0));
}

#[test]
fn diagonal_chase_keeps_to_speed() {
    let stats = EnemyKind::Tambay.stats();
    let mut enemy = Enemy::new(EnemyId(1), EnemyKind::Tambay, Position::new(0, 0));
    let mut player = PlayerBody::new(Position::new(180, 180), stats.hitbox, PLAYER_HEALTH);

    for tick in 0..20 {
        assert_eq!(enemy.update(tick * 16, &mut player), Status::Running);
    }

    let travelled = enemy.position().to_vec2().length();
    let expected = stats.speed * 20.0;
    assert!(
        travelled <= expected && travelled > expected - 1.5,
        "travelled {travelled}, expected about {expected}"
    );
}
