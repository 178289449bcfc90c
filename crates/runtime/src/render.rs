//! Render passes run after simulation steps.
//!
//! The core never draws anything; a render pass receives a [`Frame`] built
//! from the session and presents it however it likes.
use std::io::Write;

use serde::Serialize;

use game_core::{EnemyId, EnemyKind, PlayerHandle, Position, SpawnerSnapshot};

use crate::error::Result;
use crate::session::Session;

/// Read-only picture of the session after a step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub step: u64,
    pub time_ms: u64,
    pub player: PlayerFrame,
    pub encounter: SpawnerSnapshot,
    pub enemies: Vec<EnemyFrame>,
    pub messages: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerFrame {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub dead: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EnemyFrame {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Position,
    pub health: i32,
    pub winding_up: bool,
}

impl Frame {
    pub fn capture(session: &Session) -> Self {
        let player = session.player();
        Self {
            step: session.steps(),
            time_ms: session.now_ms(),
            player: PlayerFrame {
                position: player.position,
                health: player.health(),
                max_health: player.max_health(),
                dead: player.is_dead(),
            },
            encounter: session.spawner().snapshot(session.now_ms()),
            enemies: session
                .live_enemies()
                .map(|enemy| EnemyFrame {
                    id: enemy.id(),
                    kind: enemy.kind(),
                    position: enemy.position(),
                    health: enemy.health(),
                    winding_up: enemy.agent().is_winding_up(),
                })
                .collect(),
            messages: session.messages().recent().map(str::to_owned).collect(),
        }
    }
}

pub trait RenderPass {
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderPass for NullRenderer {
    fn render(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}

/// Writes a one-line HUD summary through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceRenderer;

impl RenderPass for TraceRenderer {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let boss = match frame.encounter.boss_health {
            Some((health, max)) => format!(" boss={health}/{max}"),
            None => String::new(),
        };
        tracing::info!(
            "[{:>6}ms] {} hp={}/{} enemies={}{}",
            frame.time_ms,
            frame.encounter.phase,
            frame.player.health,
            frame.player.max_health,
            frame.enemies.len(),
            boss
        );
        Ok(())
    }
}

/// Writes each frame as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesRenderer<W> {
    writer: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderPass for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        serde_json::to_writer(&mut self.writer, frame)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
