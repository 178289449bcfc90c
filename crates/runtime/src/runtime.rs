//! High-level runtime orchestrator.
//!
//! The runtime owns the session, the player controller and the render pass,
//! and drives them from a fixed-timestep loop. [`Runtime::advance`] is the
//! synchronous core; [`Runtime::run`] wraps it in a tokio interval until a
//! shutdown signal fires or the encounter ends.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::time::{Instant, MissedTickBehavior};

use game_core::{PlayerHandle, SpawnerPhase};

use crate::config::RuntimeConfig;
use crate::controller::PlayerController;
use crate::error::{Result, RuntimeError};
use crate::fixed_step::FixedStep;
use crate::map::MapLayout;
use crate::render::{Frame, NullRenderer, RenderPass};
use crate::session::Session;

/// Main runtime that owns the simulation loop.
pub struct Runtime {
    session: Session,
    controller: Box<dyn PlayerController>,
    renderer: Box<dyn RenderPass>,
    stepper: FixedStep,
    render_every: u64,
    poll_interval: Duration,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn steps(&self) -> u64 {
        self.stepper.steps()
    }

    /// Feeds `elapsed` wall-clock time into the accumulator and runs at most
    /// one step plus its render pass. Returns whether a step ran.
    pub fn advance(&mut self, elapsed: Duration) -> Result<bool> {
        if !self.stepper.advance(elapsed) {
            return Ok(false);
        }

        let intent = self.controller.intent(&self.session);
        self.session.step(self.stepper.sim_time_ms(), intent);

        let step = self.stepper.steps();
        if step % self.render_every == 0 || self.session.is_over() {
            self.renderer.render(&Frame::capture(&self.session))?;
        }
        Ok(true)
    }

    /// Runs the loop until `shutdown` resolves or the encounter ends.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<RunSummary>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        tracing::info!(
            "Runtime started: timestep={:?}, poll={:?}",
            self.stepper.timestep(),
            self.poll_interval
        );

        let mut last = Instant::now();
        let interrupted = loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested after {} steps", self.stepper.steps());
                    break true;
                }
                _ = ticker.tick() => {
                    let now = Instant::now();
                    self.advance(now - last)?;
                    last = now;
                    if self.session.is_over() {
                        break false;
                    }
                }
            }
        };

        let summary = self.summary(interrupted);
        tracing::info!("Run finished: {}", summary);
        Ok(summary)
    }

    pub fn summary(&self, interrupted: bool) -> RunSummary {
        let player = self.session.player();
        let spawner = self.session.spawner();
        let outcome = if player.is_dead() {
            RunOutcome::Defeat
        } else if spawner.boss_defeated() {
            RunOutcome::Victory
        } else if interrupted {
            RunOutcome::Interrupted
        } else {
            RunOutcome::InProgress
        };

        RunSummary {
            outcome,
            steps: self.stepper.steps(),
            sim_time_ms: self.stepper.sim_time_ms(),
            phase: spawner.phase(),
            boss_spawned: spawner.boss_spawned(),
            player_health: player.health(),
            messages_shown: self.session.messages().total(),
        }
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("session", &self.session)
            .field("stepper", &self.stepper)
            .field("render_every", &self.render_every)
            .finish_non_exhaustive()
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
    Interrupted,
    InProgress,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunOutcome::Victory => "victory",
            RunOutcome::Defeat => "defeat",
            RunOutcome::Interrupted => "interrupted",
            RunOutcome::InProgress => "in progress",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub steps: u64,
    pub sim_time_ms: u64,
    pub phase: SpawnerPhase,
    pub boss_spawned: bool,
    pub player_health: i32,
    pub messages_shown: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} steps ({}ms simulated), phase {}, player hp {}",
            self.outcome, self.steps, self.sim_time_ms, self.phase, self.player_health
        )
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    layout: Option<MapLayout>,
    controller: Option<Box<dyn PlayerController>>,
    renderer: Option<Box<dyn RenderPass>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            layout: None,
            controller: None,
            renderer: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Map to play on. Defaults to [`MapLayout::arena`].
    pub fn layout(mut self, layout: MapLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the player controller (required)
    pub fn controller(mut self, controller: impl PlayerController + 'static) -> Self {
        self.controller = Some(Box::new(controller));
        self
    }

    /// Set the render pass. Defaults to [`NullRenderer`].
    pub fn renderer(mut self, renderer: impl RenderPass + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn build(self) -> Result<Runtime> {
        if let Err(err) = self.config.validate() {
            tracing::warn!("Rejected runtime configuration: {}", err);
            return Err(err);
        }

        let controller = self.controller.ok_or(RuntimeError::MissingController)?;
        let layout = self
            .layout
            .unwrap_or_else(|| MapLayout::arena(&self.config.game));
        let session = Session::new(&self.config, layout)?;
        let stepper = FixedStep::new(self.config.timestep, self.config.max_backlog)?;

        Ok(Runtime {
            session,
            controller,
            renderer: self.renderer.unwrap_or_else(|| Box::new(NullRenderer)),
            stepper,
            render_every: self.config.render_every.max(1),
            poll_interval: self.config.poll_interval,
        })
    }
}
