//! Fixed-timestep runtime for the wave encounter.
//!
//! This crate wires the game-core pieces (wave spawner, level mobs,
//! collision-checked player movement) into a playable session and drives it
//! at a fixed simulation rate. Consumers embed [`Runtime`] and supply a
//! [`PlayerController`] and optionally a [`RenderPass`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`session`] owns the simulation state and the per-step order
//! - [`fixed_step`] accumulates wall-clock time into discrete steps
//! - [`controller`] and [`render`] are the input and output seams
pub mod config;
pub mod controller;
pub mod error;
pub mod fixed_step;
pub mod map;
pub mod messages;
pub mod render;
pub mod runtime;
pub mod session;

pub use config::{PlayerConfig, RuntimeConfig};
pub use controller::{
    AutopilotController, IdleController, PlayerController, PlayerIntent, ScriptedController,
};
pub use error::{Result, RuntimeError};
pub use fixed_step::FixedStep;
pub use map::MapLayout;
pub use messages::MessageLog;
pub use render::{
    EnemyFrame, Frame, JsonLinesRenderer, NullRenderer, PlayerFrame, RenderPass, TraceRenderer,
};
pub use runtime::{RunOutcome, RunSummary, Runtime, RuntimeBuilder};
pub use session::{PLAYER_HITBOX, Session};
