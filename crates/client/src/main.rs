//! Wave encounter client binary.
//!
//! Composition root for a headless run: loads configuration from the
//! environment (and `.env`), builds a [`runtime::Runtime`] on the demo arena
//! with the autopilot controller, and drives it until ctrl-c, an optional
//! time limit, or the end of the encounter.
//!
//! # Environment
//!
//! Besides the `WAVE_*` and `SIM_*` variables read by
//! [`runtime::RuntimeConfig::from_env`]:
//! - `SIM_RENDER` - `trace` (default), `json` or `none`
//! - `SIM_RUN_SECONDS` - Stop after this many seconds of wall-clock time
//! - `RUST_LOG` - Log filter (default: `info`)

mod logging;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use runtime::{
    AutopilotController, JsonLinesRenderer, MapLayout, NullRenderer, Runtime, RuntimeBuilder,
    RuntimeConfig, TraceRenderer,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging()?;

    let config = RuntimeConfig::from_env().context("loading runtime configuration")?;
    let run_for = run_limit()?;

    tracing::info!("Starting wave client");
    tracing::info!(
        "World: {}x{} tiles of {}",
        config.game.world_columns,
        config.game.world_rows,
        config.game.tile_size
    );
    tracing::info!("Wave deadlines: {:?}", config.spawner.wave_deadlines_ms);

    let layout = MapLayout::arena(&config.game);
    let builder = Runtime::builder()
        .config(config)
        .layout(layout)
        .controller(AutopilotController::default());
    let mut runtime = with_renderer(builder)?
        .build()
        .context("building runtime")?;

    let summary = runtime.run(shutdown_signal(run_for)).await?;

    tracing::info!("Client shutdown complete: {}", summary);
    Ok(())
}

fn with_renderer(builder: RuntimeBuilder) -> Result<RuntimeBuilder> {
    let mode = std::env::var("SIM_RENDER").unwrap_or_else(|_| "trace".to_owned());
    Ok(match mode.trim().to_ascii_lowercase().as_str() {
        "trace" => builder.renderer(TraceRenderer),
        "json" => builder.renderer(JsonLinesRenderer::new(std::io::stdout())),
        "none" => builder.renderer(NullRenderer),
        other => bail!("unknown SIM_RENDER mode {other:?} (expected trace, json or none)"),
    })
}

fn run_limit() -> Result<Option<Duration>> {
    match std::env::var("SIM_RUN_SECONDS") {
        Ok(value) => {
            let seconds: f64 = value
                .trim()
                .parse()
                .with_context(|| format!("SIM_RUN_SECONDS has unparsable value {value:?}"))?;
            Ok(Some(Duration::from_secs_f64(seconds.max(0.0))))
        }
        Err(_) => Ok(None),
    }
}

/// Resolves on ctrl-c, or when the optional time limit elapses.
async fn shutdown_signal(run_for: Option<Duration>) {
    let limit = async {
        match run_for {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending::<()>().await,
        }
    };

    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Interrupted");
        }
        _ = limit => {
            tracing::info!("Run limit reached");
        }
    }
}
