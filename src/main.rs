//! RustND - N-dimensional rotation engine
//!
//! Headless driver: loads a figure, rotates it for a configured session and
//! logs the resulting angles and projected extent.
//!
//! Usage: `rustnd [FIGURE.json]`

use std::path::{Path, PathBuf};

use rustnd::config::AppConfig;
use rustnd::systems::SimulationSystem;
use rustnd_core::{shapes::hypercube, FigureError, ProjectedVertex, RotationEngine};
use rustnd_input::{RotationController, SharedControls};

/// Dimension of the generated fallback figure
const FALLBACK_DIMENSION: usize = 4;

/// Load the requested figure, falling back to a generated hypercube if allowed
fn build_engine(config: &AppConfig, path: &Path) -> Result<RotationEngine, FigureError> {
    let mut engine = RotationEngine::new(config.rotation.angular_speed);
    match engine.load_figure(path) {
        Ok(()) => Ok(engine),
        Err(e) if config.figure.fallback_hypercube => {
            log::warn!("{}. Using a generated {}-cube.", e, FALLBACK_DIMENSION);
            engine.set_figure(hypercube(FALLBACK_DIMENSION, config.figure.hypercube_size)?)?;
            Ok(engine)
        }
        Err(e) => Err(e),
    }
}

/// Axis-aligned box around the projected vertices
fn projected_extent(polygons: &[Vec<ProjectedVertex>]) -> Option<([f32; 3], [f32; 3])> {
    let mut verts = polygons.iter().flatten();
    let first = verts.next()?.position;
    Some(verts.fold((first, first), |(mut lo, mut hi), v| {
        for k in 0..3 {
            lo[k] = lo[k].min(v.position[k]);
            hi[k] = hi[k].max(v.position[k]);
        }
        (lo, hi)
    }))
}

fn main() {
    // Config first so its log level can seed the logger
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting RustND");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.figure.path.clone());

    let mut engine = match build_engine(&config, &path) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Failed to load figure: {}", e);
            std::process::exit(1);
        }
    };

    let controller = RotationController::new(engine.plane_count())
        .with_controls(config.session.controls());
    let controls = SharedControls::new(controller.controls());

    let ticks = config.session.tick_count();
    let dt = if config.session.tick_rate > 0 {
        1.0 / config.session.tick_rate as f64
    } else {
        0.0
    };
    log::info!(
        "Rotating for {} ticks at {} Hz in plane {}",
        ticks,
        config.session.tick_rate,
        controls.snapshot().active_plane
    );

    let mut simulation = SimulationSystem::new(config.rotation.max_frame_time);
    let mut dirty_frames = 0u64;
    for _ in 0..ticks {
        if simulation.step(&mut engine, &controls, dt).geometry_dirty {
            dirty_frames += 1;
        }
    }
    log::info!("Session finished: {} of {} frames moved geometry", dirty_frames, ticks);

    if config.debug.print_diagnostics {
        log::info!("Plane angles:\n{}", engine.diagnostics());
    }

    match projected_extent(&engine.project(&config.projection)) {
        Some((lo, hi)) => log::info!("Projected extent: {:?} to {:?}", lo, hi),
        None => log::info!("Figure has no vertices"),
    }
}
