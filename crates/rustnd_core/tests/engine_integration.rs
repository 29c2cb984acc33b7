//! Integration tests for the rotation engine
//!
//! These tests drive the engine the way the application does:
//! 1. Figures load from the sample JSON files
//! 2. Ticks advance the active plane and rotate geometry
//! 3. Bad loads leave the running session untouched

use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

use rustnd_core::{
    ControlInputs, Direction, FigureError, FrameChanges, Projection, RotationEngine,
    RotationPlane, RotationState, StepMultiplier,
};

const EPSILON: f64 = 1e-9;

fn figure_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../figures")
        .join(name)
}

fn load(name: &str) -> RotationEngine {
    let mut engine = RotationEngine::new(FRAC_PI_2);
    engine
        .load_figure(figure_path(name))
        .unwrap_or_else(|e| panic!("{} should load: {}", name, e));
    engine
}

// ==================== Loading ====================

#[test]
fn test_sample_figures_load() {
    for (name, dim, polygons) in [
        ("cube3.json", 3, 6),
        ("tesseract4.json", 4, 24),
        ("cube5.json", 5, 80),
    ] {
        let engine = load(name);
        assert_eq!(engine.dimension(), Some(dim));
        assert_eq!(engine.polygon_count(), polygons);
        assert_eq!(engine.vertex_count(), polygons * 4);
        assert_eq!(engine.plane_count(), dim * (dim - 1) / 2);
    }
}

#[test]
fn test_dimension_two_rejected_keeps_prior_figure() {
    let mut engine = load("cube3.json");
    let controls = ControlInputs::new().with_velocity(true);
    engine.tick(&controls, 0.4);
    let figure_before = engine.figure().cloned();
    let angles_before = engine.angles().clone();

    let err = engine.load_figure(figure_path("square2.json")).unwrap_err();
    assert!(matches!(err, FigureError::DimensionTooLow(2)));
    assert_eq!(err.to_string(), "The dimension (2) must be 3 or greater");

    assert_eq!(engine.figure().cloned(), figure_before);
    assert_eq!(engine.angles(), &angles_before);
    assert_eq!(engine.dimension(), Some(3));
}

#[test]
fn test_dimension_two_rejected_on_empty_engine() {
    let mut engine = RotationEngine::default();
    let err = engine.load_figure(figure_path("square2.json")).unwrap_err();
    assert!(matches!(err, FigureError::DimensionTooLow(2)));
    assert!(engine.figure().is_none());
}

#[test]
fn test_five_after_four_is_mismatch() {
    let mut engine = load("tesseract4.json");
    let err = engine.load_figure(figure_path("cube5.json")).unwrap_err();
    assert!(matches!(
        err,
        FigureError::DimensionMismatch { expected: 4, found: 5 }
    ));
    assert_eq!(engine.dimension(), Some(4));
    assert_eq!(engine.polygon_count(), 24);
}

#[test]
fn test_missing_file_reports_not_found() {
    let mut engine = RotationEngine::default();
    let err = engine.load_figure(figure_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, FigureError::NotFound(_)));
}

#[test]
fn test_same_dimension_reload_replaces_geometry() {
    let mut engine = load("cube3.json");
    engine.tick(&ControlInputs::new().with_velocity(true), 1.0);
    engine.load_figure(figure_path("cube3.json")).unwrap();
    assert_eq!(engine.polygon_count(), 6);
    assert!(engine.angles().as_slice().iter().all(|&a| a == 0.0));
}

// ==================== Ticking ====================

#[test]
fn test_cube_quarter_turn_scenario() {
    let mut engine = load("cube3.json");
    let original = engine.figure().cloned().unwrap();
    assert_eq!(engine.planes()[0], RotationPlane::new(0, 1));

    let report = engine.tick(&ControlInputs::new().with_velocity(true), 1.0);
    assert_eq!(report.state, RotationState::Rotating);
    assert!(report.changes.contains(FrameChanges::GEOMETRY));
    assert!((engine.angles().get(0).unwrap() - FRAC_PI_2).abs() < EPSILON);

    let rotated = engine.figure().unwrap();
    for (before, after) in original.vertices().zip(rotated.vertices()) {
        // 90 degrees about the origin in the xy plane
        assert!((after[0] + before[1]).abs() < EPSILON);
        assert!((after[1] - before[0]).abs() < EPSILON);
        assert_eq!(after[2], before[2]);
    }
}

#[test]
fn test_only_active_plane_changes_bit_for_bit() {
    let mut engine = load("cube5.json");
    let count = engine.plane_count();

    // Give every plane a distinct non-zero angle
    for plane in 0..count {
        let controls = ControlInputs::new()
            .with_active_plane(plane)
            .with_velocity(true);
        engine.tick(&controls, 0.01 * (plane + 1) as f64);
    }

    for active in 0..count {
        let before: Vec<u64> = engine.angles().as_slice().iter().map(|a| a.to_bits()).collect();
        let controls = ControlInputs::new()
            .with_active_plane(active)
            .with_direction(Direction::Reverse)
            .with_velocity(true);
        engine.tick(&controls, 0.013);
        let after: Vec<u64> = engine.angles().as_slice().iter().map(|a| a.to_bits()).collect();

        for i in 0..count {
            if i == active {
                assert_ne!(before[i], after[i], "active plane {} did not move", i);
            } else {
                assert_eq!(before[i], after[i], "plane {} moved while {} was active", i, active);
            }
        }
    }
}

#[test]
fn test_many_wraparounds_stay_normalized() {
    let mut engine = load("tesseract4.json");
    let fast = ControlInputs::new()
        .with_active_plane(5)
        .with_step(StepMultiplier::Double)
        .with_velocity(true);

    // Large frame times wrap the angle several times per tick
    for _ in 0..2_000 {
        engine.tick(&fast, 7.3);
        let a = engine.angles().get(5).unwrap();
        assert!((0.0..std::f64::consts::TAU).contains(&a));
    }
}

#[test]
fn test_geometry_stays_rigid_over_long_session() {
    let mut engine = load("tesseract4.json");
    let mut controls = ControlInputs::new().with_velocity(true);
    for frame in 0..3_000 {
        if frame % 100 == 0 {
            controls.next_plane(engine.plane_count());
        }
        engine.tick(&controls, 1.0 / 60.0);
    }

    // Every corner of the unit-half-width tesseract stays at distance 2
    let figure = engine.figure().unwrap();
    for v in figure.vertices() {
        assert!((v.length() - 2.0).abs() < 1e-9, "vertex drifted to {}", v.length());
    }
    // Edges stay length 2
    for polygon in figure.polygons() {
        let verts = polygon.vertices();
        for k in 0..verts.len() {
            let d = verts[k].distance(&verts[(k + 1) % verts.len()]);
            assert!((d - 2.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_projection_follows_rotation() {
    let mut engine = load("tesseract4.json");
    let before = engine.project(&Projection::Orthographic);
    // Plane (0, 3) turns x toward w, which the orthographic view cannot see
    let xw = engine
        .planes()
        .iter()
        .position(|p| p.axes() == (0, 3))
        .unwrap();
    engine.tick(&ControlInputs::new().with_active_plane(xw).with_velocity(true), 1.0);
    let after = engine.project(&Projection::Orthographic);
    assert_eq!(before.len(), after.len());
    assert_ne!(before, after);
}

#[test]
fn test_diagnostics_table_after_session() {
    let mut engine = load("cube3.json");
    engine.tick(&ControlInputs::new().with_velocity(true), 1.0);
    let text = engine.diagnostics().to_string();
    let first = text.lines().next().unwrap();
    assert!(first.ends_with("[Angle (X1, X2)]:  90.0"), "got {:?}", first);
    assert_eq!(text.lines().count(), 3);
}
