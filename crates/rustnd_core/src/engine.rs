//! Rotation engine
//!
//! [`RotationEngine`] owns the figure, the plane list and the per-plane angles.
//! Each frame the caller passes a [`ControlInputs`] snapshot and the elapsed
//! time to [`tick`](RotationEngine::tick), which
//!
//! 1. resolves the active plane (wrapping the index),
//! 2. advances that plane's angle by `direction * step * angular_speed * dt`,
//! 3. rotates every vertex by the same delta, in place.
//!
//! The renderer reads the figure after `tick` returns; angle and geometry are
//! always updated together inside one call.

use std::path::Path;

use bitflags::bitflags;
use rustnd_math::{enumerate_planes, RotationPlane};

use crate::{
    AngleState, ControlInputs, Diagnostics, Figure, FigureError, PlaneReading,
    ProjectedVertex, Projection, RotationState, TransformApplier,
};

/// Default angular speed: a quarter turn per second
pub const DEFAULT_ANGULAR_SPEED: f64 = std::f64::consts::FRAC_PI_2;

bitflags! {
    /// What a tick changed
    ///
    /// Lets the render step skip re-uploading geometry when nothing moved.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FrameChanges: u8 {
        /// The active plane's angle advanced
        const ANGLES = 1 << 0;
        /// Vertices were transformed
        const GEOMETRY = 1 << 1;
        /// A different plane became active
        const ACTIVE_PLANE = 1 << 2;
        /// Idle/Rotating state flipped
        const STATE = 1 << 3;
    }
}

/// Outcome of one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// Radians applied to the active plane this tick
    pub delta_angle: f64,
    /// Plane index the tick used
    pub active_plane: usize,
    pub state: RotationState,
    pub changes: FrameChanges,
}

/// N-dimensional rotation session
pub struct RotationEngine {
    figure: Option<Figure>,
    planes: Vec<RotationPlane>,
    angles: AngleState,
    active_plane: usize,
    state: RotationState,
    angular_speed: f64,
    applier: TransformApplier,
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ANGULAR_SPEED)
    }
}

impl RotationEngine {
    /// Create an engine with no figure loaded
    ///
    /// `angular_speed` is in radians per second. A negative or non-finite speed
    /// is replaced by [`DEFAULT_ANGULAR_SPEED`].
    pub fn new(angular_speed: f64) -> Self {
        let angular_speed = if angular_speed.is_finite() && angular_speed >= 0.0 {
            angular_speed
        } else {
            log::warn!(
                "Invalid angular speed {}, using {}",
                angular_speed,
                DEFAULT_ANGULAR_SPEED
            );
            DEFAULT_ANGULAR_SPEED
        };
        Self {
            figure: None,
            planes: Vec::new(),
            angles: AngleState::default(),
            active_plane: 0,
            state: RotationState::Idle,
            angular_speed,
            applier: TransformApplier::new(),
        }
    }

    /// Create an engine and install `figure`
    pub fn with_figure(figure: Figure, angular_speed: f64) -> Self {
        let mut engine = Self::new(angular_speed);
        engine.install(figure);
        engine
    }

    /// Load a figure file, replacing the current figure on success
    ///
    /// Once a figure is loaded, later files must have the same dimension. On any
    /// error the current figure, planes and angles are left untouched.
    pub fn load_figure<P: AsRef<Path>>(&mut self, path: P) -> Result<(), FigureError> {
        let path = path.as_ref();
        match Figure::load(path, self.dimension()) {
            Ok(figure) => {
                log::info!("Loaded figure from {}", path.display());
                self.install(figure);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected figure {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Load a figure from a JSON string (same rules as [`load_figure`](Self::load_figure))
    pub fn load_figure_str(&mut self, json: &str) -> Result<(), FigureError> {
        let figure = Figure::from_json_str(json, self.dimension()).map_err(|e| {
            log::warn!("Rejected figure: {}", e);
            e
        })?;
        self.install(figure);
        Ok(())
    }

    /// Replace the current figure with an already-built one
    ///
    /// Fails with [`FigureError::DimensionMismatch`] if the dimension differs from
    /// the loaded figure.
    pub fn set_figure(&mut self, figure: Figure) -> Result<(), FigureError> {
        if let Some(expected) = self.dimension() {
            if expected != figure.dimension() {
                let e = FigureError::DimensionMismatch {
                    expected,
                    found: figure.dimension() as i64,
                };
                log::warn!("Rejected figure: {}", e);
                return Err(e);
            }
        }
        self.install(figure);
        Ok(())
    }

    fn install(&mut self, figure: Figure) {
        let dim = figure.dimension();
        self.planes = enumerate_planes(dim);
        self.angles = AngleState::new(self.planes.len());
        self.active_plane = 0;
        log::info!(
            "Figure ready: dimension {}, {} polygons, {} vertices, {} rotation planes",
            dim,
            figure.polygon_count(),
            figure.vertex_count(),
            self.planes.len()
        );
        self.figure = Some(figure);
    }

    /// Advance one frame
    ///
    /// `elapsed` is the frame time in seconds. Negative or non-finite values, and
    /// values large enough to overflow the rotation step, are treated as zero.
    /// With no figure loaded this does nothing.
    pub fn tick(&mut self, controls: &ControlInputs, elapsed: f64) -> TickReport {
        let mut changes = FrameChanges::empty();
        let state = controls.state();

        if self.planes.is_empty() {
            return TickReport {
                delta_angle: 0.0,
                active_plane: 0,
                state,
                changes,
            };
        }

        let active = controls.active_plane % self.planes.len();
        if active != self.active_plane {
            log::debug!(
                "Active plane {} -> {} {}",
                self.active_plane,
                active,
                self.planes[active]
            );
            self.active_plane = active;
            changes |= FrameChanges::ACTIVE_PLANE;
        }

        if state != self.state {
            log::debug!("Rotation state {:?} -> {:?}", self.state, state);
            self.state = state;
            changes |= FrameChanges::STATE;
        }

        let dt = if elapsed.is_finite() && elapsed >= 0.0 {
            elapsed
        } else {
            log::warn!("Ignoring invalid frame time {}", elapsed);
            0.0
        };

        let delta_angle = match state {
            RotationState::Idle => 0.0,
            RotationState::Rotating => controls.rate_factor() * self.angular_speed * dt,
        };
        // A huge dt can still overflow the product
        let delta_angle = if delta_angle.is_finite() {
            delta_angle
        } else {
            log::warn!("Ignoring non-finite rotation step for frame time {}", dt);
            0.0
        };

        if delta_angle != 0.0 {
            // Angle first, then geometry, in the same call
            self.angles.advance(active, delta_angle);
            changes |= FrameChanges::ANGLES;

            let plane = self.planes[active];
            if let Some(figure) = self.figure.as_mut() {
                let moved = self.applier.apply(figure, plane, delta_angle);
                if moved > 0 {
                    changes |= FrameChanges::GEOMETRY;
                }
                log::trace!("Rotated {} vertices by {:.6} rad in {}", moved, delta_angle, plane);
            }
        }

        TickReport {
            delta_angle,
            active_plane: active,
            state,
            changes,
        }
    }

    /// The loaded figure, if any
    #[inline]
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// Dimension of the loaded figure
    #[inline]
    pub fn dimension(&self) -> Option<usize> {
        self.figure.as_ref().map(Figure::dimension)
    }

    /// Rotation planes in canonical order
    #[inline]
    pub fn planes(&self) -> &[RotationPlane] {
        &self.planes
    }

    #[inline]
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn angles(&self) -> &AngleState {
        &self.angles
    }

    /// Plane index used by the most recent tick
    #[inline]
    pub fn active_plane(&self) -> usize {
        self.active_plane
    }

    #[inline]
    pub fn state(&self) -> RotationState {
        self.state
    }

    #[inline]
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    pub fn polygon_count(&self) -> usize {
        self.figure.as_ref().map_or(0, Figure::polygon_count)
    }

    pub fn vertex_count(&self) -> usize {
        self.figure.as_ref().map_or(0, Figure::vertex_count)
    }

    /// Per-axis `(min, max)` of the current geometry
    pub fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        self.figure.as_ref().and_then(Figure::bounds)
    }

    /// Project the current geometry for a 3D renderer
    pub fn project(&self, projection: &Projection) -> Vec<Vec<ProjectedVertex>> {
        self.figure
            .as_ref()
            .map(|f| projection.project_figure(f))
            .unwrap_or_default()
    }

    /// Snapshot of every plane's angle for on-screen or log output
    pub fn diagnostics(&self) -> Diagnostics {
        let readings = self
            .planes
            .iter()
            .zip(self.angles.as_slice())
            .enumerate()
            .map(|(i, (&plane, &angle))| PlaneReading {
                plane,
                degrees: angle.to_degrees(),
                active: i == self.active_plane,
            })
            .collect();
        Diagnostics {
            readings,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Direction, StepMultiplier};
    use crate::shapes::hypercube;
    use rustnd_math::FULL_TURN;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn rotating() -> ControlInputs {
        ControlInputs::new().with_velocity(true)
    }

    fn cube_engine() -> RotationEngine {
        RotationEngine::with_figure(hypercube(3, 2.0).unwrap(), FRAC_PI_2)
    }

    #[test]
    fn test_empty_engine_tick_is_noop() {
        let mut engine = RotationEngine::default();
        let report = engine.tick(&rotating(), 1.0);
        assert_eq!(report.delta_angle, 0.0);
        assert!(report.changes.is_empty());
        assert!(engine.figure().is_none());
    }

    #[test]
    fn test_install_enumerates_planes() {
        let engine = RotationEngine::with_figure(hypercube(5, 1.0).unwrap(), 1.0);
        assert_eq!(engine.plane_count(), 10);
        assert_eq!(engine.angles().len(), 10);
        assert_eq!(engine.dimension(), Some(5));
    }

    #[test]
    fn test_quarter_turn_in_xy() {
        let mut engine = cube_engine();
        let original = engine.figure().unwrap().clone();

        let report = engine.tick(&rotating(), 1.0);
        assert!((report.delta_angle - FRAC_PI_2).abs() < EPSILON);
        assert!(report.changes.contains(FrameChanges::ANGLES | FrameChanges::GEOMETRY));
        assert_eq!(engine.planes()[0], RotationPlane::new(0, 1));
        assert!((engine.angles().get(0).unwrap() - FRAC_PI_2).abs() < EPSILON);

        for (before, after) in original.vertices().zip(engine.figure().unwrap().vertices()) {
            // (x, y) -> (-y, x), z unchanged
            assert!((after[0] + before[1]).abs() < EPSILON);
            assert!((after[1] - before[0]).abs() < EPSILON);
            assert_eq!(after[2], before[2]);
        }
    }

    #[test]
    fn test_idle_changes_nothing() {
        let mut engine = cube_engine();
        let original = engine.figure().unwrap().clone();
        let report = engine.tick(&ControlInputs::new(), 0.5);
        assert_eq!(report.state, RotationState::Idle);
        assert_eq!(report.delta_angle, 0.0);
        assert_eq!(engine.figure().unwrap(), &original);
        assert!(engine.angles().as_slice().iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_direction_and_step_scale_delta() {
        let mut engine = cube_engine();
        let controls = rotating()
            .with_direction(Direction::Reverse)
            .with_step(StepMultiplier::Double);
        let report = engine.tick(&controls, 0.25);
        assert!((report.delta_angle + PI / 4.0).abs() < EPSILON);
        // -π/4 wraps to 7π/4
        assert!((engine.angles().get(0).unwrap() - 7.0 * PI / 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_only_active_plane_changes() {
        let mut engine = RotationEngine::with_figure(hypercube(4, 2.0).unwrap(), 1.3);
        for plane in 0..engine.plane_count() {
            engine.tick(&rotating().with_active_plane(plane), 0.1 * (plane + 1) as f64);
        }

        let before: Vec<u64> = engine.angles().as_slice().iter().map(|a| a.to_bits()).collect();
        engine.tick(&rotating().with_active_plane(3), 0.37);
        let after: Vec<u64> = engine.angles().as_slice().iter().map(|a| a.to_bits()).collect();

        for i in 0..before.len() {
            if i == 3 {
                assert_ne!(before[i], after[i]);
            } else {
                assert_eq!(before[i], after[i], "plane {} changed", i);
            }
        }
    }

    #[test]
    fn test_active_plane_wraps() {
        let mut engine = cube_engine();
        let report = engine.tick(&rotating().with_active_plane(4), 1.0);
        assert_eq!(report.active_plane, 1);
        assert_eq!(engine.active_plane(), 1);
        assert!(report.changes.contains(FrameChanges::ACTIVE_PLANE));
    }

    #[test]
    fn test_switching_plane_keeps_other_angles() {
        let mut engine = cube_engine();
        engine.tick(&rotating(), 1.0);
        let first = engine.angles().get(0).unwrap();
        engine.tick(&rotating().with_active_plane(2), 0.5);
        assert_eq!(engine.angles().get(0).unwrap().to_bits(), first.to_bits());
        assert!((engine.angles().get(2).unwrap() - PI / 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_angles_stay_normalized_over_long_session() {
        let mut engine = cube_engine();
        let controls = rotating().with_step(StepMultiplier::Double);
        // 10_000 ticks of 1/60 s at π rad/s is ~83 full turns
        for _ in 0..10_000 {
            engine.tick(&controls, 1.0 / 60.0);
            let a = engine.angles().get(0).unwrap();
            assert!((0.0..FULL_TURN).contains(&a), "angle {} escaped range", a);
        }
        let reverse = controls.with_direction(Direction::Reverse);
        for _ in 0..10_000 {
            engine.tick(&reverse, 1.0 / 60.0);
            let a = engine.angles().get(0).unwrap();
            assert!((0.0..FULL_TURN).contains(&a), "angle {} escaped range", a);
        }
    }

    #[test]
    fn test_state_transitions_reported() {
        let mut engine = cube_engine();
        let on = engine.tick(&rotating(), 0.0);
        assert!(on.changes.contains(FrameChanges::STATE));
        assert_eq!(engine.state(), RotationState::Rotating);

        let still_on = engine.tick(&rotating(), 0.1);
        assert!(!still_on.changes.contains(FrameChanges::STATE));

        let off = engine.tick(&ControlInputs::new(), 0.1);
        assert!(off.changes.contains(FrameChanges::STATE));
        assert_eq!(engine.state(), RotationState::Idle);
    }

    #[test]
    fn test_invalid_frame_time_ignored() {
        let mut engine = cube_engine();
        let original = engine.figure().unwrap().clone();
        assert_eq!(engine.tick(&rotating(), -1.0).delta_angle, 0.0);
        assert_eq!(engine.tick(&rotating(), f64::NAN).delta_angle, 0.0);
        assert_eq!(engine.tick(&rotating(), f64::INFINITY).delta_angle, 0.0);
        assert_eq!(engine.figure().unwrap(), &original);
    }

    fn assert_finite(engine: &RotationEngine) {
        for v in engine.figure().unwrap().vertices() {
            assert!(v.iter().all(|c| c.is_finite()), "non-finite vertex {:?}", v);
        }
    }

    #[test]
    fn test_overflowing_frame_time_ignored() {
        let mut engine = cube_engine();
        let original = engine.figure().unwrap().clone();
        let report = engine.tick(&rotating().with_step(StepMultiplier::Double), 1e308);
        assert_eq!(report.delta_angle, 0.0);
        assert!(!report.changes.contains(FrameChanges::GEOMETRY));
        assert_eq!(engine.angles().get(0), Some(0.0));
        assert_finite(&engine);
        assert_eq!(engine.figure().unwrap(), &original);
    }

    #[test]
    fn test_invalid_angular_speed_uses_default() {
        for speed in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, -1.0] {
            let mut engine = RotationEngine::with_figure(hypercube(3, 2.0).unwrap(), speed);
            assert_eq!(engine.angular_speed(), DEFAULT_ANGULAR_SPEED);

            let report = engine.tick(&rotating(), 0.016);
            assert!((report.delta_angle - DEFAULT_ANGULAR_SPEED * 0.016).abs() < EPSILON);
            assert!((engine.angles().get(0).unwrap() - report.delta_angle).abs() < EPSILON);
            assert_finite(&engine);
        }
    }

    #[test]
    fn test_zero_angular_speed_kept() {
        let mut engine = RotationEngine::with_figure(hypercube(3, 2.0).unwrap(), 0.0);
        assert_eq!(engine.angular_speed(), 0.0);
        assert_eq!(engine.tick(&rotating(), 1.0).delta_angle, 0.0);
    }

    #[test]
    fn test_set_figure_dimension_mismatch() {
        let mut engine = RotationEngine::with_figure(hypercube(4, 1.0).unwrap(), 1.0);
        let err = engine.set_figure(hypercube(5, 1.0).unwrap()).unwrap_err();
        assert!(matches!(err, FigureError::DimensionMismatch { expected: 4, found: 5 }));
        assert_eq!(engine.dimension(), Some(4));
    }

    #[test]
    fn test_reload_resets_angles() {
        let mut engine = cube_engine();
        engine.tick(&rotating(), 1.0);
        engine.set_figure(hypercube(3, 4.0).unwrap()).unwrap();
        assert!(engine.angles().as_slice().iter().all(|&a| a == 0.0));
        assert_eq!(engine.polygon_count(), 6);
    }

    #[test]
    fn test_load_figure_str_rejects_and_keeps_state() {
        let mut engine = cube_engine();
        engine.tick(&rotating(), 0.3);
        let figure_before = engine.figure().unwrap().clone();
        let angles_before = engine.angles().clone();

        let err = engine
            .load_figure_str(r#"{ "Dimension": 2, "Polygons": [] }"#)
            .unwrap_err();
        assert!(matches!(err, FigureError::DimensionTooLow(2)));
        assert_eq!(engine.figure().unwrap(), &figure_before);
        assert_eq!(engine.angles(), &angles_before);
    }

    #[test]
    fn test_diagnostics_marks_active_plane() {
        let mut engine = cube_engine();
        engine.tick(&rotating().with_active_plane(1), 0.5);
        let diag = engine.diagnostics();
        assert_eq!(diag.readings.len(), 3);
        assert!(diag.readings[1].active);
        assert!(!diag.readings[0].active);
        assert!((diag.readings[1].degrees - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_without_figure_is_empty() {
        let engine = RotationEngine::default();
        assert!(engine.project(&Projection::Orthographic).is_empty());
        assert!(engine.bounds().is_none());
    }
}
