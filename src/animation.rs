use glam::Vec3;

/// World axis selector for spins and swings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Axis pair an orbit runs in. The first named axis carries the cosine
/// term, the second the sine term, so `Xy` traces `(cos t, sin t, 0)`
/// and `Yx` traces `(sin t, cos t, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitPlane {
    Xy,
    Yx,
    Yz,
    Xz,
}

impl OrbitPlane {
    fn compose(self, cos_term: f32, sin_term: f32) -> Vec3 {
        match self {
            OrbitPlane::Xy => Vec3::new(cos_term, sin_term, 0.0),
            OrbitPlane::Yx => Vec3::new(sin_term, cos_term, 0.0),
            OrbitPlane::Yz => Vec3::new(0.0, cos_term, sin_term),
            OrbitPlane::Xz => Vec3::new(cos_term, 0.0, sin_term),
        }
    }
}

/// Per-object animation strategy, fixed at scene setup and evaluated
/// every tick as a pure function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationFunction {
    /// No movement
    Static,
    /// Circle of `radius` in `plane`, phase-shifted by `phase`
    Orbit {
        plane: OrbitPlane,
        radius: f32,
        phase: f32,
    },
    /// Cosine oscillation along a single axis
    Swing {
        axis: Axis,
        amplitude: f32,
        phase: f32,
    },
    /// Constant drift
    Linear { velocity: Vec3 },
    /// Cosine on x, tangent on y. Unbounded near `t = pi/2 + k*pi`;
    /// deliberately left unclamped.
    TangentSweep { phase: f32 },
}

impl AnimationFunction {
    /// Positional offset from the object's base at elapsed time `t`
    pub fn offset(&self, t: f32) -> Vec3 {
        match *self {
            AnimationFunction::Static => Vec3::ZERO,
            AnimationFunction::Orbit {
                plane,
                radius,
                phase,
            } => {
                let angle = t + phase;
                plane.compose(radius * angle.cos(), radius * angle.sin())
            }
            AnimationFunction::Swing {
                axis,
                amplitude,
                phase,
            } => axis.unit() * (amplitude * (t + phase).cos()),
            AnimationFunction::Linear { velocity } => velocity * t,
            AnimationFunction::TangentSweep { phase } => {
                let angle = t + phase;
                Vec3::new(angle.cos(), angle.tan(), 0.0)
            }
        }
    }

    /// Unit-radius orbit with no phase shift
    pub fn orbit(plane: OrbitPlane) -> Self {
        AnimationFunction::Orbit {
            plane,
            radius: 1.0,
            phase: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn static_never_moves() {
        for t in [0.0, 1.0, 100.0] {
            assert_eq!(AnimationFunction::Static.offset(t), Vec3::ZERO);
        }
    }

    #[test]
    fn orbit_stays_on_circle() {
        let orbit = AnimationFunction::orbit(OrbitPlane::Xy);

        for i in 0..100 {
            let t = i as f32 * 0.37;
            let offset = orbit.offset(t);
            assert!(
                (offset.length_squared() - 1.0).abs() < EPSILON,
                "left unit circle at t={}",
                t
            );
            assert_eq!(offset.z, 0.0);
        }
    }

    #[test]
    fn orbit_at_zero_starts_on_cosine_axis() {
        // cos(0) = 1, sin(0) = 0
        let offset = AnimationFunction::orbit(OrbitPlane::Xy).offset(0.0);
        assert_eq!(offset, Vec3::new(1.0, 0.0, 0.0));

        let offset = AnimationFunction::orbit(OrbitPlane::Yx).offset(0.0);
        assert_eq!(offset, Vec3::new(0.0, 1.0, 0.0));

        let offset = AnimationFunction::orbit(OrbitPlane::Xz).offset(0.0);
        assert_eq!(offset, Vec3::new(1.0, 0.0, 0.0));

        let offset = AnimationFunction::orbit(OrbitPlane::Yz).offset(0.0);
        assert_eq!(offset, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn orbit_phase_shifts_the_angle() {
        let shifted = AnimationFunction::Orbit {
            plane: OrbitPlane::Xy,
            radius: 1.0,
            phase: FRAC_PI_2,
        };
        let offset = shifted.offset(0.0);

        assert!((offset.x - 0.0).abs() < EPSILON);
        assert!((offset.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn swing_oscillates_on_one_axis() {
        let swing = AnimationFunction::Swing {
            axis: Axis::X,
            amplitude: 1.0,
            phase: 0.0,
        };

        assert_eq!(swing.offset(0.0), Vec3::new(1.0, 0.0, 0.0));
        let half_turn = swing.offset(PI);
        assert!((half_turn.x + 1.0).abs() < EPSILON);
        assert_eq!(half_turn.y, 0.0);
        assert_eq!(half_turn.z, 0.0);
    }

    #[test]
    fn linear_drifts_at_constant_rate() {
        let drift = AnimationFunction::Linear {
            velocity: Vec3::new(0.5, 0.0, -1.0),
        };

        assert_eq!(drift.offset(0.0), Vec3::ZERO);
        assert_eq!(drift.offset(2.0), Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn tangent_sweep_is_unbounded_near_pole() {
        // Known instability: there is no guard near t = pi/2 + k*pi,
        // on purpose.
        let sweep = AnimationFunction::TangentSweep { phase: 0.0 };

        let near_pole = sweep.offset(FRAC_PI_2 - 1e-4);
        assert!(
            near_pole.y.abs() > 1_000.0,
            "expected blowup, got {}",
            near_pole.y
        );

        // Away from the pole it behaves
        let tame = sweep.offset(0.5);
        assert!(tame.y.abs() < 1.0);
        assert!((tame.x - 0.5_f32.cos()).abs() < EPSILON);
    }
}
