use glam::Vec3;
use orbit_scenes::animation::{AnimationFunction, Axis, OrbitPlane};
use std::f32::consts::{FRAC_PI_2, PI};

#[cfg(test)]
mod animation_tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_every_orbit_plane_stays_on_unit_circle() {
        let planes = [
            OrbitPlane::Xy,
            OrbitPlane::Yx,
            OrbitPlane::Yz,
            OrbitPlane::Xz,
        ];

        for plane in planes {
            let orbit = AnimationFunction::orbit(plane);
            for i in 0..500 {
                let t = i as f32 * 0.05;
                let offset = orbit.offset(t);
                assert!(
                    (offset.length_squared() - 1.0).abs() < EPSILON,
                    "{:?} left the unit circle at t={}",
                    plane,
                    t
                );
            }
        }
    }

    #[test]
    fn test_orbit_offset_applied_to_base_keeps_circle_property() {
        let base = Vec3::new(-1.0, -1.0, -1.0);
        let orbit = AnimationFunction::orbit(OrbitPlane::Xy);

        for i in 0..200 {
            let t = i as f32 * 0.13;
            let position = base + orbit.offset(t);
            let dx = position.x - base.x;
            let dy = position.y - base.y;
            assert!((dx * dx + dy * dy - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_first_cube_position_at_time_zero() {
        // cos(0) = 1, sin(0) = 0, so the cube based at (-1,-1,-1)
        // starts at (0,-1,-1)
        let base = Vec3::new(-1.0, -1.0, -1.0);
        let orbit = AnimationFunction::orbit(OrbitPlane::Xy);

        let position = base + orbit.offset(0.0);
        assert_eq!(position, Vec3::new(0.0, -1.0, -1.0));
    }

    #[test]
    fn test_orbit_radius_scales_offset() {
        let orbit = AnimationFunction::Orbit {
            plane: OrbitPlane::Xz,
            radius: 12.0,
            phase: 0.0,
        };

        for i in 0..100 {
            let t = i as f32 * 0.21;
            let offset = orbit.offset(t);
            assert!((offset.length() - 12.0).abs() < 1e-3);
            assert_eq!(offset.y, 0.0);
        }
    }

    #[test]
    fn test_swing_is_bounded_by_amplitude() {
        let swing = AnimationFunction::Swing {
            axis: Axis::X,
            amplitude: 1.0,
            phase: 0.0,
        };

        for i in 0..500 {
            let t = i as f32 * 0.07;
            let offset = swing.offset(t);
            assert!(offset.x.abs() <= 1.0 + EPSILON);
            assert_eq!(offset.y, 0.0);
            assert_eq!(offset.z, 0.0);
        }
    }

    #[test]
    fn test_tangent_sweep_blows_up_at_poles() {
        // The tangent animation is deliberately unclamped; this pins
        // down the known instability near t = pi/2 + k*pi
        let sweep = AnimationFunction::TangentSweep { phase: 0.0 };

        for k in 0..3 {
            let t = FRAC_PI_2 + k as f32 * PI - 1e-4;
            let offset = sweep.offset(t);
            assert!(
                offset.y.abs() > 100.0,
                "expected unbounded y near pole {}, got {}",
                k,
                offset.y
            );
        }
    }

    #[test]
    fn test_tangent_sweep_cosine_axis_is_tame() {
        let sweep = AnimationFunction::TangentSweep { phase: 0.0 };

        for i in 0..100 {
            let t = i as f32 * 0.31;
            assert!(sweep.offset(t).x.abs() <= 1.0 + EPSILON);
        }
    }

    #[test]
    fn test_static_and_linear_behave() {
        assert_eq!(AnimationFunction::Static.offset(123.0), Vec3::ZERO);

        let drift = AnimationFunction::Linear {
            velocity: Vec3::new(1.0, 2.0, 3.0),
        };
        assert_eq!(drift.offset(0.5), Vec3::new(0.5, 1.0, 1.5));
    }
}
