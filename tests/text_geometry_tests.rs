use glam::Vec2;
use orbit_scenes::font::{signed_area, TypefaceFont};
use orbit_scenes::text::{text_geometry, triangulate, TextParams};

const FIXTURE_FONT: &str = r#"{
    "familyName": "Fixture Sans",
    "resolution": 1000,
    "boundingBox": {"xMin": 0, "yMin": -200, "xMax": 800, "yMax": 800},
    "glyphs": {
        "I": {"ha": 400, "o": "m 100 0 l 300 0 l 300 700 l 100 700"},
        "v": {"ha": 500, "o": "m 0 400 l 100 400 l 250 100 l 400 400 l 500 400 l 250 0"},
        "?": {"ha": 600, "o": "m 0 0 l 400 0 l 400 400 l 0 400"},
        " ": {"ha": 300, "o": ""}
    }
}"#;

fn fixture_font() -> TypefaceFont {
    serde_json::from_str(FIXTURE_FONT).expect("fixture font parses")
}

fn polygon_area(points: &[Vec2], triangles: &[[u32; 3]]) -> f32 {
    triangles
        .iter()
        .map(|[a, b, c]| {
            let pa = points[*a as usize];
            let pb = points[*b as usize];
            let pc = points[*c as usize];
            ((pb - pa).perp_dot(pc - pa) / 2.0).abs()
        })
        .sum()
}

#[cfg(test)]
mod text_geometry_tests {
    use super::*;

    #[test]
    fn test_triangulate_convex_polygon() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];

        let triangles = triangulate(&square);

        assert_eq!(triangles.len(), 2);
        assert!((polygon_area(&square, &triangles) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangulate_concave_polygon() {
        // L-shape: 6 vertices, area 3
        let shape = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];

        let triangles = triangulate(&shape);

        assert_eq!(triangles.len(), 4);
        assert!((polygon_area(&shape, &triangles) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangulate_handles_clockwise_input() {
        let square_cw = vec![
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 0.0),
        ];
        assert!(signed_area(&square_cw) < 0.0);

        let triangles = triangulate(&square_cw);

        assert_eq!(triangles.len(), 2);
        assert!((polygon_area(&square_cw, &triangles) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangulate_rejects_degenerate_input() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Vec2::ZERO, Vec2::ONE]).is_empty());
    }

    #[test]
    fn test_text_geometry_is_centered() {
        let font = fixture_font();
        let geometry =
            text_geometry(&font, "IvI", &TextParams::default()).expect("text geometry");

        let (min, max) = geometry.bounding_box();
        let mid = (min + max) * 0.5;
        assert!(mid.length() < 1e-4, "bounding box midpoint {:?}", mid);
    }

    #[test]
    fn test_text_geometry_depth_matches_params() {
        let font = fixture_font();
        let params = TextParams {
            size: 0.5,
            depth: 0.2,
            curve_segments: 5,
        };
        let geometry = text_geometry(&font, "I", &params).expect("text geometry");

        let (min, max) = geometry.bounding_box();
        assert!((max.z - min.z - params.depth).abs() < 1e-5);
    }

    #[test]
    fn test_text_size_scales_with_resolution() {
        let font = fixture_font();
        let params = TextParams {
            size: 0.5,
            depth: 0.2,
            curve_segments: 5,
        };
        let geometry = text_geometry(&font, "I", &params).expect("text geometry");

        // Glyph 'I' is 700 font units tall at resolution 1000
        let (min, max) = geometry.bounding_box();
        assert!((max.y - min.y - 0.35).abs() < 1e-5);
    }

    #[test]
    fn test_missing_glyphs_fall_back_to_question_mark() {
        let font = fixture_font();
        let with_fallback =
            text_geometry(&font, "z", &TextParams::default()).expect("text geometry");
        let question = text_geometry(&font, "?", &TextParams::default()).expect("text geometry");

        assert_eq!(with_fallback.vertex_count(), question.vertex_count());
        assert!(with_fallback.vertex_count() > 0);
    }

    #[test]
    fn test_space_advances_without_vertices() {
        let font = fixture_font();
        let spaced = text_geometry(&font, "I I", &TextParams::default()).expect("text geometry");
        let pair = text_geometry(&font, "II", &TextParams::default()).expect("text geometry");

        // Same vertex count, wider bounds
        assert_eq!(spaced.vertex_count(), pair.vertex_count());
        let (spaced_min, spaced_max) = spaced.bounding_box();
        let (pair_min, pair_max) = pair.bounding_box();
        assert!(spaced_max.x - spaced_min.x > pair_max.x - pair_min.x);
    }

    #[test]
    fn test_extrusion_has_caps_and_walls() {
        let font = fixture_font();
        let geometry = text_geometry(&font, "I", &TextParams::default()).expect("text geometry");

        // One rectangular contour: 4 cap vertices front and back plus
        // 4 vertices per side-wall edge
        assert_eq!(geometry.vertex_count(), 4 + 4 + 4 * 4);
        // Caps: 2 triangles each; walls: 2 triangles per edge
        assert_eq!(geometry.triangle_count(), 2 + 2 + 4 * 2);
    }
}
