use std::collections::HashMap;
use std::str::SplitWhitespace;

use anyhow::{bail, Context, Result};
use glam::Vec2;
use serde::Deserialize;

/// A three.js-style typeface.json font: glyph outlines expressed in font
/// units at the given resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct TypefaceFont {
    #[serde(rename = "familyName", default)]
    pub family_name: String,
    pub resolution: f32,
    #[serde(rename = "boundingBox")]
    pub bounding_box: FontBoundingBox,
    pub glyphs: HashMap<String, Glyph>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FontBoundingBox {
    #[serde(rename = "xMin")]
    pub x_min: f32,
    #[serde(rename = "yMin")]
    pub y_min: f32,
    #[serde(rename = "xMax")]
    pub x_max: f32,
    #[serde(rename = "yMax")]
    pub y_max: f32,
}

/// Single glyph: horizontal advance plus its outline command string
#[derive(Debug, Clone, Deserialize)]
pub struct Glyph {
    pub ha: f32,
    #[serde(default)]
    pub o: String,
}

impl TypefaceFont {
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch.to_string())
    }

    /// Scale factor from font units to world units for a given text size
    pub fn scale(&self, size: f32) -> f32 {
        size / self.resolution
    }
}

/// Closed outline loop in font units
pub type Contour = Vec<Vec2>;

/// Parse a glyph outline command string into closed contours.
///
/// The format is whitespace-separated commands: `m x y` starts a contour,
/// `l x y` appends a line, `q x y cx cy` a quadratic curve and
/// `b x y c1x c1y c2x c2y` a cubic, each naming the end point first.
/// Curves are flattened into `curve_segments` line segments.
pub fn parse_outline(outline: &str, curve_segments: u32) -> Result<Vec<Contour>> {
    let segments = curve_segments.max(1);
    let mut tokens = outline.split_whitespace();
    let mut contours = Vec::new();
    let mut current: Contour = Vec::new();
    let mut cursor = Vec2::ZERO;

    while let Some(command) = tokens.next() {
        match command {
            "m" => {
                finish_contour(&mut contours, &mut current);
                cursor = read_point(&mut tokens)?;
                current.push(cursor);
            }
            "l" => {
                cursor = read_point(&mut tokens)?;
                current.push(cursor);
            }
            "q" => {
                let end = read_point(&mut tokens)?;
                let control = read_point(&mut tokens)?;
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    current.push(quadratic_point(cursor, control, end, t));
                }
                cursor = end;
            }
            "b" => {
                let end = read_point(&mut tokens)?;
                let control1 = read_point(&mut tokens)?;
                let control2 = read_point(&mut tokens)?;
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    current.push(cubic_point(cursor, control1, control2, end, t));
                }
                cursor = end;
            }
            other => bail!("unknown outline command '{other}'"),
        }
    }
    finish_contour(&mut contours, &mut current);

    Ok(contours)
}

fn finish_contour(contours: &mut Vec<Contour>, current: &mut Contour) {
    // Degenerate loops (fewer than 3 points) cannot enclose area
    if current.len() >= 3 {
        contours.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

fn read_point(tokens: &mut SplitWhitespace) -> Result<Vec2> {
    let x = tokens
        .next()
        .context("outline truncated: missing x coordinate")?
        .parse::<f32>()
        .context("outline coordinate is not a number")?;
    let y = tokens
        .next()
        .context("outline truncated: missing y coordinate")?
        .parse::<f32>()
        .context("outline coordinate is not a number")?;
    Ok(Vec2::new(x, y))
}

fn quadratic_point(start: Vec2, control: Vec2, end: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    start * (u * u) + control * (2.0 * u * t) + end * (t * t)
}

fn cubic_point(start: Vec2, control1: Vec2, control2: Vec2, end: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    start * (u * u * u)
        + control1 * (3.0 * u * u * t)
        + control2 * (3.0 * u * t * t)
        + end * (t * t * t)
}

/// Twice the signed area of a closed polygon; positive when
/// counter-clockwise
pub fn signed_area(points: &[Vec2]) -> f32 {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_polyline_outline() {
        let contours = parse_outline("m 0 0 l 10 0 l 10 10 l 0 10", 5).expect("parse");

        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 4);
        assert_eq!(contours[0][0], Vec2::ZERO);
        assert_eq!(contours[0][2], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn each_moveto_starts_a_contour() {
        let contours =
            parse_outline("m 0 0 l 1 0 l 1 1 m 5 5 l 6 5 l 6 6", 5).expect("parse");

        assert_eq!(contours.len(), 2);
        assert_eq!(contours[1][0], Vec2::new(5.0, 5.0));
    }

    #[test]
    fn quadratic_flattens_to_segment_count() {
        let contours = parse_outline("m 0 0 l 4 0 q 0 4 4 4", 6).expect("parse");

        // moveto + lineto + 6 curve samples
        assert_eq!(contours[0].len(), 8);
        // Curve lands exactly on its end point
        assert_eq!(*contours[0].last().expect("points"), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn cubic_flattens_to_segment_count() {
        let contours =
            parse_outline("m 0 0 l 4 0 b 0 4 4 2 2 4", 4).expect("parse");

        assert_eq!(contours[0].len(), 6);
        assert_eq!(*contours[0].last().expect("points"), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(parse_outline("m 0 0 z", 5).is_err());
    }

    #[test]
    fn rejects_truncated_coordinates() {
        assert!(parse_outline("m 0", 5).is_err());
        assert!(parse_outline("m 0 0 l 1", 5).is_err());
    }

    #[test]
    fn drops_degenerate_contours() {
        let contours = parse_outline("m 0 0 l 1 0 m 2 2 l 3 2 l 3 3", 5).expect("parse");
        assert_eq!(contours.len(), 1);
    }

    #[test]
    fn signed_area_orientation() {
        let ccw = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert!(signed_area(&ccw) > 0.0);

        let cw: Vec<Vec2> = ccw.iter().rev().copied().collect();
        assert!(signed_area(&cw) < 0.0);
    }

    #[test]
    fn parses_minimal_typeface_json() {
        let json = r#"{
            "familyName": "Test Sans",
            "resolution": 1000,
            "boundingBox": {"xMin": -100, "yMin": -250, "xMax": 1100, "yMax": 900},
            "glyphs": {
                "a": {"ha": 500, "o": "m 0 0 l 400 0 l 400 400 l 0 400"},
                " ": {"ha": 300, "o": ""}
            }
        }"#;

        let font: TypefaceFont = serde_json::from_str(json).expect("typeface");
        assert_eq!(font.family_name, "Test Sans");
        assert_eq!(font.resolution, 1000.0);
        assert_eq!(font.glyph('a').expect("glyph a").ha, 500.0);
        assert!(font.glyph(' ').expect("space").o.is_empty());
        assert!(font.glyph('x').is_none());
        assert_eq!(font.scale(0.5), 0.0005);
    }
}
