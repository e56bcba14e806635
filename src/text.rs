use anyhow::Result;
use glam::Vec2;

use crate::font::{parse_outline, signed_area, Contour, TypefaceFont};
use crate::geometry::Geometry;

/// Text extrusion parameters
#[derive(Debug, Clone, Copy)]
pub struct TextParams {
    pub size: f32,
    pub depth: f32,
    pub curve_segments: u32,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            size: 0.5,
            depth: 0.2,
            curve_segments: 5,
        }
    }
}

/// Build an extruded, centered 3D mesh for `text`.
///
/// Glyph outlines are flattened, ear-clip triangulated into front and
/// back caps, and joined by side walls. Characters missing from the font
/// fall back to `?`, or are skipped when the font has no `?` either.
//
// TODO: carve hole contours (the counters of 'o', 'e', ...) out of the
// caps instead of overdrawing them.
pub fn text_geometry(font: &TypefaceFont, text: &str, params: &TextParams) -> Result<Geometry> {
    let scale = font.scale(params.size);
    let mut geometry = Geometry::empty();
    let mut pen_x = 0.0f32;

    for ch in text.chars() {
        let glyph = match font.glyph(ch).or_else(|| font.glyph('?')) {
            Some(glyph) => glyph,
            None => continue,
        };

        if !glyph.o.is_empty() {
            let contours = parse_outline(&glyph.o, params.curve_segments)?;
            for contour in &contours {
                let placed: Contour = contour
                    .iter()
                    .map(|p| *p * scale + Vec2::new(pen_x, 0.0))
                    .collect();
                extrude_contour(&mut geometry, &placed, params.depth);
            }
        }

        pen_x += glyph.ha * scale;
    }

    geometry.center();
    geometry.rebuild_edges();
    Ok(geometry)
}

/// Ear-clip triangulation of a simple polygon. Returns index triples
/// into `points`, wound counter-clockwise.
pub fn triangulate(points: &[Vec2]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut order: Vec<u32> = (0..n as u32).collect();
    if signed_area(points) < 0.0 {
        order.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    let mut i = 0usize;
    let mut since_last_ear = 0usize;

    while order.len() > 3 {
        let len = order.len();
        let prev = order[(i + len - 1) % len];
        let curr = order[i % len];
        let next = order[(i + 1) % len];

        if is_ear(points, &order, prev, curr, next) {
            triangles.push([prev, curr, next]);
            order.remove(i % len);
            since_last_ear = 0;
        } else {
            i += 1;
            since_last_ear += 1;
            if since_last_ear > len {
                // Degenerate input (self-intersecting or collinear run);
                // emit what we have rather than spinning forever
                break;
            }
        }
        if i >= order.len() {
            i = 0;
        }
    }

    if order.len() == 3 {
        triangles.push([order[0], order[1], order[2]]);
    }
    triangles
}

fn is_ear(points: &[Vec2], order: &[u32], a: u32, b: u32, c: u32) -> bool {
    let pa = points[a as usize];
    let pb = points[b as usize];
    let pc = points[c as usize];

    // Reflex corners cannot be clipped
    if cross(pb - pa, pc - pb) <= 0.0 {
        return false;
    }

    for &other in order {
        if other == a || other == b || other == c {
            continue;
        }
        if point_in_triangle(points[other as usize], pa, pb, pc) {
            return false;
        }
    }
    true
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross(b - a, p - a);
    let d2 = cross(c - b, p - b);
    let d3 = cross(a - c, p - c);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Front cap, back cap and side walls for one closed contour,
/// extruded from z = 0 to z = depth
fn extrude_contour(geometry: &mut Geometry, contour: &[Vec2], depth: f32) {
    let triangles = triangulate(contour);
    if triangles.is_empty() {
        return;
    }

    // Front cap, normal +z
    let front_base = geometry.positions.len() as u32;
    for p in contour {
        geometry.positions.push([p.x, p.y, depth]);
        geometry.normals.push([0.0, 0.0, 1.0]);
    }
    for [a, b, c] in &triangles {
        geometry
            .indices
            .extend_from_slice(&[front_base + a, front_base + b, front_base + c]);
    }

    // Back cap, normal -z, reversed winding
    let back_base = geometry.positions.len() as u32;
    for p in contour {
        geometry.positions.push([p.x, p.y, 0.0]);
        geometry.normals.push([0.0, 0.0, -1.0]);
    }
    for [a, b, c] in &triangles {
        geometry
            .indices
            .extend_from_slice(&[back_base + c, back_base + b, back_base + a]);
    }

    // Side walls, one flat-shaded quad per contour edge
    let n = contour.len();
    for i in 0..n {
        let from = contour[i];
        let to = contour[(i + 1) % n];
        let edge = to - from;
        if edge.length_squared() == 0.0 {
            continue;
        }
        // Outward for the winding the font authored
        let normal = Vec2::new(edge.y, -edge.x).normalize();
        let normal = [normal.x, normal.y, 0.0];

        let base = geometry.positions.len() as u32;
        geometry.positions.push([from.x, from.y, depth]);
        geometry.positions.push([to.x, to.y, depth]);
        geometry.positions.push([to.x, to.y, 0.0]);
        geometry.positions.push([from.x, from.y, 0.0]);
        for _ in 0..4 {
            geometry.normals.push(normal);
        }
        geometry
            .indices
            .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }
}
