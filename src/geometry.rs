use std::collections::HashSet;

use glam::Vec3;

/// Indexed triangle mesh with a derived line list for wireframe draws
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub edges: Vec<u32>,
}

impl Geometry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds of all vertices
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in &self.positions {
            let p = Vec3::from_array(*p);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Translate so the bounding-box midpoint sits at the origin
    pub fn center(&mut self) {
        if self.positions.is_empty() {
            return;
        }
        let (min, max) = self.bounding_box();
        let offset = (min + max) * 0.5;
        for p in &mut self.positions {
            p[0] -= offset.x;
            p[1] -= offset.y;
            p[2] -= offset.z;
        }
    }

    /// Recompute the unique-edge line list from the triangle indices
    pub fn rebuild_edges(&mut self) {
        let mut seen = HashSet::new();
        self.edges.clear();
        for triangle in self.indices.chunks_exact(3) {
            for (a, b) in [
                (triangle[0], triangle[1]),
                (triangle[1], triangle[2]),
                (triangle[2], triangle[0]),
            ] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    self.edges.push(a);
                    self.edges.push(b);
                }
            }
        }
    }

    /// Box of the given dimensions with each face split into
    /// `segments` x `segments` quads
    pub fn cuboid(width: f32, height: f32, depth: f32, segments: u32) -> Self {
        let grid = segments.max(1);
        let mut geometry = Geometry::empty();

        // One call per face: component slots for (u, v, w) plus the sign
        // conventions three.js uses for BoxGeometry
        build_plane(&mut geometry, 2, 1, 0, -1.0, -1.0, depth, height, width / 2.0, grid);
        build_plane(&mut geometry, 2, 1, 0, 1.0, -1.0, depth, height, -width / 2.0, grid);
        build_plane(&mut geometry, 0, 2, 1, 1.0, 1.0, width, depth, height / 2.0, grid);
        build_plane(&mut geometry, 0, 2, 1, 1.0, -1.0, width, depth, -height / 2.0, grid);
        build_plane(&mut geometry, 0, 1, 2, 1.0, -1.0, width, height, depth / 2.0, grid);
        build_plane(&mut geometry, 0, 1, 2, -1.0, -1.0, width, height, -depth / 2.0, grid);

        geometry.rebuild_edges();
        geometry
    }

    /// Torus around the z axis
    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        let radial = radial_segments.max(2);
        let tubular = tubular_segments.max(3);
        let mut geometry = Geometry::empty();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * std::f32::consts::TAU;
            for i in 0..=tubular {
                let u = i as f32 / tubular as f32 * std::f32::consts::TAU;

                let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
                let position = Vec3::new(
                    (radius + tube * v.cos()) * u.cos(),
                    (radius + tube * v.cos()) * u.sin(),
                    tube * v.sin(),
                );
                let normal = (position - center).normalize_or_zero();

                geometry.positions.push(position.to_array());
                geometry.normals.push(normal.to_array());
            }
        }

        for j in 1..=radial {
            for i in 1..=tubular {
                let a = (tubular + 1) * j + i - 1;
                let b = (tubular + 1) * (j - 1) + i - 1;
                let c = (tubular + 1) * (j - 1) + i;
                let d = (tubular + 1) * j + i;
                geometry.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        geometry.rebuild_edges();
        geometry
    }

    /// Regular icosahedron scaled to `radius`
    pub fn icosahedron(radius: f32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

        let raw: [[f32; 3]; 12] = [
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ];

        let faces: [[u32; 3]; 20] = [
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        let mut geometry = Geometry::empty();
        for vertex in raw {
            let unit = Vec3::from_array(vertex).normalize();
            geometry.positions.push((unit * radius).to_array());
            geometry.normals.push(unit.to_array());
        }
        for face in faces {
            geometry.indices.extend_from_slice(&face);
        }

        geometry.rebuild_edges();
        geometry
    }
}

fn build_plane(
    geometry: &mut Geometry,
    u: usize,
    v: usize,
    w: usize,
    udir: f32,
    vdir: f32,
    width: f32,
    height: f32,
    depth: f32,
    grid: u32,
) {
    let base = geometry.positions.len() as u32;
    let seg_width = width / grid as f32;
    let seg_height = height / grid as f32;

    for iy in 0..=grid {
        let y = iy as f32 * seg_height - height / 2.0;
        for ix in 0..=grid {
            let x = ix as f32 * seg_width - width / 2.0;

            let mut position = [0.0f32; 3];
            position[u] = x * udir;
            position[v] = y * vdir;
            position[w] = depth;

            let mut normal = [0.0f32; 3];
            normal[w] = if depth >= 0.0 { 1.0 } else { -1.0 };

            geometry.positions.push(position);
            geometry.normals.push(normal);
        }
    }

    for iy in 0..grid {
        for ix in 0..grid {
            let a = base + ix + (grid + 1) * iy;
            let b = base + ix + (grid + 1) * (iy + 1);
            let c = base + (ix + 1) + (grid + 1) * (iy + 1);
            let d = base + (ix + 1) + (grid + 1) * iy;
            geometry.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
}
