//! # Hexagonal Frustum
//!
//! A prism whose top and bottom rings have independent radii. The lateral
//! normals are tilted to stay perpendicular to the slanted side. With equal
//! radii the output is the plain [`HexPrism`](super::HexPrism).

use std::f32::consts::PI;

use super::triangulate::{circular_uv, fan, quad_strip, FanWinding};
use super::{Mesh, Vertex};
use crate::error::{check_dimension, check_subdivision, Result};

/// Smallest segment count that still encloses a volume.
pub const MIN_SEGMENTS: u32 = 3;
/// Upper bound on ring subdivisions for revolved shapes.
pub const MAX_SEGMENTS: u32 = 4096;

/// Configuration for a tapered hexagonal prism.
///
/// # Examples
///
/// ```
/// use kessel::gfx::geometry::HexFrustum;
///
/// let mesh = HexFrustum::new(0.25, 0.5, 1.0).generate()?;
/// assert_eq!(mesh.vertex_count(), 30);
/// # Ok::<(), kessel::error::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexFrustum {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for HexFrustum {
    fn default() -> Self {
        Self {
            radius_top: 0.5,
            radius_bottom: 0.5,
            height: 1.0,
            segments: 6,
        }
    }
}

impl HexFrustum {
    pub fn new(radius_top: f32, radius_bottom: f32, height: f32) -> Self {
        Self {
            radius_top,
            radius_bottom,
            height,
            ..Default::default()
        }
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn generate(&self) -> Result<Mesh> {
        const SHAPE: &str = "HexFrustum";
        let radius_top = check_dimension(SHAPE, "radius_top", self.radius_top)?;
        let radius_bottom = check_dimension(SHAPE, "radius_bottom", self.radius_bottom)?;
        let height = check_dimension(SHAPE, "height", self.height)?;
        let segments =
            check_subdivision(SHAPE, "segments", self.segments, MIN_SEGMENTS, MAX_SEGMENTS)?;

        let mesh = revolve(radius_top, radius_bottom, height, segments, |cos, sin| {
            slant_normal(cos, sin, radius_top, radius_bottom, height)
        });
        log::debug!(
            "Generated {SHAPE} (r_top={radius_top}, r_bottom={radius_bottom}, h={height}, segments={segments}): {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.index_count()
        );
        Ok(mesh)
    }
}

/// Generate a tapered hexagonal prism with the default six segments
pub fn generate_hex_frustum(radius_top: f32, radius_bottom: f32, height: f32) -> Result<Mesh> {
    HexFrustum::new(radius_top, radius_bottom, height).generate()
}

/// Outward unit normal of the slanted side at ring angle `θ`.
///
/// The side runs from `radius_top` at `+height/2` down to `radius_bottom` at
/// `-height/2`; the normal leans up when the bottom is wider and down when
/// the top is wider.
pub fn slant_normal(
    cos_theta: f32,
    sin_theta: f32,
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
) -> [f32; 3] {
    let taper = radius_bottom - radius_top;
    let nx = cos_theta * height;
    let nz = sin_theta * height;
    let len = (nx * nx + taper * taper + nz * nz).sqrt();
    [nx / len, taper / len, nz / len]
}

/// Builds a capped solid of revolution from two rings.
///
/// Layout, in insertion order:
/// 1. top center, then `segments + 1` top ring vertices (the last repeats the
///    first angle so the band has a seam),
/// 2. bottom center and bottom ring, mirrored,
/// 3. `segments + 1` interleaved (top, bottom) band vertices carrying
///    `lateral_normal(cos θ, sin θ)`.
///
/// The top cap is a forward fan, the bottom cap a reversed fan, and the band
/// a quad strip, so every face ends up with the same winding.
pub(crate) fn revolve(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
    lateral_normal: impl Fn(f32, f32) -> [f32; 3],
) -> Mesh {
    let half_height = height * 0.5;
    let step = 2.0 * PI / segments as f32;
    let ring = segments as usize + 1;
    let mut mesh = Mesh::with_capacity(4 * ring + 2, 12 * segments as usize);

    let angle = |i: u32| {
        let theta = i as f32 * step;
        (theta.cos(), theta.sin())
    };

    // Caps
    let mut cap = |y: f32, radius: f32, normal: [f32; 3]| {
        let center = mesh.push_vertex(Vertex::new([0.0, y, 0.0], [0.5, 0.5], normal));
        for i in 0..=segments {
            let (cos, sin) = angle(i);
            mesh.push_vertex(Vertex::new(
                [radius * cos, y, radius * sin],
                circular_uv(cos, sin),
                normal,
            ));
        }
        center
    };
    let top_center = cap(half_height, radius_top, [0.0, 1.0, 0.0]);
    let bottom_center = cap(-half_height, radius_bottom, [0.0, -1.0, 0.0]);

    // Lateral band
    let side_start = mesh.next_index();
    for i in 0..=segments {
        let (cos, sin) = angle(i);
        let u = 1.0 - i as f32 / segments as f32;
        let normal = lateral_normal(cos, sin);

        mesh.push_vertex(Vertex::new(
            [radius_top * cos, half_height, radius_top * sin],
            [u, 1.0],
            normal,
        ));
        mesh.push_vertex(Vertex::new(
            [radius_bottom * cos, -half_height, radius_bottom * sin],
            [u, 0.0],
            normal,
        ));
    }

    mesh.extend_triangles(fan(top_center, top_center + 1, segments, FanWinding::Forward));
    mesh.extend_triangles(fan(
        bottom_center,
        bottom_center + 1,
        segments,
        FanWinding::Reversed,
    ));
    mesh.extend_triangles(quad_strip(side_start, segments));

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::gfx::geometry::tests::{assert_outward_clockwise, assert_well_formed, init_logging};
    use crate::gfx::geometry::HexPrism;

    const EPS: f32 = 1e-5;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for k in 0..3 {
            assert!((a[k] - b[k]).abs() < EPS, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_frustum_counts() {
        init_logging();
        let mesh = HexFrustum::new(0.3, 0.7, 1.5).generate().unwrap();
        assert_eq!(mesh.vertex_count(), 30);
        assert_eq!(mesh.index_count(), 72);
        assert_well_formed(&mesh);
        assert_outward_clockwise(&mesh);
    }

    #[test]
    fn test_caps_use_their_own_radius() {
        let mesh = HexFrustum::new(0.25, 1.0, 2.0).generate().unwrap();
        let v = mesh.vertices();

        assert_close(v[0].position, [0.0, 1.0, 0.0]);
        assert_close(v[1].position, [0.25, 1.0, 0.0]);
        assert_close(v[8].position, [0.0, -1.0, 0.0]);
        assert_close(v[9].position, [1.0, -1.0, 0.0]);

        // Band pairs: top ring radius, then bottom ring radius
        assert_close(v[16].position, [0.25, 1.0, 0.0]);
        assert_close(v[17].position, [1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_slant_normal_is_perpendicular_to_side() {
        let (rt, rb, h) = (0.2_f32, 0.9_f32, 1.3_f32);
        for i in 0..12 {
            let theta = i as f32 * PI / 6.0;
            let (cos, sin) = (theta.cos(), theta.sin());
            let n = slant_normal(cos, sin, rt, rb, h);

            // Direction from top ring point down to bottom ring point
            let side = [(rb - rt) * cos, -h, (rb - rt) * sin];
            let dot = n[0] * side[0] + n[1] * side[1] + n[2] * side[2];
            assert!(dot.abs() < EPS, "normal not perpendicular at {theta}: {dot}");

            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < EPS);

            // Outward: same side as the radial direction
            assert!(n[0] * cos + n[2] * sin > 0.0);
        }
    }

    #[test]
    fn test_normal_tilt_follows_taper() {
        let wide_bottom = HexFrustum::new(0.2, 0.8, 1.0).generate().unwrap();
        let wide_top = HexFrustum::new(0.8, 0.2, 1.0).generate().unwrap();
        assert!(wide_bottom.vertices()[16].normal[1] > 0.0);
        assert!(wide_top.vertices()[16].normal[1] < 0.0);
    }

    #[test]
    fn test_equal_radii_match_hex_prism() {
        for &(r, h) in &[(0.5_f32, 1.0_f32), (1.0, 2.0), (2.5, 0.3)] {
            let frustum = HexFrustum::new(r, r, h).generate().unwrap();
            let prism = HexPrism::new(r, h).generate().unwrap();

            assert_eq!(frustum.indices(), prism.indices());
            assert_eq!(frustum.vertex_count(), prism.vertex_count());
            for (a, b) in frustum.vertices().iter().zip(prism.vertices()) {
                assert_close(a.position, b.position);
                assert_close(a.normal, b.normal);
                assert_eq!(a.tex_coords, b.tex_coords);
            }
        }
    }

    #[test]
    fn test_rejects_each_invalid_radius() {
        let err = HexFrustum::new(0.0, 1.0, 1.0).generate().unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidDimension { parameter: "radius_top", .. }
        ));

        let err = HexFrustum::new(1.0, -0.5, 1.0).generate().unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidDimension { parameter: "radius_bottom", .. }
        ));

        let err = HexFrustum::new(1.0, 1.0, 0.0).generate().unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidDimension { parameter: "height", .. }
        ));
    }

    #[test]
    fn test_rejects_too_few_segments() {
        let err = HexFrustum::default().with_segments(2).generate().unwrap_err();
        assert!(matches!(
            err,
            MeshError::SubdivisionOutOfRange { value: 2, min: 3, .. }
        ));
    }
}
