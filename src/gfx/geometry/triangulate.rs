//! Fan and strip layouts converted to triangle lists, plus the planar UV
//! projection used by circular caps.

/// Winding of a triangle fan relative to the ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanWinding {
    /// `(center, ring[k], ring[k + 1])`
    Forward,
    /// `(center, ring[k + 1], ring[k])`, used by caps facing the other way
    Reversed,
}

/// Triangles of a fan around `center` over a ring of `segments + 1` vertices
/// starting at `ring_start`. The last ring vertex closes the seam, so no index
/// wraps around.
pub fn fan(
    center: u32,
    ring_start: u32,
    segments: u32,
    winding: FanWinding,
) -> impl Iterator<Item = [u32; 3]> {
    (0..segments).map(move |k| {
        let current = ring_start + k;
        let next = current + 1;
        match winding {
            FanWinding::Forward => [center, current, next],
            FanWinding::Reversed => [center, next, current],
        }
    })
}

/// Triangles of a band stored as `segments + 1` interleaved (top, bottom)
/// vertex pairs starting at `start`. Each quad becomes
/// `(top1, bot1, top2)` and `(top2, bot1, bot2)`.
pub fn quad_strip(start: u32, segments: u32) -> impl Iterator<Item = [u32; 3]> {
    (0..segments).flat_map(move |i| {
        let top1 = start + i * 2;
        let bot1 = top1 + 1;
        let top2 = top1 + 2;
        let bot2 = bot1 + 2;
        [[top1, bot1, top2], [top2, bot1, bot2]]
    })
}

/// Planar projection of a point on the unit circle into the [0, 1] UV square.
///
/// This is not a polar unwrap: the cap texture is stamped flat, centered on
/// `(0.5, 0.5)`.
pub fn circular_uv(cos_theta: f32, sin_theta: f32) -> [f32; 2] {
    [(cos_theta + 1.0) * 0.5, (sin_theta + 1.0) * 0.5]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_fan() {
        let triangles: Vec<_> = fan(0, 1, 3, FanWinding::Forward).collect();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn test_reversed_fan_swaps_ring_indices() {
        let triangles: Vec<_> = fan(8, 9, 2, FanWinding::Reversed).collect();
        assert_eq!(triangles, vec![[8, 10, 9], [8, 11, 10]]);
    }

    #[test]
    fn test_quad_strip() {
        let triangles: Vec<_> = quad_strip(16, 2).collect();
        assert_eq!(
            triangles,
            vec![[16, 17, 18], [18, 17, 19], [18, 19, 20], [20, 19, 21]]
        );
    }

    #[test]
    fn test_empty_layouts() {
        assert_eq!(fan(0, 1, 0, FanWinding::Forward).count(), 0);
        assert_eq!(quad_strip(0, 0).count(), 0);
    }

    #[test]
    fn test_circular_uv_corners() {
        assert_eq!(circular_uv(1.0, 0.0), [1.0, 0.5]);
        assert_eq!(circular_uv(-1.0, 0.0), [0.0, 0.5]);
        assert_eq!(circular_uv(0.0, -1.0), [0.5, 0.0]);
    }
}
