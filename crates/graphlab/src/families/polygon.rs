//! Piecewise-linear outlines (id 31).
//!
//! For these families the domain's sample count is a total point budget
//! spread across the edges; its bounds are not used.

use std::{array, f64::consts::PI};

use super::ids;
use crate::{
    Registry,
    domain::{Domain, Kind},
    error::Result,
    family::{CurveFamily, Formula},
    samples::Samples,
};

/// Number of hexagram vertices (and edges).
pub const HEXAGRAM_VERTICES: usize = 12;

/// Points placed on each edge for a total budget of `samples`.
pub fn points_per_edge(samples: usize) -> usize {
    (samples / HEXAGRAM_VERTICES).max(2)
}

/// Star vertices: outer radius `scale`, inner radius `scale * √3/3`,
/// alternating every 30° from `rotation`.
pub fn hexagram_vertices(scale: f64, rotation: f64) -> [(f64, f64); HEXAGRAM_VERTICES] {
    let outer = scale;
    let inner = outer * 3f64.sqrt() / 3.0;
    array::from_fn(|k| {
        let angle = rotation + k as f64 * (PI / 6.0);
        let radius = if k % 2 == 0 { outer } else { inner };
        (radius * angle.cos(), radius * angle.sin())
    })
}

/// Trace the closed outline through `vertices`, `per_edge` points per edge.
///
/// Every edge includes both endpoints, so the first and last points of the
/// result are both vertex 0.
fn trace_closed(vertices: &[(f64, f64)], per_edge: usize) -> Samples {
    let mut out = Samples::with_capacity(vertices.len() * per_edge);
    let steps = (per_edge - 1) as f64;
    for (i, &(x0, y0)) in vertices.iter().enumerate() {
        let (x1, y1) = vertices[(i + 1) % vertices.len()];
        for j in 0..per_edge {
            let t = j as f64 / steps;
            out.push_finite(x0 * (1.0 - t) + x1 * t, y0 * (1.0 - t) + y1 * t);
        }
    }
    out
}

/// Register the polygon families.
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(CurveFamily::new(
        ids::HEXAGRAM,
        "Hexagram (Star of David)",
        Kind::Polygon,
        "12-vertex star polygon (two equilateral triangles)",
        Domain::new(Kind::Polygon, 0.0, 1.0, 2000),
        Formula {
            params: ["scale", "rotation"],
            eval: |d, [scale, rotation]| {
                trace_closed(&hexagram_vertices(scale, rotation), points_per_edge(d.samples))
            },
            preset: |i, _| [1.0 + 0.1 * i as f64, i as f64 * PI / 30.0],
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_alternate_radius() {
        let v = hexagram_vertices(2.0, 0.0);
        assert!((v[0].0 - 2.0).abs() < 1e-12);
        let inner = v[1].0.hypot(v[1].1);
        assert!((inner - 2.0 * 3f64.sqrt() / 3.0).abs() < 1e-12);
    }

    #[test]
    fn budget_has_a_floor() {
        assert_eq!(points_per_edge(2000), 166);
        assert_eq!(points_per_edge(5), 2);
    }

    #[test]
    fn trace_closes_on_first_vertex() {
        let s = trace_closed(&hexagram_vertices(1.0, 0.3), 4);
        assert_eq!(s.len(), 48);
        assert_eq!(s.xs[0], s.xs[47]);
        assert_eq!(s.ys[0], s.ys[47]);
    }
}
