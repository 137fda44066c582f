use glam::Vec3;

use crate::error::{Axis, Error, Result};
use crate::math::sampler::{SPIRAL_RADIUS, Samples1D, SurfaceSamples};

/// Maps `v` from `[min, max]` onto `[-1, 1]`
#[inline(always)]
pub fn remap(v: f32, min: f32, max: f32) -> f32 {
    2.0 * ((v - min) / (max - min)) - 1.0
}

/// Rejects the first non-finite value, reporting its index
pub fn check_finite(values: &[f32]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFinite { index }),
        None => Ok(()),
    }
}

/// Smallest and largest value, rejecting non-finite samples
pub fn min_max(values: &[f32]) -> Result<(f32, f32)> {
    check_finite(values)?;

    Ok(values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        }))
}

fn span(axis: Axis, min: f32, max: f32) -> Result<f32> {
    let span = max - min;
    if span == 0.0 {
        return Err(Error::DegenerateSpan { axis, value: min });
    }
    if !span.is_finite() {
        return Err(Error::SpanOverflow { axis, min, max });
    }
    Ok(span)
}

/// X is centered on the domain midpoint and scaled by the half-span. Y is
/// min/max mapped. Z stays 0.
pub fn normalize_graph_2d(samples: &Samples1D, x_range: (f32, f32)) -> Result<Vec<Vec3>> {
    let (min_x, max_x) = x_range;
    let half_span = span(Axis::X, min_x, max_x)? / 2.0;
    let x_offset = (max_x + min_x) / 2.0;

    let (min_y, max_y) = min_max(&samples.y)?;
    span(Axis::Y, min_y, max_y)?;

    Ok(samples
        .x
        .iter()
        .zip(&samples.y)
        .map(|(&x, &y)| Vec3::new((x - x_offset) / half_span, remap(y, min_y, max_y), 0.0))
        .collect())
}

/// Height of the spiral at angle `t`, before the axis swap
#[inline(always)]
pub fn spiral_height(t: f32) -> f32 {
    t / SPIRAL_RADIUS - 1.0
}

/// The parametric height goes on the vertical axis and `sin(t)` on the depth
/// axis.
pub fn spiral_vertices(angles: &[f32]) -> Vec<Vec3> {
    angles
        .iter()
        .map(|&t| Vec3::new(t.cos(), spiral_height(t), t.sin()))
        .collect()
}

/// Height goes on the vertical axis, unnormalized; the grid is already in
/// [-1, 1]. Heights must still be finite.
pub fn surface_vertices(samples: &SurfaceSamples) -> Result<Vec<Vec3>> {
    check_finite(&samples.heights)?;

    let n = samples.axis.len();
    let mut vertices = Vec::with_capacity(n * n);

    for (i, &x) in samples.axis.iter().enumerate() {
        for (j, &y) in samples.axis.iter().enumerate() {
            vertices.push(Vec3::new(x, samples.heights[i * n + j], y));
        }
    }

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sampler::sample_function;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn remap_endpoints() {
        assert_eq!(remap(3.0, 3.0, 7.0), -1.0);
        assert_eq!(remap(7.0, 3.0, 7.0), 1.0);
        assert_eq!(remap(5.0, 3.0, 7.0), 0.0);
    }

    #[test]
    fn graph_2d_x_is_monotonic_in_range() {
        for n in [2, 3, 17, 50, 101] {
            let s = sample_function(|x| x.sin(), (-4.0, 9.0), n).unwrap();
            let v = normalize_graph_2d(&s, (-4.0, 9.0)).unwrap();
            assert!(v.iter().all(|p| (-1.0..=1.0).contains(&p.x)));
            assert!(v.windows(2).all(|w| w[0].x <= w[1].x));
            assert!(close(v[0].x, -1.0));
            assert!(close(v[n - 1].x, 1.0));
        }
    }

    #[test]
    fn graph_2d_y_spans_unit_range() {
        let s = sample_function(|x| x * x * x - x, (-2.0, 2.0), 40).unwrap();
        let v = normalize_graph_2d(&s, (-2.0, 2.0)).unwrap();
        assert!(v.iter().all(|p| (-1.0..=1.0).contains(&p.y)));
        assert!(v.iter().all(|p| p.z == 0.0));

        let lo = v.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let hi = v.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        assert!(close(lo, -1.0));
        assert!(close(hi, 1.0));
    }

    #[test]
    fn parabola_extremes() {
        let s = sample_function(|x| x * x, (-10.0, 10.0), 50).unwrap();
        let (min_y, max_y) = min_max(&s.y).unwrap();
        // 50 points never land exactly on x = 0
        assert!(min_y >= 0.0 && min_y < 0.05);
        assert!(close(max_y, 100.0));

        let v = normalize_graph_2d(&s, (-10.0, 10.0)).unwrap();
        let min_at = s.y.iter().position(|&y| y == min_y).unwrap();
        assert!(close(v[min_at].y, -1.0));
        assert!(close(v[0].y, 1.0));
        assert!(close(v[49].y, 1.0));
    }

    #[test]
    fn constant_function_is_rejected() {
        let s = sample_function(|_| 4.0, (-1.0, 1.0), 10).unwrap();
        let r = normalize_graph_2d(&s, (-1.0, 1.0));
        assert!(matches!(
            r,
            Err(Error::DegenerateSpan {
                axis: Axis::Y,
                value
            }) if value == 4.0
        ));
    }

    #[test]
    fn non_finite_is_rejected() {
        let s = sample_function(|x| 1.0 / x, (-1.0, 1.0), 3).unwrap();
        let r = normalize_graph_2d(&s, (-1.0, 1.0));
        assert!(matches!(r, Err(Error::NonFinite { index: 1 })));
    }

    #[test]
    fn overflowing_span_is_not_zero_span() {
        let s = sample_function(|x| x * 3.0e38, (-1.0, 1.0), 5).unwrap();
        let r = normalize_graph_2d(&s, (-1.0, 1.0));
        assert!(matches!(
            r,
            Err(Error::SpanOverflow { axis: Axis::Y, .. })
        ));

        let r = normalize_graph_2d(&s, (-3.0e38, 3.0e38));
        assert!(matches!(
            r,
            Err(Error::SpanOverflow { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn spiral_starts_at_bottom() {
        let v = spiral_vertices(&[0.0, SPIRAL_RADIUS]);
        assert_eq!(v[0], Vec3::new(1.0, -1.0, 0.0));
        assert!(close(v[1].y, 0.0));
    }
}
