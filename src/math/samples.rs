use glam::Vec3;

use crate::error::Result;
use crate::math::mode::{GraphKind, GraphMode};
use crate::math::normalize::{normalize_graph_2d, spiral_vertices, surface_vertices};
use crate::math::pitch::segment_pitches;
use crate::math::sampler::{sample_function, sample_surface, spiral_angles};

/// Values as they were before normalization, kept for the text dumps. Only
/// the 2D graph rescales its samples; the spiral and surface vertices already
/// hold their raw values.
pub enum RawSamples {
    Graph2D { x: Vec<f32>, y: Vec<f32> },
    Spiral3D,
    Graph3D,
}

/// Normalized vertex buffer plus the raw values it was built from
pub struct SampleSet {
    pub vertices: Vec<Vec3>,
    pub raw: RawSamples,
}

impl SampleSet {
    pub fn compute(mode: &GraphMode, points_count: usize) -> Result<Self> {
        match *mode {
            GraphMode::Graph2D { equation, x_range } => {
                let samples = sample_function(equation, x_range, points_count)?;
                let vertices = normalize_graph_2d(&samples, x_range)?;
                Ok(Self {
                    vertices,
                    raw: RawSamples::Graph2D {
                        x: samples.x,
                        y: samples.y,
                    },
                })
            }
            GraphMode::Spiral3D => {
                let angles = spiral_angles(points_count)?;
                Ok(Self {
                    vertices: spiral_vertices(&angles),
                    raw: RawSamples::Spiral3D,
                })
            }
            GraphMode::Graph3D { equation } => {
                let samples = sample_surface(equation, points_count)?;
                Ok(Self {
                    vertices: surface_vertices(&samples)?,
                    raw: RawSamples::Graph3D,
                })
            }
        }
    }

    pub fn kind(&self) -> GraphKind {
        match self.raw {
            RawSamples::Graph2D { .. } => GraphKind::Graph2D,
            RawSamples::Spiral3D => GraphKind::Spiral3D,
            RawSamples::Graph3D => GraphKind::Graph3D,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn pitches(&self) -> Vec<f32> {
        segment_pitches(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn spiral_first_vertex() {
        let set = SampleSet::compute(&GraphMode::Spiral3D, 100).unwrap();
        assert_eq!(set.len(), 100);
        assert_eq!(set.vertices[0], Vec3::new(1.0, -1.0, 0.0));
        // t = r at the midpoint
        assert!(set.vertices[50].y.abs() < 1e-5);
        assert!(set.vertices.iter().all(|v| v.abs().max_element() <= 1.0));
        assert_eq!(set.kind(), GraphKind::Spiral3D);
    }

    #[test]
    fn surface_grid() {
        let f = |x: f32, y: f32| x * y;
        let n = 7;
        let set = SampleSet::compute(&GraphMode::Graph3D { equation: f }, n).unwrap();
        assert_eq!(set.len(), n * n);
        assert_eq!(set.kind(), GraphKind::Graph3D);

        let step = 2.0 / (n - 1) as f32;
        for i in 0..n {
            for j in 0..n {
                let v = set.vertices[i * n + j];
                let x = -1.0 + i as f32 / (n - 1) as f32 * 2.0;
                let y = -1.0 + j as f32 / (n - 1) as f32 * 2.0;
                assert_eq!(v, Vec3::new(x, f(x, y), y));
                assert!((v.x - (-1.0 + i as f32 * step)).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn surface_height_is_not_normalized() {
        let set = SampleSet::compute(
            &GraphMode::Graph3D {
                equation: |x, y| 5.0 * (x + y),
            },
            3,
        )
        .unwrap();
        assert_eq!(set.vertices[8].y, 10.0);
        assert_eq!(set.vertices[0].y, -10.0);
    }

    #[test]
    fn surface_rejects_non_finite_height() {
        let r = SampleSet::compute(
            &GraphMode::Graph3D {
                equation: |x, y| 1.0 / (x * y),
            },
            3,
        );
        // (-1, 0) is the second grid point
        assert!(matches!(r, Err(Error::NonFinite { index: 1 })));
    }

    #[test]
    fn graph_2d_keeps_raw_values() {
        let mode = GraphMode::Graph2D {
            equation: |x| x * x,
            x_range: (-10.0, 10.0),
        };
        let set = SampleSet::compute(&mode, 50).unwrap();
        assert_eq!(set.len(), 50);
        assert_eq!(set.pitches().len(), 49);
        let RawSamples::Graph2D { x, y } = &set.raw else {
            panic!("expected 2D samples");
        };
        assert_eq!(x[0], -10.0);
        assert_eq!(y[49], 100.0);
    }

    #[test]
    fn too_few_points() {
        for mode in [
            GraphMode::Spiral3D,
            GraphMode::Graph3D {
                equation: |x, y| x + y,
            },
            GraphMode::Graph2D {
                equation: |x| x,
                x_range: (0.0, 1.0),
            },
        ] {
            assert!(matches!(
                SampleSet::compute(&mode, 1),
                Err(Error::TooFewPoints(1))
            ));
        }
    }
}
