use std::f32::consts::TAU;

use crate::error::{Axis, Error, Result};
use crate::math::mode::{Function1D, Function2D};

/// One spiral turn, in radians
pub const SPIRAL_RADIUS: f32 = TAU;

pub fn check_points(count: usize) -> Result<()> {
    if count < 2 {
        return Err(Error::TooFewPoints(count));
    }
    Ok(())
}

/// `count` evenly spaced values from `min` to `max`, both ends included
pub fn linspace(min: f32, max: f32, count: usize) -> Result<Vec<f32>> {
    check_points(count)?;

    let span = max - min;
    Ok((0..count)
        .map(|i| min + i as f32 / (count - 1) as f32 * span)
        .collect())
}

pub struct Samples1D {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

pub fn sample_function(
    equation: Function1D,
    x_range: (f32, f32),
    count: usize,
) -> Result<Samples1D> {
    check_points(count)?;
    if x_range.0 == x_range.1 {
        return Err(Error::DegenerateSpan {
            axis: Axis::X,
            value: x_range.0,
        });
    }

    let x = linspace(x_range.0, x_range.1, count)?;
    let y = x.iter().map(|&x| equation(x)).collect();
    Ok(Samples1D { x, y })
}

/// Spiral angles. The step is `r / (count / 2)` with integer halving, so
/// `count` points cover two turns.
pub fn spiral_angles(count: usize) -> Result<Vec<f32>> {
    check_points(count)?;

    let dt = SPIRAL_RADIUS / (count / 2) as f32;
    Ok((0..count).map(|i| i as f32 * dt).collect())
}

pub struct SurfaceSamples {
    /// Grid coordinates along each axis
    pub axis: Vec<f32>,
    /// Heights in row-major order: `heights[i * n + j] = f(axis[i], axis[j])`
    pub heights: Vec<f32>,
}

pub fn sample_surface(equation: Function2D, count: usize) -> Result<SurfaceSamples> {
    let axis = linspace(-1.0, 1.0, count)?;

    let mut heights = Vec::with_capacity(count * count);
    for &x in &axis {
        for &y in &axis {
            heights.push(equation(x, y));
        }
    }

    Ok(SurfaceSamples { axis, heights })
}
