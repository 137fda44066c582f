/// Function of one variable, sampled by [`GraphMode::Graph2D`]
pub type Function1D = fn(f32) -> f32;

/// Function of two variables, sampled by [`GraphMode::Graph3D`]
pub type Function2D = fn(f32, f32) -> f32;

/// What to sample, and how its axes map onto the display cube
#[derive(Clone, Copy)]
pub enum GraphMode {
    /// `y = f(x)` over `x_range`, drawn in the z = 0 plane
    Graph2D {
        equation: Function1D,
        x_range: (f32, f32),
    },
    /// Two turns of a helix around the vertical axis
    Spiral3D,
    /// `height = f(x, y)` over [-1, 1]², one vertex per grid cell
    Graph3D { equation: Function2D },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    Graph2D,
    Spiral3D,
    Graph3D,
}

impl GraphMode {
    pub fn kind(&self) -> GraphKind {
        match self {
            GraphMode::Graph2D { .. } => GraphKind::Graph2D,
            GraphMode::Spiral3D => GraphKind::Spiral3D,
            GraphMode::Graph3D { .. } => GraphKind::Graph3D,
        }
    }

    /// Number of vertices produced for a given `points_count`
    pub fn vertex_count(&self, points_count: usize) -> usize {
        match self {
            GraphMode::Graph2D { .. } | GraphMode::Spiral3D => points_count,
            GraphMode::Graph3D { .. } => points_count * points_count,
        }
    }
}

impl std::fmt::Debug for GraphMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphMode::Graph2D { x_range, .. } => f
                .debug_struct("Graph2D")
                .field("x_range", x_range)
                .finish_non_exhaustive(),
            GraphMode::Spiral3D => f.write_str("Spiral3D"),
            GraphMode::Graph3D { .. } => f.debug_struct("Graph3D").finish_non_exhaustive(),
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GraphKind::Graph2D => "2D graph",
            GraphKind::Spiral3D => "3D spiral",
            GraphKind::Graph3D => "3D graph",
        };
        f.write_str(s)
    }
}
