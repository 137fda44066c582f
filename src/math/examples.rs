use crate::math::mode::GraphMode;

pub struct GraphExample {
    pub name: &'static str,
    pub description: &'static str,
    pub mode: GraphMode,
    pub points_count: usize,
}

pub const GRAPH_EXAMPLES: &[GraphExample] = &[
    GraphExample {
        name: "Parabola",
        description: "x² over [-10, 10]",
        mode: GraphMode::Graph2D {
            equation: |x| x * x,
            x_range: (-10.0, 10.0),
        },
        points_count: 50,
    },
    GraphExample {
        name: "Spiral",
        description: "Two turns of a helix",
        mode: GraphMode::Spiral3D,
        points_count: 100,
    },
    GraphExample {
        name: "Product",
        description: "x · y over [-1, 1]²",
        mode: GraphMode::Graph3D {
            equation: |x, y| x * y,
        },
        points_count: 50,
    },
    GraphExample {
        name: "Sine Wave",
        description: "sin(x) over two periods",
        mode: GraphMode::Graph2D {
            equation: |x| x.sin(),
            x_range: (-std::f32::consts::TAU, std::f32::consts::TAU),
        },
        points_count: 200,
    },
    GraphExample {
        name: "Saddle",
        description: "x² - y²",
        mode: GraphMode::Graph3D {
            equation: |x, y| x * x - y * y,
        },
        points_count: 30,
    },
];
