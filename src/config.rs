use std::path::PathBuf;

use crate::math::GraphMode;
use crate::math::examples::{GRAPH_EXAMPLES, GraphExample};

pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Compulsory 1",
        }
    }
}

/// Everything chosen before sampling starts
pub struct AppConfig {
    /// Preset name and description, for logging
    pub label: String,
    pub graph: GraphMode,
    /// Linear sample count; the 3D graph samples `points_count²` vertices
    pub points_count: usize,
    pub window: WindowConfig,
    pub output_dir: PathBuf,
    pub clear_color: [f64; 3],
}

impl From<&GraphExample> for AppConfig {
    fn from(example: &GraphExample) -> Self {
        Self {
            label: format!("{} ({})", example.name, example.description),
            graph: example.mode,
            points_count: example.points_count,
            window: WindowConfig::default(),
            output_dir: PathBuf::from("."),
            clear_color: [0.1, 0.1, 0.1],
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from(&GRAPH_EXAMPLES[0])
    }
}
