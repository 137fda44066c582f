//! Plain-text dumps of a [`SampleSet`], for inspecting the computed data
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error::{Error, Result};
use crate::math::{RawSamples, SampleSet};

pub const VERTEX_DATA_FILE: &str = "vertexData.txt";
pub const VERTEX_RAW_FILE: &str = "vertexRaw.txt";
pub const FUNCTION_DATA_FILE: &str = "functionData.txt";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    VertexData,
    VertexRaw,
    FunctionData,
}

impl Artifact {
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::VertexData => VERTEX_DATA_FILE,
            Artifact::VertexRaw => VERTEX_RAW_FILE,
            Artifact::FunctionData => FUNCTION_DATA_FILE,
        }
    }

    /// Artifacts produced for this sample set; function data is 2D only
    pub fn for_samples(set: &SampleSet) -> &'static [Artifact] {
        match set.raw {
            RawSamples::Graph2D { .. } => &[
                Artifact::VertexData,
                Artifact::VertexRaw,
                Artifact::FunctionData,
            ],
            _ => &[Artifact::VertexData, Artifact::VertexRaw],
        }
    }
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(Artifact, Error)>,
}

/// Writes every artifact for `set` into `dir`. A failing artifact is logged
/// and skipped; the others are still written.
pub fn export(set: &SampleSet, dir: &Path) -> ExportReport {
    let mut report = ExportReport::default();

    for &artifact in Artifact::for_samples(set) {
        let path = dir.join(artifact.file_name());
        match write_file(&path, |w| write_artifact(artifact, set, w)) {
            Ok(()) => {
                info!("Wrote {}", path.display());
                report.written.push(path);
            }
            Err(e) => {
                error!("Skipping {}: {e}", artifact.file_name());
                report.failed.push((artifact, e));
            }
        }
    }

    report
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    body(&mut w).map_err(io_err)?;
    w.flush().map_err(io_err)
}

pub fn write_artifact<W: Write>(
    artifact: Artifact,
    set: &SampleSet,
    w: &mut W,
) -> std::io::Result<()> {
    match artifact {
        Artifact::VertexData => write_vertex_data(set, w),
        Artifact::VertexRaw => write_vertex_raw(set, w),
        Artifact::FunctionData => write_function_data(set, w),
    }
}

fn write_header<W: Write>(set: &SampleSet, w: &mut W) -> std::io::Result<()> {
    writeln!(w, "Number of Points: {}", set.len())
}

/// 1-indexed coordinate listing
pub fn write_vertex_data<W: Write>(set: &SampleSet, w: &mut W) -> std::io::Result<()> {
    write_header(set, w)?;
    for (i, v) in set.vertices.iter().enumerate() {
        writeln!(w, "{}:\t x: {:.6}\ty: {:.6}\tz: {:.6}", i + 1, v.x, v.y, v.z)?;
    }
    debug!("{VERTEX_DATA_FILE}: {} lines", set.len() + 1);
    Ok(())
}

/// Comma-separated coordinates, printed with the shortest round-trip form
pub fn write_vertex_raw<W: Write>(set: &SampleSet, w: &mut W) -> std::io::Result<()> {
    write_header(set, w)?;
    for v in &set.vertices {
        writeln!(w, "{}, {}, {}", v.x, v.y, v.z)?;
    }
    debug!("{VERTEX_RAW_FILE}: {} lines", set.len() + 1);
    Ok(())
}

/// Raw x, raw y and the pitch to the next vertex. The last point has no
/// forward slope and is written without a pitch column. Writes only the
/// header for modes other than the 2D graph.
pub fn write_function_data<W: Write>(set: &SampleSet, w: &mut W) -> std::io::Result<()> {
    write_header(set, w)?;

    let RawSamples::Graph2D { x, y } = &set.raw else {
        return Ok(());
    };

    let pitches = set.pitches();
    for (i, (x, y)) in x.iter().zip(y).enumerate() {
        match pitches.get(i) {
            Some(p) => writeln!(w, "x: {x:.6}\ty: {y:.6}\tPitch: {p:.6}")?,
            None => writeln!(w, "x: {x:.6}\ty: {y:.6}")?,
        }
    }
    debug!("{FUNCTION_DATA_FILE}: {} lines", set.len() + 1);
    Ok(())
}
