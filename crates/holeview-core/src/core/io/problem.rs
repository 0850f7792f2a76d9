use super::error::FileError;
use super::traits::GeometryFile;
use crate::core::models::figure::Edge;
use crate::core::models::point::Point2D;
use crate::core::models::problem::Problem;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

#[derive(Debug, Serialize, Deserialize)]
struct RawFigure {
    edges: Vec<[usize; 2]>,
    vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawProblem {
    hole: Vec<[f64; 2]>,
    figure: RawFigure,
    #[serde(default)]
    epsilon: f64,
}

pub(crate) fn to_points(raw: &[[f64; 2]]) -> Vec<Point2D> {
    raw.iter().map(|&[x, y]| Point2D::new(x, y)).collect()
}

pub(crate) fn from_points(points: &[Point2D]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub(crate) fn json_error(e: serde_json::Error) -> FileError {
    if e.is_io() {
        FileError::Io(e.into())
    } else {
        FileError::MalformedDescription(e)
    }
}

/// Problem descriptions:
/// `{"hole": [[x, y], ...], "figure": {"edges": [[i, j], ...], "vertices": [[x, y], ...]}, "epsilon": e}`.
///
/// `epsilon` is optional and defaults to 0. Unknown fields are ignored.
pub struct ProblemFile;

impl GeometryFile for ProblemFile {
    type Value = Problem;
    type Error = FileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Problem, FileError> {
        let raw: RawProblem = serde_json::from_reader(reader).map_err(json_error)?;
        let edges = raw
            .figure
            .edges
            .iter()
            .map(|&[a, b]| Edge::new(a, b))
            .collect();
        let problem = Problem::new(
            to_points(&raw.hole),
            edges,
            to_points(&raw.figure.vertices),
            raw.epsilon,
        )?;
        Ok(problem)
    }

    fn write_to(problem: &Problem, writer: &mut impl Write) -> Result<(), FileError> {
        let raw = RawProblem {
            hole: from_points(problem.hole().vertices()),
            figure: RawFigure {
                edges: problem.figure().edges().iter().map(|e| [e.a, e.b]).collect(),
                vertices: from_points(problem.figure_vertices()),
            },
            epsilon: problem.epsilon(),
        };
        serde_json::to_writer(&mut *writer, &raw).map_err(io::Error::from)?;
        writeln!(writer)?;
        Ok(())
    }
}
