use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("A polygon requires at least 3 vertices, found {found}")]
    DegeneratePolygon { found: usize },

    #[error("Vertex index {index} is out of range for a vertex table of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Vertex table has {found} entries, but the figure topology declares {expected}")]
    VertexCountMismatch { expected: usize, found: usize },

    #[error("Cannot render {0} with zero vertices")]
    EmptyGeometry(&'static str),
}
