//! # Core Models Module
//!
//! Value types describing one instance of the fitting problem and the auxiliary artifacts
//! produced while debugging a solver.
//!
//! ## Key Components
//!
//! - [`point`] - The 2D point type shared by every model
//! - [`bounds`] - Axis-aligned bounding boxes over point sets
//! - [`polygon`] - Implicitly closed polygons (the hole boundary)
//! - [`figure`] - Figure topology: edges between vertex indices
//! - [`problem`] - A complete problem: hole, figure topology and original vertex positions
//! - [`pose`] - A candidate placement of a figure
//! - [`placed`] - A topology paired with a vertex table, validated at construction
//! - [`triangle`] - Triangles from a triangulation dump
//! - [`grid`] - Scalar fields sampled over a rectangular grid
//! - [`error`] - Construction and rendering failures
//!
//! ## Usage
//!
//! ```ignore
//! use holeview::core::models::{problem::Problem, placed::PlacedFigure};
//!
//! let problem = Problem::new(hole, edges, vertices, 150_000.0)?;
//! let placed = PlacedFigure::new(problem.figure(), pose.vertices())?;
//! ```

pub mod bounds;
pub mod error;
pub mod figure;
pub mod grid;
pub mod placed;
pub mod point;
pub mod polygon;
pub mod pose;
pub mod problem;
pub mod triangle;
