//! # Core Module
//!
//! The data models of the fitting problem and the file formats they are read from and
//! written to.
//!
//! ## Architecture
//!
//! - **Geometry Models** ([`models`]) - Points, polygons, figure topology, problems, poses,
//!   triangles, scalar grids and the validated [`models::placed::PlacedFigure`] pairing
//! - **File I/O** ([`io`]) - JSON problem/pose descriptions, plain-text grid and triangle dumps,
//!   and the SVG surface
//! - **Utilities** ([`utils`]) - Named colors and linear sampling helpers
//!
//! All models are read-only value objects: they are created once from a single external
//! description and never mutated afterwards. Nothing is shared between problem instances.

pub mod io;
pub mod models;
pub mod utils;
