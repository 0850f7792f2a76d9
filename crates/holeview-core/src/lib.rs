//! # holeview Core Library
//!
//! Loading and drawable-primitive rendering for the hole/figure fitting problem: a deformable
//! polygonal figure (a vertex table plus an edge set) must be placed inside a polygonal hole.
//! The library turns problem descriptions, candidate poses, penalty-map grids and triangulation
//! dumps into plottable geometry for human inspection.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers, mirroring how data flows from disk to an image.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Problem`, `Pose`, `ScalarGrid`,
//!   `Triangle`, `PlacedFigure`) and the file formats that produce and persist them.
//!
//! - **[`render`]: The Mapping.** Pure, deterministic functions from data models to drawable
//!   primitives (polylines, segments, markers, contour specifications), plus the SVG surface
//!   that draws a finished scene. Only the surface writes anything.
//!
//! - **[`workflows`]: The Public API.** Composes loaders and renderers into the complete
//!   visualizations (triangulation overlay, penalty contour, before/after pose) and drives
//!   batches of instances with skip-and-continue semantics.

pub mod core;
pub mod render;
pub mod workflows;
