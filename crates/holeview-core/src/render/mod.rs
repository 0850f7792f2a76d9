//! # Render Module
//!
//! Maps data models to drawable primitives and draws finished scenes.
//!
//! - **Primitives** ([`primitives`]) - Polylines, segments, markers, contour specifications and
//!   the [`primitives::Scene`] that orders them
//! - **Styling** ([`style`]) - Per-role stroke styles; the hole boundary style is distinct from
//!   every other element
//! - **Renderer** ([`renderer`]) - Pure, deterministic model-to-primitive mapping
//! - **Contours** ([`contour`]) - Level selection, labels and iso-line extraction for scalar grids
//! - **Surface** ([`svg`]) - Writes a scene as an SVG image
//!
//! Everything except [`svg`] is free of I/O.

pub mod contour;
pub mod primitives;
pub mod renderer;
pub mod style;
pub mod svg;
