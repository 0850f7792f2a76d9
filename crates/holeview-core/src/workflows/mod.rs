//! # Workflows Module
//!
//! The complete visualizations, each composing loaders and the renderer into a
//! [`crate::render::primitives::Scene`], and a batch driver that runs any of them over a list
//! of instance identifiers.
//!
//! - **Triangulation overlay** ([`triangulation`]) - hole outline plus a triangulation dump
//! - **Penalty contour** ([`penalty`]) - labelled iso-lines of a penalty map, the hole outline
//!   and a marker on one distinguished figure vertex
//! - **Before/after pose** ([`pose`]) - hole, original figure and a candidate pose, with the
//!   pose's dislike and stretched edges
//! - **Batch driving** ([`batch`]) - skip-and-continue iteration with progress events
//!
//! Workflows know nothing about how instances are numbered or where files live; callers pass
//! paths or already-loaded models.

pub mod batch;
pub mod error;
pub mod penalty;
pub mod pose;
pub mod progress;
pub mod triangulation;
