//! Provides input/output functionality for the problem's file formats.
//!
//! Problem and pose descriptions are JSON records; penalty maps and triangulation dumps are
//! whitespace-separated plain text. Every format implements [`traits::GeometryFile`], so it
//! can be read from and written to any buffered reader, writer or path.

pub mod error;
pub mod pose;
pub mod problem;
pub mod table;
pub mod traits;
pub mod triangles;
