use super::error::FileError;
use super::problem::{from_points, json_error, to_points};
use super::traits::GeometryFile;
use crate::core::models::pose::Pose;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

#[derive(Debug, Serialize, Deserialize)]
struct RawPose {
    vertices: Vec<[f64; 2]>,
}

/// Pose descriptions: `{"vertices": [[x, y], ...]}`. Unknown fields (e.g. `bonuses`) are
/// ignored.
pub struct PoseFile;

impl GeometryFile for PoseFile {
    type Value = Pose;
    type Error = FileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Pose, FileError> {
        let raw: RawPose = serde_json::from_reader(reader).map_err(json_error)?;
        Ok(Pose::new(to_points(&raw.vertices)))
    }

    fn write_to(pose: &Pose, writer: &mut impl Write) -> Result<(), FileError> {
        let raw = RawPose {
            vertices: from_points(pose.vertices()),
        };
        serde_json::to_writer(&mut *writer, &raw).map_err(io::Error::from)?;
        writeln!(writer)?;
        Ok(())
    }
}
