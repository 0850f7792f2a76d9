use super::error::{FileError, ParseErrorKind, parse_floats};
use super::traits::GeometryFile;
use crate::core::models::point::Point2D;
use crate::core::models::triangle::Triangle;
use std::io::{BufRead, Write};

const VALUES_PER_TRIANGLE: usize = 6;

/// Triangulation dumps: one triangle per line as `x0 y0 x1 y1 x2 y2`. Only trailing blank
/// lines are allowed.
pub struct TriangleDumpFile;

impl GeometryFile for TriangleDumpFile {
    type Value = Vec<Triangle>;
    type Error = FileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Triangle>, FileError> {
        let mut triangles = Vec::new();
        let mut first_blank: Option<usize> = None;
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            if line.trim().is_empty() {
                first_blank.get_or_insert(line_num);
                continue;
            }
            if let Some(blank) = first_blank {
                return Err(FileError::Parse {
                    line: blank,
                    kind: ParseErrorKind::WrongTokenCount {
                        expected: VALUES_PER_TRIANGLE,
                        found: 0,
                    },
                });
            }

            let v = parse_floats(&line, line_num)?;
            if v.len() != VALUES_PER_TRIANGLE {
                return Err(FileError::Parse {
                    line: line_num,
                    kind: ParseErrorKind::WrongTokenCount {
                        expected: VALUES_PER_TRIANGLE,
                        found: v.len(),
                    },
                });
            }
            triangles.push(Triangle::new(
                Point2D::new(v[0], v[1]),
                Point2D::new(v[2], v[3]),
                Point2D::new(v[4], v[5]),
            ));
        }
        Ok(triangles)
    }

    fn write_to(triangles: &Vec<Triangle>, writer: &mut impl Write) -> Result<(), FileError> {
        for tri in triangles {
            let [a, b, c] = tri.vertices;
            writeln!(
                writer,
                "{} {} {} {} {} {}",
                a.x, a.y, b.x, b.y, c.x, c.y
            )?;
        }
        Ok(())
    }
}
