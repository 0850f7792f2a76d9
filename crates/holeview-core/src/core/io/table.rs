use super::error::{FileError, parse_floats};
use super::traits::GeometryFile;
use crate::core::models::grid::ScalarGrid;
use nalgebra::DMatrix;
use std::io::{BufRead, Write};

/// Plain-text scalar grids: one row per line, whitespace-separated floats.
///
/// Every row must have as many values as the first one; a blank line counts as an empty row,
/// except at the end of the file.
pub struct ScalarGridFile;

impl GeometryFile for ScalarGridFile {
    type Value = ScalarGrid;
    type Error = FileError;

    fn read_from(reader: &mut impl BufRead) -> Result<ScalarGrid, FileError> {
        let mut data = Vec::new();
        let mut ncols: Option<usize> = None;
        let mut nrows = 0;
        let mut first_blank: Option<usize> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            if line.trim().is_empty() {
                first_blank.get_or_insert(line_num);
                continue;
            }

            let row = parse_floats(&line, line_num)?;
            // Blank lines are only allowed after the last row.
            if let Some(blank) = first_blank {
                return Err(FileError::RaggedTable {
                    line: blank,
                    expected: ncols.unwrap_or(row.len()),
                    found: 0,
                });
            }
            match ncols {
                None => ncols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(FileError::RaggedTable {
                        line: line_num,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            data.extend(row);
            nrows += 1;
        }

        let values = DMatrix::from_row_slice(nrows, ncols.unwrap_or(0), &data);
        Ok(ScalarGrid::from_matrix(values))
    }

    fn write_to(grid: &ScalarGrid, writer: &mut impl Write) -> Result<(), FileError> {
        for row in grid.values().row_iter() {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_from_builds_square_grid() {
        let grid = ScalarGridFile::read_from(&mut Cursor::new("1.0 2.0\n3.0 4.0\n")).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(1, 1), Some(4.0));
        assert_eq!(grid.get(0, 1), Some(2.0));
    }

    #[test]
    fn read_from_rejects_ragged_rows() {
        let result = ScalarGridFile::read_from(&mut Cursor::new("1.0 2.0\n3.0\n"));
        assert!(matches!(
            result,
            Err(FileError::RaggedTable {
                line: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn read_from_accepts_leading_spaces_and_trailing_blank_lines() {
        let text = " 0 1.5 3\n 4 5 6e1\n\n  \n";
        let grid = ScalarGridFile::read_from(&mut Cursor::new(text)).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 2), Some(60.0));
    }

    #[test]
    fn read_from_rejects_interior_blank_line() {
        let result = ScalarGridFile::read_from(&mut Cursor::new("1 2\n\n3 4\n"));
        assert!(matches!(
            result,
            Err(FileError::RaggedTable {
                line: 2,
                expected: 2,
                found: 0
            })
        ));
    }

    #[test]
    fn read_from_rejects_leading_blank_line() {
        let result = ScalarGridFile::read_from(&mut Cursor::new("\n1 2\n3 4\n"));
        assert!(matches!(
            result,
            Err(FileError::RaggedTable {
                line: 1,
                found: 0,
                ..
            })
        ));
    }

    #[test]
    fn read_from_reports_bad_token() {
        let result = ScalarGridFile::read_from(&mut Cursor::new("1 2\n3 x\n"));
        assert!(matches!(result, Err(FileError::Parse { line: 2, .. })));
    }

    #[test]
    fn read_from_empty_input_yields_empty_grid() {
        let grid = ScalarGridFile::read_from(&mut Cursor::new("")).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn write_to_produces_readable_rows() {
        let grid = ScalarGrid::from_rows(&[vec![0.5, -1.0], vec![2.25, 1e-3]]).unwrap();
        let mut buffer = Vec::new();
        ScalarGridFile::write_to(&grid, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "0.5 -1\n2.25 0.001\n");

        let reloaded = ScalarGridFile::read_from(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(reloaded, grid);
    }
}
