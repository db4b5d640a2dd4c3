//! Text point files: one `x y` or `x,y` pair per line
//!
//! Tokens are separated by runs of commas and whitespace. Only the first two
//! tokens are read; a line whose first two tokens are not both integers is
//! skipped, as is any line with fewer than two tokens. Bounds are not checked
//! here, so out-of-grid points are returned and dropped later by the point set.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::io::error::{ClusterError, Result};
use crate::spatial::{GridDimensions, Point};

/// Raw points read from a point file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedPoints {
    /// Parsed points in file order, duplicates and out-of-grid points included
    pub points: Vec<Point>,
    /// Non-empty lines that did not parse as a point
    pub skipped_lines: usize,
}

impl LoadedPoints {
    /// Number of parsed points lying inside `dimensions`
    pub fn count_in_bounds(&self, dimensions: GridDimensions) -> usize {
        self.points
            .iter()
            .filter(|&&point| dimensions.contains(point))
            .count()
    }

    /// Reject inputs that leave nothing to cluster
    ///
    /// # Errors
    ///
    /// Returns `NoValidPoints` if none of the parsed points lies inside the grid
    pub fn require_in_bounds(&self, path: &Path, dimensions: GridDimensions) -> Result<()> {
        if self.count_in_bounds(dimensions) == 0 {
            return Err(ClusterError::NoValidPoints {
                path: path.to_path_buf(),
                parsed: self.points.len(),
                grid_dimensions: (dimensions.width(), dimensions.height()),
            });
        }
        Ok(())
    }
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Parse one line into a point
///
/// Consecutive separators count as one, except that a leading comma produces
/// an empty first token and so rejects the line.
pub fn parse_line(line: &str) -> Option<Point> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut tokens = line
        .split(is_separator)
        .enumerate()
        .filter(|(position, token)| *position == 0 || !token.is_empty())
        .map(|(_, token)| token);

    let x = tokens.next()?.parse::<i64>().ok()?;
    let y = tokens.next()?.parse::<i64>().ok()?;
    Some(Point::new(x, y))
}

/// Parse every line of a reader
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read, including lines
/// that are not valid UTF-8
pub fn parse_points<R: BufRead>(reader: R) -> std::io::Result<LoadedPoints> {
    let mut loaded = LoadedPoints::default();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(point) => loaded.points.push(point),
            None => loaded.skipped_lines += 1,
        }
    }

    Ok(loaded)
}

/// Read a point file from disk
///
/// # Errors
///
/// Returns `InputRead` if the file cannot be opened or read
pub fn read_points(path: &Path) -> Result<LoadedPoints> {
    let to_error = |source| ClusterError::InputRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let loaded = parse_points(BufReader::new(file)).map_err(to_error)?;

    tracing::debug!(
        path = %path.display(),
        points = loaded.points.len(),
        skipped_lines = loaded.skipped_lines,
        "read point file"
    );

    Ok(loaded)
}
