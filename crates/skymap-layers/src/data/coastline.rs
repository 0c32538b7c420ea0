use skymap_common::DataError;
use skymap_units::LatLong;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// One outline: vertices in drawing order.
pub type Polyline = Vec<LatLong>;

/// Marks the start of a new polyline.
const DELIMITER: char = '>';

/// Read coastline polylines, keeping every `stride`-th vertex of each run.
///
/// A line containing `>` starts a new polyline. Every other non-blank line
/// is `longitude latitude`. The vertex counter restarts at each delimiter, so
/// the first vertex after one is always kept. Vertices ahead of the first
/// delimiter form an implicit first polyline. Polylines left without vertices
/// are dropped. A kept vertex line that does not parse is skipped with a warning.
pub fn read_polylines<R: BufRead>(reader: R, stride: usize) -> Result<Vec<Polyline>, DataError> {
    let stride = stride.max(1);
    let mut polylines = Vec::new();
    let mut current = Polyline::new();
    let mut count = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|e| DataError::Malformed {
            line: number,
            reason: e.to_string(),
        })?;

        if line.contains(DELIMITER) {
            if !current.is_empty() {
                polylines.push(std::mem::take(&mut current));
            }
            count = 0;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        if count % stride == 0 {
            match parse_vertex(&line) {
                Some(vertex) => current.push(vertex),
                None => warn!(line = number, "skipping malformed coastline vertex: {line:?}"),
            }
        }
        count += 1;
    }

    if !current.is_empty() {
        polylines.push(current);
    }
    Ok(polylines)
}

fn parse_vertex(line: &str) -> Option<LatLong> {
    let mut fields = line.split_whitespace();
    let longitude: f32 = fields.next()?.parse().ok()?;
    let latitude: f32 = fields.next()?.parse().ok()?;
    if !longitude.is_finite() || !latitude.is_finite() {
        return None;
    }
    Some(LatLong::new(latitude, longitude))
}

pub fn try_load_polylines(path: &Path, stride: usize) -> Result<Vec<Polyline>, DataError> {
    let file = File::open(path).map_err(|e| DataError::Unavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    read_polylines(BufReader::new(file), stride)
}

/// Load polylines from `path`, or nothing if the file cannot be read.
pub fn load_polylines(path: &Path, stride: usize) -> Vec<Polyline> {
    match try_load_polylines(path, stride) {
        Ok(polylines) => {
            info!(
                path = %path.display(),
                polylines = polylines.len(),
                "loaded coastlines"
            );
            polylines
        }
        Err(e) => {
            warn!("coastlines unavailable, continuing without them: {e}");
            Vec::new()
        }
    }
}
