//! Writers producing the same formats the readers accept

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::ReadError;
use crate::geometry::{FitSummary, LineSegment, Rectangle, ScalarResult};

pub fn format_scalar_result(result: &ScalarResult) -> String {
    format!("{}\n{}\n", result.measure, result.contour_perimeter)
}

pub fn format_rectangles(rects: &[Rectangle]) -> String {
    let mut out = String::new();
    for r in rects {
        let _ = writeln!(out, "{} {} {} {}", r.x_min, r.x_max, r.y_min, r.y_max);
    }
    out
}

pub fn format_contour_edges(edges: &[Rectangle]) -> String {
    let mut out = String::new();
    for edge in edges {
        let (x, y, w, h) = edge.origin_extent();
        let _ = writeln!(out, "{} {} {} {}", x, y, w, h);
    }
    out
}

pub fn format_line_fit(summary: &FitSummary, segments: &[LineSegment]) -> String {
    let mut out = format!("{} {}\n", summary.min_penalty, summary.c);
    for seg in segments {
        let _ = match *seg {
            LineSegment::Sloped {
                slope,
                intercept,
                domain,
            } => writeln!(out, "{} {} {} {}", slope, intercept, domain.start, domain.stop),
            LineSegment::Vertical { x, domain } => {
                writeln!(out, "inf {} {} {}", x, domain.start, domain.stop)
            }
        };
    }
    out
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReadError> {
    fs::write(path, contents).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_scalar_result(path: &Path, result: &ScalarResult) -> Result<(), ReadError> {
    write_file(path, &format_scalar_result(result))
}

pub fn write_rectangles(path: &Path, rects: &[Rectangle]) -> Result<(), ReadError> {
    write_file(path, &format_rectangles(rects))
}

pub fn write_contour_edges(path: &Path, edges: &[Rectangle]) -> Result<(), ReadError> {
    write_file(path, &format_contour_edges(edges))
}

pub fn write_line_fit(
    path: &Path,
    summary: &FitSummary,
    segments: &[LineSegment],
) -> Result<(), ReadError> {
    write_file(path, &format_line_fit(summary, segments))
}
