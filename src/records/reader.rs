//! Readers for the whitespace-separated result files
//!
//! Each `load_*` function reads a file in one go and hands the text to the
//! matching `parse_*` function. The `parse_*` functions take an `origin`
//! name which only shows up in diagnostics.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use super::lexer::{describe, is_separator, lex_line, Token};
use crate::error::{ReadError, Span};
use crate::geometry::{Domain, FitSummary, LineSegment, Point, Rectangle, ScalarResult};

const RECTANGLE_FIELDS: [&str; 4] = ["x_min", "x_max", "y_min", "y_max"];
const CONTOUR_EDGE_FIELDS: [&str; 4] = ["x", "y", "width", "height"];
const FIT_HEADER_FIELDS: [&str; 2] = ["min_penalty", "C"];
const SEGMENT_FIELDS: [&str; 4] = ["slope", "intercept", "start", "stop"];
const POINT_FIELDS: [&str; 2] = ["x", "y"];

/// One physical line of a source, with its absolute byte offset
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// 1-based
    number: usize,
    offset: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    fn is_blank(&self) -> bool {
        self.text.chars().all(is_separator)
    }

    /// Span of the non-whitespace part of the line, or the empty span at its start
    fn content_span(&self) -> Span {
        let start = self.text.len() - self.text.trim_start_matches(is_separator).len();
        let end = self.text.trim_end_matches(is_separator).len().max(start);
        self.offset + start..self.offset + end
    }

    fn absolute(&self, span: &Span) -> Span {
        self.offset + span.start..self.offset + span.end
    }
}

fn lines(source: &str) -> impl Iterator<Item = Line<'_>> + '_ {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .enumerate()
        .map(move |(i, raw)| {
            let line = Line {
                number: i + 1,
                offset,
                text: raw.strip_suffix('\n').unwrap_or(raw),
            };
            offset += raw.len();
            line
        })
}

/// A successfully lexed record: tokens with absolute spans
struct Record<'a> {
    line: Line<'a>,
    tokens: Vec<(Token, Span)>,
}

impl<'a> Record<'a> {
    fn lex(origin: &str, line: Line<'a>) -> Result<Self, ReadError> {
        let mut tokens = Vec::new();
        for (lexed, span) in lex_line(line.text) {
            match lexed {
                Ok(token) => tokens.push((token, line.absolute(&span))),
                Err(word) => {
                    return Err(ReadError::parse(
                        origin,
                        line.number,
                        line.absolute(&span),
                        format!("invalid token {}", describe(&Err::<Token, _>(word))),
                        vec!["number".to_string()],
                    ));
                }
            }
        }
        Ok(Self { line, tokens })
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn expect_arity(&self, origin: &str, fields: &[&str]) -> Result<(), ReadError> {
        if self.len() == fields.len() {
            return Ok(());
        }
        Err(ReadError::parse(
            origin,
            self.line.number,
            self.line.content_span(),
            format!(
                "expected {} values, found {}",
                fields.len(),
                self.len()
            ),
            vec![fields.join(" ")],
        ))
    }

    fn number(&self, origin: &str, index: usize, field: &str) -> Result<f64, ReadError> {
        let (token, span) = &self.tokens[index];
        token.number().ok_or_else(|| {
            ReadError::parse(
                origin,
                self.line.number,
                span.clone(),
                format!(
                    "expected a number for '{}', found {}",
                    field,
                    describe(&Ok(token.clone()))
                ),
                vec!["number".to_string()],
            )
        })
    }

    /// All tokens as numbers, in order
    fn numbers(&self, origin: &str, fields: &[&str]) -> Result<Vec<f64>, ReadError> {
        self.expect_arity(origin, fields)?;
        fields
            .iter()
            .enumerate()
            .map(|(i, field)| self.number(origin, i, field))
            .collect()
    }
}

/// Records of non-blank lines, each with exactly `fields.len()` numbers
fn numeric_records<T>(
    source: &str,
    origin: &str,
    fields: &[&str],
    build: impl Fn(&[f64]) -> T,
) -> Result<Vec<T>, ReadError> {
    lines(source)
        .filter(|line| !line.is_blank())
        .map(|line| {
            let record = Record::lex(origin, line)?;
            let values = record.numbers(origin, fields)?;
            Ok(build(&values))
        })
        .collect()
}

/// Parse a scalar result: measure on line 1, contour perimeter on line 2
pub fn parse_scalar_result(source: &str, origin: &str) -> Result<ScalarResult, ReadError> {
    let head: Vec<Line<'_>> = lines(source).take(2).collect();
    if head.len() < 2 {
        return Err(ReadError::short(origin, 2, head.len()));
    }

    let measure = Record::lex(origin, head[0])?.numbers(origin, &["measure"])?[0];
    let contour_perimeter =
        Record::lex(origin, head[1])?.numbers(origin, &["contour_perimeter"])?[0];

    Ok(ScalarResult {
        measure,
        contour_perimeter,
    })
}

/// Parse `x_min x_max y_min y_max` records
pub fn parse_rectangles(source: &str, origin: &str) -> Result<Vec<Rectangle>, ReadError> {
    numeric_records(source, origin, &RECTANGLE_FIELDS, |v| {
        Rectangle::new(v[0], v[1], v[2], v[3])
    })
}

/// Parse `x y width height` contour edge records into canonical rectangles
pub fn parse_contour_edges(source: &str, origin: &str) -> Result<Vec<Rectangle>, ReadError> {
    numeric_records(source, origin, &CONTOUR_EDGE_FIELDS, |v| {
        Rectangle::from_origin_extent(v[0], v[1], v[2], v[3])
    })
}

/// Parse a line-fit result: a `min_penalty C` header, then one segment per line
///
/// A segment whose slope field is the literal `inf` is vertical; its second
/// value is the x-intercept and its domain runs along y.
pub fn parse_line_fit(
    source: &str,
    origin: &str,
) -> Result<(FitSummary, Vec<LineSegment>), ReadError> {
    let mut body = lines(source).filter(|line| !line.is_blank());

    let header_line = body.next().ok_or_else(|| ReadError::short(origin, 1, 0))?;
    let header = Record::lex(origin, header_line)?.numbers(origin, &FIT_HEADER_FIELDS)?;
    let summary = FitSummary {
        min_penalty: header[0],
        c: header[1],
    };

    let segments = body
        .map(|line| {
            let record = Record::lex(origin, line)?;
            record.expect_arity(origin, &SEGMENT_FIELDS)?;
            let intercept = record.number(origin, 1, SEGMENT_FIELDS[1])?;
            let domain = Domain::new(
                record.number(origin, 2, SEGMENT_FIELDS[2])?,
                record.number(origin, 3, SEGMENT_FIELDS[3])?,
            );
            Ok(match record.tokens[0].0 {
                Token::Inf => LineSegment::Vertical {
                    x: intercept,
                    domain,
                },
                Token::Number(slope) => LineSegment::Sloped {
                    slope,
                    intercept,
                    domain,
                },
            })
        })
        .collect::<Result<Vec<_>, ReadError>>()?;

    Ok((summary, segments))
}

/// Parse the solver's input point file
///
/// Single-value lines hold the point count and the cost constant and are
/// skipped; every other line must be an `x y` pair.
pub fn parse_points(source: &str, origin: &str) -> Result<Vec<Point>, ReadError> {
    let mut points = Vec::new();
    for line in lines(source).filter(|line| !line.is_blank()) {
        let record = Record::lex(origin, line)?;
        if record.len() == 1 {
            record.number(origin, 0, "header value")?;
            continue;
        }
        let values = record.numbers(origin, &POINT_FIELDS)?;
        points.push(Point::new(values[0], values[1]));
    }
    Ok(points)
}

/// Read a whole file, mapping a missing path to [`ReadError::MissingFile`]
pub fn read_source(path: &Path) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReadError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn origin_of(path: &Path) -> String {
    path.display().to_string()
}

pub fn load_scalar_result(path: &Path) -> Result<ScalarResult, ReadError> {
    let source = read_source(path)?;
    parse_scalar_result(&source, &origin_of(path))
}

pub fn load_rectangles(path: &Path) -> Result<Vec<Rectangle>, ReadError> {
    let source = read_source(path)?;
    let rects = parse_rectangles(&source, &origin_of(path))?;
    debug!("loaded {} rectangles from {}", rects.len(), path.display());
    Ok(rects)
}

pub fn load_contour_edges(path: &Path) -> Result<Vec<Rectangle>, ReadError> {
    let source = read_source(path)?;
    let edges = parse_contour_edges(&source, &origin_of(path))?;
    debug!("loaded {} contour edges from {}", edges.len(), path.display());
    Ok(edges)
}

pub fn load_line_fit(path: &Path) -> Result<(FitSummary, Vec<LineSegment>), ReadError> {
    let source = read_source(path)?;
    let (summary, segments) = parse_line_fit(&source, &origin_of(path))?;
    debug!(
        "loaded {} segments (min penalty {}, C {}) from {}",
        segments.len(),
        summary.min_penalty,
        summary.c,
        path.display()
    );
    Ok((summary, segments))
}

pub fn load_points(path: &Path) -> Result<Vec<Point>, ReadError> {
    let source = read_source(path)?;
    let points = parse_points(&source, &origin_of(path))?;
    debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
