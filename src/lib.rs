//! Result Plot - charts for iso-rectangle and line-fitting results
//!
//! This library reads the plain-text result files written by a rectangle
//! union (measure/contour) program and a segmented least-squares solver,
//! and renders them as PNG or SVG charts.
//!
//! # Example
//!
//! ```rust
//! use result_plot::records::parse_rectangles;
//!
//! let rects = parse_rectangles("0 4 0 3\n", "rectangles.txt").unwrap();
//! assert_eq!(rects[0].width(), 4.0);
//! assert_eq!(rects[0].height(), 3.0);
//! ```

pub mod charts;
pub mod error;
pub mod geometry;
pub mod records;
pub mod renderer;
pub mod stylesheet;
pub mod viewer;

use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

pub use charts::{IsoRectangleChart, IsoRectangleResults, LineFitChart, LineFitResults};
pub use error::ReadError;
pub use geometry::{Bounds, Domain, FitSummary, LineSegment, Point, Rectangle, ScalarResult};
pub use renderer::{ChartConfig, OriginConvention, OutputFormat, RenderError, Scene};
pub use stylesheet::{Stylesheet, StylesheetError};

/// Errors that can occur during a rendering pass
#[derive(Debug, Error)]
pub enum PlotError {
    /// An input file is missing or malformed
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The stylesheet defines an unusable color
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    /// A chart could not be drawn or written
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Configuration for a complete rendering pass
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Chart surface configuration
    pub chart: ChartConfig,
    /// Stylesheet for colors and widths
    pub stylesheet: Stylesheet,
    /// Directory the charts are written to
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            stylesheet: Stylesheet::default(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart configuration
    pub fn with_chart(mut self, config: ChartConfig) -> Self {
        self.chart = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Paths of the iso-rectangle result files
#[derive(Debug, Clone)]
pub struct IsoRectangleInputs {
    pub result: PathBuf,
    pub rectangles: PathBuf,
    pub contour_edges: PathBuf,
}

impl IsoRectangleInputs {
    /// The standard file names inside one directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            result: dir.join("result.txt"),
            rectangles: dir.join("rectangles.txt"),
            contour_edges: dir.join("contour_edges.txt"),
        }
    }

    /// Read and parse all three files
    pub fn load(&self) -> Result<IsoRectangleResults, ReadError> {
        Ok(IsoRectangleResults {
            scalars: records::load_scalar_result(&self.result)?,
            rectangles: records::load_rectangles(&self.rectangles)?,
            contour: records::load_contour_edges(&self.contour_edges)?,
        })
    }
}

/// Paths of the line-fit input and result files
#[derive(Debug, Clone)]
pub struct LineFitInputs {
    pub points: PathBuf,
    pub fit: PathBuf,
}

impl LineFitInputs {
    /// Read and parse the point set and the fitted segments
    pub fn load(&self) -> Result<LineFitResults, ReadError> {
        let points = records::load_points(&self.points)?;
        let (summary, segments) = records::load_line_fit(&self.fit)?;
        Ok(LineFitResults {
            points,
            summary,
            segments,
        })
    }
}

/// Render the four iso-rectangle charts
///
/// All inputs are loaded before anything is drawn, so a bad file leaves no
/// partial output behind. Returns the written paths in drawing order.
pub fn render_iso_rectangles(
    inputs: &IsoRectangleInputs,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>, PlotError> {
    let results = inputs.load()?;
    info!(
        "iso-rectangles: {} rectangles, {} contour edges, measure {}, perimeter {}",
        results.rectangles.len(),
        results.contour.len(),
        results.scalars.measure,
        results.scalars.contour_perimeter
    );

    let mut written = Vec::new();
    for kind in IsoRectangleChart::ALL {
        let scene = charts::iso_rectangle_scene(kind, &results, &config.chart, &config.stylesheet)?;
        let path = charts::output_path(&config.output_dir, kind.file_stem(), &config.chart);
        renderer::render(&scene, &config.chart, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Render the input points chart and the fitted lines chart
pub fn render_line_fit(
    inputs: &LineFitInputs,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>, PlotError> {
    let results = inputs.load()?;
    info!(
        "line-fit: {} points, {} segments, min penalty {} (C = {})",
        results.points.len(),
        results.segments.len(),
        results.summary.min_penalty,
        results.summary.c
    );

    let mut written = Vec::new();
    for kind in LineFitChart::ALL {
        let scene = charts::line_fit_scene(kind, &results, &config.chart, &config.stylesheet)?;
        let path = charts::output_path(&config.output_dir, kind.file_stem(), &config.chart);
        renderer::render(&scene, &config.chart, &path)?;
        written.push(path);
    }
    Ok(written)
}
