//! The named charts produced for each kind of result
//!
//! Each chart has a fixed file stem and title so runs are reproducible.

use std::path::{Path, PathBuf};

use crate::geometry::{FitSummary, LineSegment, Point, Rectangle, ScalarResult};
use crate::renderer::{ChartConfig, Scene, StrokeStyle};
use crate::stylesheet::{Role, Stylesheet, StylesheetError};

/// Charts drawn from iso-rectangle results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoRectangleChart {
    RectanglesWithContour,
    Contour,
    Measure,
    Rectangles,
}

/// Charts drawn from line-fit results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFitChart {
    Points,
    FittedLines,
}

impl IsoRectangleChart {
    /// Drawing order
    pub const ALL: [IsoRectangleChart; 4] = [
        IsoRectangleChart::RectanglesWithContour,
        IsoRectangleChart::Contour,
        IsoRectangleChart::Measure,
        IsoRectangleChart::Rectangles,
    ];

    /// Output file name without extension
    pub fn file_stem(&self) -> &'static str {
        match self {
            IsoRectangleChart::RectanglesWithContour => "rectangles_with_contour",
            IsoRectangleChart::Contour => "contour",
            IsoRectangleChart::Measure => "measure",
            IsoRectangleChart::Rectangles => "rectangles",
        }
    }
}

impl LineFitChart {
    /// Drawing order
    pub const ALL: [LineFitChart; 2] = [LineFitChart::Points, LineFitChart::FittedLines];

    /// Output file name without extension
    pub fn file_stem(&self) -> &'static str {
        match self {
            LineFitChart::Points => "points",
            LineFitChart::FittedLines => "out",
        }
    }
}

/// Where a chart with `stem` is written inside `dir`
pub fn output_path(dir: &Path, stem: &str, config: &ChartConfig) -> PathBuf {
    dir.join(format!("{}.{}", stem, config.format.extension()))
}

/// Parsed iso-rectangle results
#[derive(Debug, Clone, PartialEq)]
pub struct IsoRectangleResults {
    pub scalars: ScalarResult,
    pub rectangles: Vec<Rectangle>,
    pub contour: Vec<Rectangle>,
}

/// Parsed line-fit results
#[derive(Debug, Clone, PartialEq)]
pub struct LineFitResults {
    pub points: Vec<Point>,
    pub summary: FitSummary,
    pub segments: Vec<LineSegment>,
}

fn base_scene(title: String, sheet: &Stylesheet) -> Result<Scene, StylesheetError> {
    Ok(Scene::new(title).with_colors(sheet.color("background")?, sheet.color("axis")?))
}

/// Title of the contour chart; the perimeter is shown as an integer
pub fn contour_title(perimeter: f64) -> String {
    format!("Contour (Perimeter = {} Units)", perimeter.trunc() as i64)
}

/// Title of the measure chart; the area is shown as an integer
pub fn measure_title(measure: f64) -> String {
    format!("Measure (area) = {} Square Units", measure.trunc() as i64)
}

/// Title of the fitted-lines chart; whole numbers keep their `.0`
pub fn fit_title(summary: &FitSummary) -> String {
    format!(
        "Minimum Penalty (C = {}) is {}",
        decimal(summary.c),
        decimal(summary.min_penalty)
    )
}

fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Build the scene for one iso-rectangle chart
pub fn iso_rectangle_scene(
    kind: IsoRectangleChart,
    results: &IsoRectangleResults,
    config: &ChartConfig,
    sheet: &Stylesheet,
) -> Result<Scene, StylesheetError> {
    let origin = config.origin;
    let scene = match kind {
        IsoRectangleChart::RectanglesWithContour => {
            base_scene("Rectangles with Contour".to_string(), sheet)?
                .with_rectangles(&results.rectangles, origin, sheet.style(Role::Rectangle)?)
                .with_rectangles(&results.contour, origin, sheet.style(Role::Contour)?)
        }
        IsoRectangleChart::Contour => {
            base_scene(contour_title(results.scalars.contour_perimeter), sheet)?
                .with_rectangles(&results.contour, origin, sheet.style(Role::Contour)?)
        }
        IsoRectangleChart::Measure => {
            base_scene(measure_title(results.scalars.measure), sheet)?
                .with_rectangles(&results.rectangles, origin, sheet.style(Role::Measure)?)
        }
        IsoRectangleChart::Rectangles => base_scene("Rectangles".to_string(), sheet)?
            .with_rectangles(&results.rectangles, origin, sheet.style(Role::Rectangle)?),
    };
    Ok(scene)
}

/// Build the scene for one line-fit chart
pub fn line_fit_scene(
    kind: LineFitChart,
    results: &LineFitResults,
    config: &ChartConfig,
    sheet: &Stylesheet,
) -> Result<Scene, StylesheetError> {
    let points_style = sheet.style(Role::Points)?;
    let scene = match kind {
        LineFitChart::Points => base_scene("Input Points".to_string(), sheet)?
            .with_points(&results.points, points_style),
        LineFitChart::FittedLines => {
            let styles = (0..results.segments.len())
                .map(|i| sheet.style(Role::Segment(i)))
                .collect::<Result<Vec<StrokeStyle>, _>>()?;
            base_scene(fit_title(&results.summary), sheet)?
                .with_points(&results.points, points_style)
                .with_segments(&results.segments, config.samples, &styles)
        }
    };
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::geometry::Domain;
    use crate::renderer::{OutputFormat, Primitive};

    fn iso() -> IsoRectangleResults {
        IsoRectangleResults {
            scalars: ScalarResult {
                measure: 24.9,
                contour_perimeter: 10.5,
            },
            rectangles: vec![
                Rectangle::new(0.0, 4.0, 0.0, 3.0),
                Rectangle::new(2.0, 6.0, 1.0, 5.0),
            ],
            contour: vec![Rectangle::from_origin_extent(0.0, 0.0, 4.0, 0.0)],
        }
    }

    #[test]
    fn test_file_names() {
        let png = ChartConfig::default();
        let svg = ChartConfig::default().with_format(OutputFormat::Svg);
        assert_eq!(
            output_path(Path::new("output"), LineFitChart::FittedLines.file_stem(), &png),
            PathBuf::from("output/out.png")
        );
        assert_eq!(
            output_path(
                Path::new("output"),
                IsoRectangleChart::RectanglesWithContour.file_stem(),
                &svg
            ),
            PathBuf::from("output/rectangles_with_contour.svg")
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(contour_title(10.5), "Contour (Perimeter = 10 Units)");
        assert_eq!(measure_title(24.9), "Measure (area) = 24 Square Units");
        assert_eq!(
            fit_title(&FitSummary {
                min_penalty: 3.5,
                c: 0.1
            }),
            "Minimum Penalty (C = 0.1) is 3.5"
        );
    }

    #[test]
    fn test_fit_title_keeps_decimal_point() {
        assert_eq!(
            fit_title(&FitSummary {
                min_penalty: 10.0,
                c: 1.0
            }),
            "Minimum Penalty (C = 1.0) is 10.0"
        );
        assert_eq!(
            fit_title(&FitSummary {
                min_penalty: -0.0,
                c: 2.5
            }),
            "Minimum Penalty (C = 2.5) is -0.0"
        );
    }

    #[test]
    fn test_rectangles_with_contour_scene() {
        let sheet = Stylesheet::default();
        let scene = iso_rectangle_scene(
            IsoRectangleChart::RectanglesWithContour,
            &iso(),
            &ChartConfig::default(),
            &sheet,
        )
        .unwrap();
        assert_eq!(scene.title, "Rectangles with Contour");
        assert_eq!(scene.primitives.len(), 3);
        assert_eq!(scene.primitives[0].style().width, 1);
        assert_eq!(scene.primitives[2].style().width, 2);
    }

    #[test]
    fn test_measure_scene_is_filled() {
        let sheet = Stylesheet::default();
        let scene =
            iso_rectangle_scene(IsoRectangleChart::Measure, &iso(), &ChartConfig::default(), &sheet)
                .unwrap();
        assert_eq!(scene.title, "Measure (area) = 24 Square Units");
        assert!(scene.primitives.iter().all(|p| p.style().fill.is_some()));
    }

    #[test]
    fn test_fitted_lines_scene() {
        let results = LineFitResults {
            points: vec![Point::new(0.0, 1.0), Point::new(1.0, 3.0)],
            summary: FitSummary {
                min_penalty: 3.5,
                c: 0.1,
            },
            segments: vec![
                LineSegment::Sloped {
                    slope: 2.0,
                    intercept: 1.0,
                    domain: Domain::new(0.0, 1.0),
                },
                LineSegment::Vertical {
                    x: 2.0,
                    domain: Domain::new(-5.0, 5.0),
                },
            ],
        };
        let config = ChartConfig::default().with_samples(10);
        let scene =
            line_fit_scene(LineFitChart::FittedLines, &results, &config, &Stylesheet::default())
                .unwrap();
        assert_eq!(scene.title, "Minimum Penalty (C = 0.1) is 3.5");
        let polylines: Vec<usize> = scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Polyline { points, .. } => Some(points.len()),
                _ => None,
            })
            .collect();
        assert_eq!(polylines, vec![10, 10]);
        assert_ne!(scene.primitives[2].style().stroke, scene.primitives[3].style().stroke);
    }
}
