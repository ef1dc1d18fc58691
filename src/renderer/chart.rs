//! Rasterising scenes with plotters

use std::fs;
use std::path::Path;

use log::{debug, info};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use super::config::{ChartConfig, OutputFormat};
use super::primitives::{Primitive, Scene, StrokeStyle};
use crate::geometry::Bounds;

/// Errors raised while writing a chart
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output directory could not be created
    #[error("failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend failed
    #[error("drawing failed: {0}")]
    Backend(String),
}

type DataChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn backend_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Backend(err.to_string())
}

fn shape(color: RGBColor, filled: bool, width: u32) -> ShapeStyle {
    ShapeStyle {
        color: color.to_rgba(),
        filled,
        stroke_width: width,
    }
}

/// Axis ranges for a scene under the given config
pub fn axis_bounds(scene: &Scene, config: &ChartConfig) -> Bounds {
    scene
        .bounds(config.include_origin)
        .unwrap_or(Bounds {
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        })
        .padded(config.padding)
}

/// Draw a scene onto an existing drawing area
///
/// The caller owns the surface and decides when to `present()` it.
pub fn draw_scene<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
    config: &ChartConfig,
) -> Result<(), RenderError> {
    area.fill(&scene.background).map_err(backend_error)?;

    let bounds = axis_bounds(scene, config);
    debug!("'{}' axis bounds {:?}", scene.title, bounds);

    let mut builder = ChartBuilder::on(area);
    builder.margin(config.margin);
    if config.annotate {
        builder
            .caption(&scene.title, ("sans-serif", config.caption_size))
            .x_label_area_size(40)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(backend_error)?;

    if config.annotate {
        chart
            .configure_mesh()
            .disable_mesh()
            .axis_style(scene.axis)
            .x_desc("X-axis")
            .y_desc("Y-axis")
            .draw()
            .map_err(backend_error)?;
    }

    for primitive in &scene.primitives {
        draw_primitive(&mut chart, primitive)?;
    }
    Ok(())
}

fn draw_primitive<DB: DrawingBackend>(
    chart: &mut DataChart<'_, DB>,
    primitive: &Primitive,
) -> Result<(), RenderError> {
    match primitive {
        Primitive::Rect {
            origin,
            width,
            height,
            style,
        } => {
            let corners = [
                (origin.x, origin.y),
                (origin.x + width, origin.y + height),
            ];
            if let Some(fill) = style.fill {
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        corners,
                        shape(fill, true, 0),
                    )))
                    .map_err(backend_error)?;
            }
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    corners,
                    outline(style),
                )))
                .map_err(backend_error)?;
        }
        Primitive::Polyline { points, style } => {
            let path: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
            chart
                .draw_series(std::iter::once(PathElement::new(path, outline(style))))
                .map_err(backend_error)?;
        }
        Primitive::Marker { at, style } => {
            let color = style.fill.unwrap_or(style.stroke);
            chart
                .draw_series(std::iter::once(Circle::new(
                    (at.x, at.y),
                    style.width,
                    shape(color, true, 1),
                )))
                .map_err(backend_error)?;
        }
    }
    Ok(())
}

fn outline(style: &StrokeStyle) -> ShapeStyle {
    shape(style.stroke, false, style.width)
}

/// Render a scene to an image file
///
/// The format comes from `config.format`; the parent directory is created
/// when missing.
pub fn render(scene: &Scene, config: &ChartConfig, output_path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| RenderError::OutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    match config.format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(output_path, config.size).into_drawing_area();
            draw_scene(&root, scene, config)?;
            root.present().map_err(backend_error)?;
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(output_path, config.size).into_drawing_area();
            draw_scene(&root, scene, config)?;
            root.present().map_err(backend_error)?;
        }
    }

    info!(
        "wrote '{}' ({} primitives) to {}",
        scene.title,
        scene.primitives.len(),
        output_path.display()
    );
    Ok(())
}
