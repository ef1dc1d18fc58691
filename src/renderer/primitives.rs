//! Drawing primitives derived from parsed geometry
//!
//! A [`Scene`] is everything one chart needs: the title, the colors of the
//! surface and the styled primitives. Building a scene is pure, so the
//! geometry-to-primitive conversion can be checked without a backend.

use plotters::style::RGBColor;

use super::config::OriginConvention;
use crate::geometry::{Bounds, LineSegment, Point, Rectangle};

/// Stroke color, optional fill and line width of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub stroke: RGBColor,
    pub fill: Option<RGBColor>,
    /// Line width, or marker radius for points
    pub width: u32,
}

impl StrokeStyle {
    /// An unfilled stroke
    pub fn new(stroke: RGBColor, width: u32) -> Self {
        Self {
            stroke,
            fill: None,
            width,
        }
    }

    /// Set the fill color
    pub fn with_fill(mut self, fill: RGBColor) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// A single shape in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Box anchored at `origin` spanning `width` x `height` (either may be negative)
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        style: StrokeStyle,
    },
    /// Open polyline
    Polyline {
        points: Vec<Point>,
        style: StrokeStyle,
    },
    /// Scatter marker
    Marker { at: Point, style: StrokeStyle },
}

impl Primitive {
    /// Convert a rectangle under the given origin convention
    pub fn rect(rect: &Rectangle, convention: OriginConvention, style: StrokeStyle) -> Self {
        let (origin, height) = match convention {
            OriginConvention::BottomLeft => (Point::new(rect.x_min, rect.y_min), rect.height()),
            OriginConvention::TopLeft => {
                (Point::new(rect.x_min, rect.y_max), rect.y_min - rect.y_max)
            }
        };
        Primitive::Rect {
            origin,
            width: rect.width(),
            height,
            style,
        }
    }

    /// Sample a line segment into a polyline
    pub fn segment(segment: &LineSegment, samples: usize, style: StrokeStyle) -> Self {
        Primitive::Polyline {
            points: segment.sample(samples),
            style,
        }
    }

    pub fn style(&self) -> &StrokeStyle {
        match self {
            Primitive::Rect { style, .. }
            | Primitive::Polyline { style, .. }
            | Primitive::Marker { style, .. } => style,
        }
    }

    /// Points that must be visible for this primitive to be fully shown
    pub fn extent(&self) -> Vec<Point> {
        match self {
            Primitive::Rect {
                origin,
                width,
                height,
                ..
            } => vec![
                *origin,
                Point::new(origin.x + width, origin.y + height),
            ],
            Primitive::Polyline { points, .. } => points.clone(),
            Primitive::Marker { at, .. } => vec![*at],
        }
    }
}

/// One chart's worth of styled primitives
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub background: RGBColor,
    pub axis: RGBColor,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene on a white background
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            background: RGBColor(255, 255, 255),
            axis: RGBColor(0, 0, 0),
            primitives: Vec::new(),
        }
    }

    /// Set the surface and axis colors
    pub fn with_colors(mut self, background: RGBColor, axis: RGBColor) -> Self {
        self.background = background;
        self.axis = axis;
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Add every rectangle with the same style
    pub fn with_rectangles(
        mut self,
        rects: &[Rectangle],
        convention: OriginConvention,
        style: StrokeStyle,
    ) -> Self {
        self.primitives
            .extend(rects.iter().map(|r| Primitive::rect(r, convention, style)));
        self
    }

    /// Add each segment as a polyline; styles are cycled
    pub fn with_segments(
        mut self,
        segments: &[LineSegment],
        samples: usize,
        styles: &[StrokeStyle],
    ) -> Self {
        if styles.is_empty() {
            return self;
        }
        self.primitives.extend(
            segments
                .iter()
                .zip(styles.iter().cycle())
                .map(|(seg, style)| Primitive::segment(seg, samples, *style)),
        );
        self
    }

    /// Add a marker per point
    pub fn with_points(mut self, points: &[Point], style: StrokeStyle) -> Self {
        self.primitives
            .extend(points.iter().map(|&at| Primitive::Marker { at, style }));
        self
    }

    /// Bounds of all primitives, optionally forced to contain the origin
    pub fn bounds(&self, include_origin: bool) -> Option<Bounds> {
        let extent = self.primitives.iter().flat_map(Primitive::extent);
        if include_origin {
            Bounds::from_points(std::iter::once(Point::origin()).chain(extent))
        } else {
            Bounds::from_points(extent)
        }
    }
}
