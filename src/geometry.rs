//! Core value types for the result files
//!
//! Every record read from disk ends up as one of these. Both rectangle
//! encodings (min/max corners and origin + extent) collapse into a single
//! [`Rectangle`] at the file boundary.

/// A 2D point in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0)
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// An axis-aligned box stored as min/max corners
///
/// `x_min <= x_max` and `y_min <= y_max` are the producer's responsibility.
/// Inverted boxes are kept exactly as read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rectangle {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Build a rectangle from the origin + extent encoding used for contour edges
    pub fn from_origin_extent(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, x + width, y, y + height)
    }

    /// Convert back to `(x, y, width, height)`
    pub fn origin_extent(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.y_min, self.width(), self.height())
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Area of the box (negative for inverted boxes)
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// A zero width or zero height box, as emitted for contour edges
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// The four corners, counter-clockwise from (x_min, y_min)
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }
}

/// Measure and contour perimeter of a rectangle union
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarResult {
    /// Total area covered by the union
    pub measure: f64,
    /// Total contour length
    pub contour_perimeter: f64,
}

/// Objective value of a line fit and the per-segment cost used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    pub min_penalty: f64,
    pub c: f64,
}

/// A closed interval along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub stop: f64,
}

impl Domain {
    pub fn new(start: f64, stop: f64) -> Self {
        Self { start, stop }
    }

    /// `n` evenly spaced values from `start` to `stop`, both included
    pub fn linspace(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.start],
            _ => {
                let step = (self.stop - self.start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.stop
                        } else {
                            self.start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

/// One segment of a piecewise-linear fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSegment {
    /// `y = slope * x + intercept` for x in `domain`
    Sloped {
        slope: f64,
        intercept: f64,
        domain: Domain,
    },
    /// `x = x` for y in `domain`
    Vertical { x: f64, domain: Domain },
}

impl LineSegment {
    pub fn domain(&self) -> Domain {
        match self {
            LineSegment::Sloped { domain, .. } | LineSegment::Vertical { domain, .. } => *domain,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, LineSegment::Vertical { .. })
    }

    /// Sample the segment as a polyline of `n` points over its domain
    pub fn sample(&self, n: usize) -> Vec<Point> {
        match *self {
            LineSegment::Sloped {
                slope,
                intercept,
                domain,
            } => domain
                .linspace(n)
                .into_iter()
                .map(|x| Point::new(x, slope * x + intercept))
                .collect(),
            LineSegment::Vertical { x, domain } => domain
                .linspace(n)
                .into_iter()
                .map(|y| Point::new(x, y))
                .collect(),
        }
    }
}

/// Axis ranges enclosing a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Smallest bounds containing every point, `None` if there are no finite points
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .fold(None, |acc: Option<Bounds>, p| {
                Some(match acc {
                    None => Bounds {
                        x_min: p.x,
                        x_max: p.x,
                        y_min: p.y,
                        y_max: p.y,
                    },
                    Some(b) => b.include(p),
                })
            })
    }

    /// Grow to contain `p`
    pub fn include(self, p: Point) -> Self {
        Bounds {
            x_min: self.x_min.min(p.x),
            x_max: self.x_max.max(p.x),
            y_min: self.y_min.min(p.y),
            y_max: self.y_max.max(p.y),
        }
    }

    /// Pad each side by `ratio` of the span; zero spans are widened by 1
    pub fn padded(self, ratio: f64) -> Self {
        let (x_min, x_max) = pad_range(self.x_min, self.x_max, ratio);
        let (y_min, y_max) = pad_range(self.y_min, self.y_max, ratio);
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn pad_range(min: f64, max: f64, ratio: f64) -> (f64, f64) {
    let span = max - min;
    if span <= 0.0 {
        (min - 1.0, max + 1.0)
    } else {
        (min - span * ratio, max + span * ratio)
    }
}
