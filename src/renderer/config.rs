//! Configuration for chart rendering

use std::fmt;

/// Image format written by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raster PNG via the bitmap backend
    #[default]
    Png,
    /// Vector SVG
    Svg,
}

impl OutputFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Which corner of a rectangle becomes the drawing origin
///
/// `BottomLeft` anchors at `(x_min, y_min)` with a positive height.
/// `TopLeft` anchors at `(x_min, y_max)` with height `y_min - y_max`,
/// which is negative for well-formed rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginConvention {
    #[default]
    BottomLeft,
    TopLeft,
}

/// Configuration options for chart output
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Surface size in pixels (width, height)
    pub size: (u32, u32),

    /// Margin around the plotting area
    pub margin: u32,

    /// Number of points sampled along each line segment
    pub samples: usize,

    /// Fraction of the data span added on each side of the axes
    pub padding: f64,

    /// Always keep (0, 0) inside the axes
    pub include_origin: bool,

    /// Draw the title and axis labels (needs a system font)
    pub annotate: bool,

    /// Caption font size in pixels
    pub caption_size: u32,

    /// Rectangle origin convention
    pub origin: OriginConvention,

    /// Output image format
    pub format: OutputFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: (640, 480),
            margin: 10,
            samples: 100,
            padding: 0.05,
            include_origin: true,
            annotate: true,
            caption_size: 20,
            origin: OriginConvention::BottomLeft,
            format: OutputFormat::Png,
        }
    }
}

impl ChartConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the surface size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the margin around the plot
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the number of samples per line segment
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the axis padding ratio
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set whether the origin is always visible
    pub fn with_include_origin(mut self, include: bool) -> Self {
        self.include_origin = include;
        self
    }

    /// Set whether captions and axis labels are drawn
    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Set the rectangle origin convention
    pub fn with_origin(mut self, origin: OriginConvention) -> Self {
        self.origin = origin;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
