//! Chart renderer for parsed results
//!
//! Geometry is first turned into a [`Scene`] of styled primitives, which is
//! then drawn onto a plotters surface and written as PNG or SVG.

pub mod chart;
pub mod config;
pub mod primitives;

pub use chart::{draw_scene, render, RenderError};
pub use config::{ChartConfig, OriginConvention, OutputFormat};
pub use primitives::{Primitive, Scene, StrokeStyle};
