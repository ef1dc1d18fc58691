//! Reading and writing the whitespace-separated result files

pub mod lexer;
pub mod reader;
pub mod writer;

pub use reader::{
    load_contour_edges, load_line_fit, load_points, load_rectangles, load_scalar_result,
    parse_contour_edges, parse_line_fit, parse_points, parse_rectangles, parse_scalar_result,
    read_source,
};
pub use writer::{write_contour_edges, write_line_fit, write_rectangles, write_scalar_result};
