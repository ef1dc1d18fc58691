//! Result Plot CLI
//!
//! Usage:
//!   result-plot [OPTIONS] iso-rectangles [--result FILE] [--rectangles FILE] [--contour FILE]
//!   result-plot [OPTIONS] line-fit [--points FILE] [--fit FILE]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for colors and widths (TOML format)
//!   -o, --output-dir <DIR>   Directory charts are written to
//!   -f, --format <FORMAT>    png or svg
//!   --show                   Open the last chart in the system viewer

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use log::warn;

use result_plot::records::read_source;
use result_plot::{
    render_iso_rectangles, render_line_fit, viewer, ChartConfig, IsoRectangleInputs,
    LineFitInputs, OriginConvention, OutputFormat, PlotError, ReadError, RenderConfig, Stylesheet,
};

#[derive(Parser)]
#[command(name = "result-plot")]
#[command(about = "Render iso-rectangle and line-fitting results as charts")]
struct Cli {
    /// Stylesheet file for colors and widths (TOML format)
    #[arg(short, long, global = true)]
    stylesheet: Option<PathBuf>,

    /// Directory charts are written to
    #[arg(short, long, global = true, default_value = "output")]
    output_dir: PathBuf,

    /// Image format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Chart width in pixels
    #[arg(long, global = true, default_value_t = 640)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, global = true, default_value_t = 480)]
    height: u32,

    /// Anchor rectangles at their top-left corner (negative heights)
    #[arg(long, global = true)]
    top_left_origin: bool,

    /// Skip the caption and axis labels
    #[arg(long, global = true)]
    no_annotate: bool,

    /// Open the last chart in the system image viewer
    #[arg(long, global = true)]
    show: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render rectangles, contour and measure charts
    IsoRectangles {
        /// Measure and perimeter file
        #[arg(long, default_value = "output/result.txt")]
        result: PathBuf,

        /// Rectangle file (x_min x_max y_min y_max)
        #[arg(long, default_value = "output/rectangles.txt")]
        rectangles: PathBuf,

        /// Contour edge file (x y width height)
        #[arg(long, default_value = "output/contour_edges.txt")]
        contour: PathBuf,
    },

    /// Render input points and fitted segments
    LineFit {
        /// Solver input point file
        #[arg(long, default_value = "input/in.txt")]
        points: PathBuf,

        /// Solver result file (min_penalty C, then segments)
        #[arg(long, default_value = "output/out.txt")]
        fit: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => OutputFormat::Png,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let origin = if cli.top_left_origin {
        OriginConvention::TopLeft
    } else {
        OriginConvention::BottomLeft
    };
    let chart = ChartConfig::new()
        .with_size(cli.width, cli.height)
        .with_format(cli.format.into())
        .with_origin(origin)
        .with_annotate(!cli.no_annotate);
    let config = RenderConfig::new()
        .with_chart(chart)
        .with_stylesheet(stylesheet)
        .with_output_dir(cli.output_dir.clone());

    let result = match &cli.command {
        Command::IsoRectangles {
            result,
            rectangles,
            contour,
        } => {
            let inputs = IsoRectangleInputs {
                result: result.clone(),
                rectangles: rectangles.clone(),
                contour_edges: contour.clone(),
            };
            render_iso_rectangles(&inputs, &config)
        }
        Command::LineFit { points, fit } => {
            let inputs = LineFitInputs {
                points: points.clone(),
                fit: fit.clone(),
            };
            render_line_fit(&inputs, &config)
        }
    };

    match result {
        Ok(written) => {
            for path in &written {
                println!("{}", path.display());
            }
            if cli.show {
                if let Some(last) = written.last() {
                    if let Err(e) = viewer::open_in_viewer(last) {
                        warn!("{}", e);
                    }
                }
            }
        }
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }
}

/// Print an error, with source context for parse errors
fn report(error: &PlotError) {
    if let PlotError::Read(read @ ReadError::Parse { origin, .. }) = error {
        if let Ok(source) = read_source(Path::new(origin)) {
            eprint!("{}", read.format(&source, origin));
            return;
        }
    }
    eprintln!("Error: {}", error);
}
