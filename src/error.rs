//! Error types for reading result files

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ReadError {
    /// Input path does not exist
    #[error("missing input file '{}'", path.display())]
    MissingFile { path: PathBuf },

    /// Any other failure while reading the file
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record does not have the expected tokens
    #[error("{origin}:{line}: {message}")]
    Parse {
        origin: String,
        /// 1-based line number
        line: usize,
        /// Byte range in the whole source
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    /// Fewer lines than the format requires
    #[error("{origin}: expected at least {expected} line(s), found {found}")]
    ShortFile {
        origin: String,
        expected: usize,
        found: usize,
    },
}

impl ReadError {
    /// Create a parse error for a token or line
    pub fn parse(
        origin: impl Into<String>,
        line: usize,
        span: Span,
        message: impl Into<String>,
        expected: Vec<String>,
    ) -> Self {
        Self::Parse {
            origin: origin.into(),
            line,
            span,
            message: message.into(),
            expected,
        }
    }

    /// Create a short file error
    pub fn short(origin: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShortFile {
            origin: origin.into(),
            expected,
            found,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Only parse errors carry a span; the other variants fall back to
    /// their display text.
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ReadError::Parse {
                span,
                message,
                expected,
                ..
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let mut buf = Vec::new();
                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                match written {
                    Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
                    Err(_) => self.to_string(),
                }
            }
            _ => self.to_string(),
        }
    }

    /// True for errors caused by file contents rather than the filesystem
    pub fn is_format_error(&self) -> bool {
        matches!(self, ReadError::Parse { .. } | ReadError::ShortFile { .. })
    }
}
