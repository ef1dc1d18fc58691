//! Integration tests for reading and writing result files

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use result_plot::records::{
    load_contour_edges, load_line_fit, load_points, load_rectangles, load_scalar_result,
    write_contour_edges, write_line_fit, write_rectangles, write_scalar_result,
};
use result_plot::{Domain, FitSummary, LineSegment, ReadError, Rectangle, ScalarResult};

#[test]
fn test_scalar_result_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.txt");
    fs::write(&path, "24.0\n10.5\n").unwrap();

    let result = load_scalar_result(&path).unwrap();
    insta::assert_debug_snapshot!(result, @r###"
    ScalarResult {
        measure: 24.0,
        contour_perimeter: 10.5,
    }
    "###);
}

#[test]
fn test_scalar_result_single_line_is_short() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.txt");
    fs::write(&path, "24.0\n").unwrap();

    let err = load_scalar_result(&path).unwrap_err();
    assert!(matches!(err, ReadError::ShortFile { found: 1, .. }));
}

#[test]
fn test_rectangle_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rectangles.txt");
    let rects: Vec<Rectangle> = (0..25)
        .map(|i| {
            let f = i as f64;
            Rectangle::new(f * 0.5, f * 0.5 + 3.25, -f, -f + 1.0 / 3.0)
        })
        .collect();

    write_rectangles(&path, &rects).unwrap();
    let back = load_rectangles(&path).unwrap();

    assert_eq!(back.len(), rects.len());
    for (a, b) in rects.iter().zip(&back) {
        assert!((a.x_min - b.x_min).abs() < 1e-9);
        assert!((a.x_max - b.x_max).abs() < 1e-9);
        assert!((a.y_min - b.y_min).abs() < 1e-9);
        assert!((a.y_max - b.y_max).abs() < 1e-9);
    }
}

#[test]
fn test_contour_edges_roundtrip_through_extent_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contour_edges.txt");
    let edges = vec![
        Rectangle::from_origin_extent(0.0, 0.0, 4.0, 0.0),
        Rectangle::from_origin_extent(4.0, 0.0, 0.0, 3.0),
    ];

    write_contour_edges(&path, &edges).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "0 0 4 0\n4 0 0 3\n");
    assert_eq!(load_contour_edges(&path).unwrap(), edges);
}

#[test]
fn test_line_fit_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "3.5 0.1\ninf 2.0 -5.0 5.0\n").unwrap();

    let (summary, segments) = load_line_fit(&path).unwrap();
    assert_eq!(
        summary,
        FitSummary {
            min_penalty: 3.5,
            c: 0.1
        }
    );
    insta::assert_debug_snapshot!(segments, @r###"
    [
        Vertical {
            x: 2.0,
            domain: Domain {
                start: -5.0,
                stop: 5.0,
            },
        },
    ]
    "###);
}

#[test]
fn test_line_fit_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let summary = FitSummary {
        min_penalty: 12.75,
        c: 2.0,
    };
    let segments = vec![
        LineSegment::Sloped {
            slope: -0.5,
            intercept: 4.0,
            domain: Domain::new(0.0, 10.0),
        },
        LineSegment::Vertical {
            x: 10.0,
            domain: Domain::new(-1.0, 3.0),
        },
    ];

    write_line_fit(&path, &summary, &segments).unwrap();
    let (back_summary, back_segments) = load_line_fit(&path).unwrap();
    assert_eq!(back_summary, summary);
    assert_eq!(back_segments, segments);
}

#[test]
fn test_scalar_result_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.txt");
    let result = ScalarResult {
        measure: 1234.0,
        contour_perimeter: 98.5,
    };
    write_scalar_result(&path, &result).unwrap();
    assert_eq!(load_scalar_result(&path).unwrap(), result);
}

#[test]
fn test_points_file_with_generator_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.txt");
    fs::write(&path, "4\n0.5\n0 1\n1 3.1\n2 4.9\n3 7\n").unwrap();

    let points = load_points(&path).unwrap();
    assert_eq!(points.len(), 4);
    assert_eq!(points[1].y, 3.1);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.txt");

    let err = load_rectangles(&path).unwrap_err();
    match &err {
        ReadError::MissingFile { path: missing } => assert_eq!(missing, &path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_parse_error_report_points_at_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let source = "3.5 0.1\nvertical 2.0 -5.0 5.0\n";
    fs::write(&path, source).unwrap();

    let err = load_line_fit(&path).unwrap_err();
    match &err {
        ReadError::Parse { line, span, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(&source[span.clone()], "vertical");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let report = err.format(source, "out.txt");
    assert!(report.contains("invalid token 'vertical'"));
}
