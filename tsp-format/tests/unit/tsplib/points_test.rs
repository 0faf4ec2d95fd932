use super::*;
use crate::helpers::*;
use crate::tsplib::{is_coord_section_end, is_coord_section_marker};
use std::io::ErrorKind;

#[test]
fn can_detect_coord_section_lines() {
    assert!(is_coord_section_marker("NODE_COORD_SECTION"));
    assert!(is_coord_section_marker("NODE_COORD_SECTION :\n"));
    assert!(!is_coord_section_marker("NODE_COORD_TYPE : TWOD_COORDS"));

    assert!(is_coord_section_end(""));
    assert!(is_coord_section_end("  \n"));
    assert!(is_coord_section_end("EOF"));
    assert!(!is_coord_section_end("1 0 0"));
}

#[test]
fn can_read_points_in_file_order() {
    let points = BufReader::new(get_test_resource(EXAMPLE_POINTS_PATH).expect("cannot open file"))
        .read_points()
        .expect("cannot read points");

    assert_eq!(points, create_example_points());
}

#[test]
fn can_read_point_file_by_path() {
    let path = get_test_resource_path(EXAMPLE_POINTS_PATH).expect("cannot get path");

    let points = read_point_file(path).expect("cannot read points");

    assert_eq!(points.len(), 5);
}

#[test]
fn can_read_exactly_n_points() {
    for size in [1_usize, 2, 10, 250] {
        let data = (1..=size).map(|idx| format!("{idx} {} {}.5\n", idx * 2, idx)).collect::<String>();
        let content = format!("NAME : generated\nTYPE : TSP\nNODE_COORD_SECTION\n{data}EOF\n");

        let points = content.read_points().expect("cannot read points");

        assert_eq!(points.len(), size);
        assert_eq!(points.first(), Some(&Point::new(2., 1.5)));
        assert_eq!(points.last(), Some(&Point::new((size * 2) as f64, size as f64 + 0.5)));
    }
}

#[test]
fn can_stop_reading_points_at_blank_line() {
    let content = "NODE_COORD_SECTION\n1 1 1\n2 2 2\n\n3 3 3\nEOF\n".to_string();

    assert_eq!(content.read_points(), Ok(create_points(&[(1., 1.), (2., 2.)])));
}

#[test]
fn can_read_points_till_end_of_input() {
    let content = "NODE_COORD_SECTION\n1 1e3 -2.5\n2 7 8".to_string();

    assert_eq!(content.read_points(), Ok(create_points(&[(1000., -2.5), (7., 8.)])));
}

#[test]
fn can_ignore_index_field_and_extra_fields() {
    let content = "NODE_COORD_SECTION\n42 1 2 extra\n7 3 4\nEOF\n".to_string();

    assert_eq!(content.read_points(), Ok(create_points(&[(1., 2.), (3., 4.)])));
}

#[test]
fn can_return_missing_section_error() {
    let content = "NAME : no coords\nTYPE : TSP\n1 0 0\n2 1 1\nEOF\n".to_string();

    assert_eq!(content.read_points(), Err(ReadError::MissingSection { marker: "NODE_COORD_SECTION" }));
    assert_eq!(String::new().read_points(), Err(ReadError::MissingSection { marker: "NODE_COORD_SECTION" }));
}

#[test]
fn can_return_malformed_input_error() {
    for (line, reason) in [
        ("3 1", "expecting at least 3 fields, got 2"),
        ("3 abc 1", "cannot parse x coordinate 'abc'"),
        ("3 1 1,5", "cannot parse y coordinate '1,5'"),
    ] {
        let content = format!("NAME : bad\nNODE_COORD_SECTION\n1 0 0\n2 1 1\n{line}\nEOF\n");

        let result = content.read_points();

        assert_eq!(result, Err(ReadError::malformed(5, line, reason)));
    }
}

#[test]
fn can_return_malformed_input_error_for_invalid_utf8_line() {
    let content: &[u8] = b"NAME : x\nNODE_COORD_SECTION\n1 0 0\n2 \xff\xfe 1\nEOF\n";

    let result = BufReader::new(content).read_points();

    assert_eq!(result, Err(ReadError::malformed(4, "2 \u{fffd}\u{fffd} 1", "line is not valid utf-8")));
}

#[test]
fn can_return_file_access_error() {
    let dir = tempfile::tempdir().expect("cannot create temp dir");

    let result = read_point_file(dir.path().join("missing.tsp"));

    assert!(matches!(result, Err(ReadError::FileAccess(ref err)) if err.kind() == ErrorKind::NotFound));
}
