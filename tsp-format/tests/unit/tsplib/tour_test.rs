use super::*;
use crate::helpers::*;
use crate::tsplib::{is_tour_section_end, is_tour_section_marker};
use std::io::Write;

fn create_tour_content(body: &str) -> String {
    format!("NAME : test.tour\nTYPE : TOUR\nDIMENSION : 3\nTOUR_SECTION\n{body}")
}

fn create_tour_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("cannot create temp file");
    file.write_all(content.as_bytes()).expect("cannot write temp file");

    file
}

#[test]
fn can_detect_tour_section_lines() {
    assert!(is_tour_section_marker("TOUR_SECTION\n"));
    assert!(!is_tour_section_marker("TYPE : TOUR"));

    assert!(is_tour_section_end("-1"));
    assert!(is_tour_section_end(" -1 "));
    assert!(is_tour_section_end("EOF"));
    assert!(is_tour_section_end(""));
    assert!(!is_tour_section_end("11"));
    assert!(!is_tour_section_end("-12"));
}

#[test]
fn can_read_tour_from_file() {
    let tour = BufReader::new(get_test_resource(EXAMPLE_TOUR_PATH).expect("cannot open file"))
        .read_tour()
        .expect("cannot read tour");

    assert_eq!(tour.indices(), &[1, 2, 5, 3, 4]);
}

#[test]
fn can_read_tour_file_against_points() {
    let path = get_test_resource_path(EXAMPLE_TOUR_PATH).expect("cannot get path");

    let tour = read_tour_file(path, &create_example_points()).expect("cannot read tour");

    assert_eq!(tour, Tour::new(vec![1, 2, 5, 3, 4]));
}

#[test]
fn can_stop_at_different_terminators() {
    for (body, expected) in [
        ("3\n1\n2\n-1\nEOF\n", vec![3, 1, 2]),
        ("3\n1\n-1\n2\n", vec![3, 1]),
        ("3\n1\n\n2\n-1\n", vec![3, 1]),
        ("3\nEOF\n1\n", vec![3]),
        ("3\n1\n2", vec![3, 1, 2]),
        ("3 extra\n 1\n", vec![3, 1]),
    ] {
        let tour = create_tour_content(body).read_tour().expect("cannot read tour");

        assert_eq!(tour.indices(), expected.as_slice(), "body: {body:?}");
    }
}

#[test]
fn can_return_empty_tour_error() {
    for body in ["-1\nEOF\n", "\n1\n2\n", "EOF\n", ""] {
        assert_eq!(create_tour_content(body).read_tour(), Err(ReadError::EmptyTour), "body: {body:?}");
    }
}

#[test]
fn can_return_missing_section_error() {
    let content = "NAME : test.tour\n1\n2\n-1\n".to_string();

    assert_eq!(content.read_tour(), Err(ReadError::MissingSection { marker: "TOUR_SECTION" }));
}

#[test]
fn can_return_malformed_input_error() {
    for (line, reason) in [("1.5", "cannot parse tour index '1.5'"), ("-3", "cannot parse tour index '-3'")] {
        let content = create_tour_content(&format!("1\n{line}\n-1\n"));

        assert_eq!(content.read_tour(), Err(ReadError::malformed(6, line, reason)));
    }
}

#[test]
fn can_return_index_out_of_range_for_file_tour() {
    let file = create_tour_file(&create_tour_content("1\n2\n6\n-1\nEOF\n"));

    let result = read_tour_file(file.path(), &create_example_points());

    assert_eq!(result, Err(ReadError::IndexOutOfRange { index: 6, size: 5 }));
}

#[test]
fn can_resolve_read_tour() {
    let points = create_points(&[(0., 0.), (1., 0.), (1., 1.)]);
    let file = create_tour_file(&create_tour_content("3\n1\n2\n-1\n"));

    let tour = read_tour_file(file.path(), &points).expect("cannot read tour");

    assert_eq!(tour.resolve(&points), Ok(vec![points[2], points[0], points[1]]));
    assert_eq!(tour.closed_path(&points), Ok(vec![points[2], points[0], points[1], points[2]]));
}
