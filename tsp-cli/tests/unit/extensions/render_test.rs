use super::*;

fn create_style(color: Color, line: Option<LineStyle>, marker: Option<Marker>) -> Style {
    Style { color, line, marker }
}

fn render(canvas: &Canvas) -> String {
    let mut buffer = Vec::new();
    canvas.write_svg(&mut buffer).expect("cannot write svg");

    String::from_utf8(buffer).expect("svg is not utf8")
}

fn create_small_config() -> RenderConfig {
    RenderConfig { width: 100, height: 100, margin: 10, ..RenderConfig::default() }
}

#[test]
fn can_parse_styles_used_by_plots() {
    for (format, expected) in [
        ("b", create_style(Color::Blue, Some(LineStyle::Solid), None)),
        (":", create_style(Color::Blue, Some(LineStyle::Dotted), None)),
        (":r", create_style(Color::Red, Some(LineStyle::Dotted), None)),
        ("k:", create_style(Color::Black, Some(LineStyle::Dotted), None)),
        ("r-x", create_style(Color::Red, Some(LineStyle::Solid), Some(Marker::Cross))),
        ("r:x", create_style(Color::Red, Some(LineStyle::Dotted), Some(Marker::Cross))),
        ("g--", create_style(Color::Green, Some(LineStyle::Dashed), None)),
        ("m-.", create_style(Color::Magenta, Some(LineStyle::DashDot), None)),
        ("xk", create_style(Color::Black, None, Some(Marker::Cross))),
        ("og", create_style(Color::Green, None, Some(Marker::Circle))),
        ("+", create_style(Color::Blue, None, Some(Marker::Plus))),
        (".-", create_style(Color::Blue, Some(LineStyle::Solid), Some(Marker::Dot))),
        ("", Style::default()),
    ] {
        assert_eq!(Style::parse(format), Ok(expected), "format: '{format}'");
    }
}

#[test]
fn can_reject_invalid_styles() {
    for (format, expected) in [
        ("q", "unknown style symbol 'q' in 'q'"),
        ("rk", "color is specified twice in style 'rk'"),
        ("xo", "marker is specified twice in style 'xo'"),
        ("-:", "line style is specified twice in style '-:'"),
    ] {
        assert_eq!(Style::parse(format), Err(expected.to_string()));
    }
}

#[test]
fn can_get_equal_aspect_ranges() {
    let square = create_small_config();
    let wide = RenderConfig { width: 200, height: 100, margin: 0, ..RenderConfig::default() };

    for (config, points, expected) in [
        (&square, vec![Point::new(0., 0.), Point::new(1., 1.)], (0.0..1.0, 0.0..1.0)),
        (&square, vec![Point::new(0., 0.), Point::new(0., 2.)], (-1.0..1.0, 0.0..2.0)),
        (&wide, vec![Point::new(0., 0.), Point::new(1., 1.)], (-0.5..1.5, 0.0..1.0)),
        (&wide, vec![], (0.0..1.0, 0.0..1.0)),
    ] {
        assert_eq!(get_equal_aspect_ranges(config, points.iter()), expected, "points: {points:?}");
    }
}

#[test]
fn can_draw_solid_lines_and_markers() {
    let mut canvas = Canvas::new(create_small_config());
    canvas.plot_segment(Point::new(0., 0.), Point::new(1., 0.), Style::parse("r-x").unwrap());
    canvas.plot(vec![Point::new(0.5, 0.5)], Style::parse("og").unwrap());

    let svg = render(&canvas);

    assert_eq!(canvas.size(), 2);
    assert_eq!(svg.matches("<polyline").count(), 1);
    assert!(svg.contains(r##"stroke="#FF0000""##), "{svg}");
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains(r##"fill="#00FF00""##), "{svg}");
}

#[test]
fn can_draw_dashed_lines() {
    let mut canvas = Canvas::new(create_small_config());
    canvas.plot(vec![Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 0.)], Style::parse("m--").unwrap());

    let svg = render(&canvas);

    assert!(svg.contains(r##"stroke="#FF00FF""##), "{svg}");
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn can_write_empty_canvas() {
    let canvas = Canvas::new(RenderConfig::default());

    let svg = render(&canvas);

    assert!(canvas.is_empty());
    assert!(svg.contains("<svg"));
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains(r##"fill="#FFFFFF""##), "{svg}");
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<polyline").count(), 0);
}

#[test]
fn can_skip_background_when_it_is_none() {
    let canvas = Canvas::new(RenderConfig { background: "none".to_string(), ..RenderConfig::default() });

    let svg = render(&canvas);

    assert!(!svg.contains("<rect"), "{svg}");
}

#[test]
fn can_fail_rendering_with_unknown_background() {
    let canvas = Canvas::new(RenderConfig { background: "\"red".to_string(), ..RenderConfig::default() });

    let mut buffer = Vec::new();
    let result = canvas.write_svg(&mut buffer);

    assert_eq!(result, Err("cannot render svg: 'unknown background color '\"red''".to_string()));
    assert!(buffer.is_empty());
}

#[test]
fn can_skip_empty_paths() {
    let mut canvas = Canvas::new(RenderConfig::default());

    canvas.plot(vec![], Style::default());

    assert!(canvas.is_empty());
}
