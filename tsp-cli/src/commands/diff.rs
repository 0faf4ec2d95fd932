#[cfg(test)]
#[path = "../../tests/unit/commands/diff_test.rs"]
mod diff_test;

use super::*;
use tsp_cli::extensions::plot::{load_points, log_tour_diff, plot_point, plot_points, plot_tour_file};

pub const FIRST_TOUR_ARG_NAME: &str = "FIRST_TOUR";
pub const SECOND_TOUR_ARG_NAME: &str = "SECOND_TOUR";
pub const HIGHLIGHT_ARG_NAME: &str = "highlight";

const POINTS_STYLE: &str = "xk";
const FIRST_TOUR_STYLE: &str = "b";
const SECOND_TOUR_STYLE: &str = ":r";
const HIGHLIGHT_STYLE: &str = "og";

pub fn get_diff_app() -> Command {
    add_common_args(add_points_arg(Command::new("diff")))
        .about("Plots all points and two tours on top of each other to compare them")
        .arg(Arg::new(FIRST_TOUR_ARG_NAME).help("Sets the first tour file").required(true).index(2))
        .arg(Arg::new(SECOND_TOUR_ARG_NAME).help("Sets the second tour file").required(true).index(3))
        .arg(
            Arg::new(HIGHLIGHT_ARG_NAME)
                .help("Highlights the point with given zero-based position in the instance")
                .long(HIGHLIGHT_ARG_NAME)
                .value_parser(clap::value_parser!(usize))
                .required(false),
        )
}

pub fn run_diff(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let logger = create_logger(matches);
    let points = load_points(get_points_path(matches)?, &logger)?;
    let first_path = get_required_value(matches, FIRST_TOUR_ARG_NAME)?;
    let second_path = get_required_value(matches, SECOND_TOUR_ARG_NAME)?;

    let mut canvas = create_canvas(matches)?;
    plot_points(&mut canvas, &points, Style::parse(POINTS_STYLE)?);

    let first = plot_tour_file(&mut canvas, &points, first_path, Style::parse(FIRST_TOUR_STYLE)?, &logger)?;
    let second = plot_tour_file(&mut canvas, &points, second_path, Style::parse(SECOND_TOUR_STYLE)?, &logger)?;
    log_tour_diff(&first, &second, &logger);

    if let Some(&index) = matches.get_one::<usize>(HIGHLIGHT_ARG_NAME) {
        plot_point(&mut canvas, &points, index, Style::parse(HIGHLIGHT_STYLE)?)?;
    }

    write_canvas(&canvas, matches, out_writer_func)
}
