#[cfg(test)]
#[path = "../../tests/unit/commands/tour_test.rs"]
mod tour_test;

use super::*;
use tsp_cli::extensions::plot::{load_points, plot_tour_file};

pub const TOURS_ARG_NAME: &str = "TOURS";
pub const STYLE_ARG_NAME: &str = "style";

const DEFAULT_TOUR_STYLES: &[&str] = &["b", ":r", "k:", "g--", "m-."];

pub fn get_tour_app() -> Command {
    add_common_args(add_points_arg(Command::new("tour")))
        .about("Plots one or more tours over the instance")
        .arg(Arg::new(TOURS_ARG_NAME).help("Sets tour files with TOUR_SECTION").required(true).num_args(1..).index(2))
        .arg(create_style_arg(STYLE_ARG_NAME, "Specifies style of every tour in the order of tour files, e.g. 'k:'"))
}

pub fn run_tour(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let logger = create_logger(matches);
    let points = load_points(get_points_path(matches)?, &logger)?;

    let tour_paths = get_many_values(matches, TOURS_ARG_NAME);
    let styles = get_styles(matches, STYLE_ARG_NAME, DEFAULT_TOUR_STYLES, tour_paths.len())?;

    let mut canvas = create_canvas(matches)?;
    tour_paths.iter().zip(styles).try_for_each(|(path, style)| {
        plot_tour_file(&mut canvas, &points, path, style, &logger).map(|_| ())
    })?;

    write_canvas(&canvas, matches, out_writer_func)
}
