#[cfg(test)]
#[path = "../../tests/unit/commands/edges_test.rs"]
mod edges_test;

use super::*;
use tsp_cli::extensions::plot::{load_points, plot_edge_file, plot_tour_file};

pub const OLD_EDGES_ARG_NAME: &str = "old";
pub const NEW_EDGES_ARG_NAME: &str = "new";
pub const TOUR_ARG_NAME: &str = "tour";

const OLD_EDGES_STYLE: &str = "r-x";
const NEW_EDGES_STYLE: &str = "r:x";
const TOUR_STYLE: &str = ":k";

pub fn get_edges_app() -> Command {
    add_edge_base_arg(add_common_args(add_points_arg(Command::new("edges"))))
        .about("Plots edges removed and added by a tour merge")
        .arg(
            Arg::new(OLD_EDGES_ARG_NAME)
                .help("Sets the file with removed edges")
                .long(OLD_EDGES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(NEW_EDGES_ARG_NAME)
                .help("Sets the file with added edges")
                .long(NEW_EDGES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(TOUR_ARG_NAME)
                .help("Sets the reference tour file drawn below the edges")
                .short('t')
                .long(TOUR_ARG_NAME)
                .required(false),
        )
}

pub fn run_edges(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let logger = create_logger(matches);
    let points = load_points(get_points_path(matches)?, &logger)?;
    let base = get_edge_base(matches);

    let mut canvas = create_canvas(matches)?;
    for (arg_name, style) in [(OLD_EDGES_ARG_NAME, OLD_EDGES_STYLE), (NEW_EDGES_ARG_NAME, NEW_EDGES_STYLE)] {
        let path = get_required_value(matches, arg_name)?;
        plot_edge_file(&mut canvas, &points, path, base, Style::parse(style)?, &logger)?;
    }

    if let Some(path) = matches.get_one::<String>(TOUR_ARG_NAME) {
        plot_tour_file(&mut canvas, &points, path, Style::parse(TOUR_STYLE)?, &logger)?;
    }

    write_canvas(&canvas, matches, out_writer_func)
}
