#[cfg(test)]
#[path = "../../tests/unit/commands/cycles_test.rs"]
mod cycles_test;

use super::*;
use tsp_cli::extensions::plot::{load_points, plot_cycle_file, plot_tour_file};

pub const CYCLES_ARG_NAME: &str = "CYCLES";
pub const STYLE_ARG_NAME: &str = "style";
pub const TOUR_ARG_NAME: &str = "tour";

const DEFAULT_CYCLE_STYLES: &[&str] = &["g-x", "r-x", "b-x", "m-x", "c-x"];
const TOUR_STYLE: &str = ":k";

pub fn get_cycles_app() -> Command {
    add_edge_base_arg(add_common_args(add_points_arg(Command::new("cycles"))))
        .about("Plots cycles stored as edge lists, e.g. subtours of a multicycle tour")
        .arg(Arg::new(CYCLES_ARG_NAME).help("Sets cycle edge files").required(true).num_args(1..).index(2))
        .arg(create_style_arg(STYLE_ARG_NAME, "Specifies style of every cycle in the order of cycle files, e.g. 'g-x'"))
        .arg(
            Arg::new(TOUR_ARG_NAME)
                .help("Sets the reference tour file drawn over the cycles")
                .short('t')
                .long(TOUR_ARG_NAME)
                .required(false),
        )
}

pub fn run_cycles(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let logger = create_logger(matches);
    let points = load_points(get_points_path(matches)?, &logger)?;
    let base = get_edge_base(matches);

    let cycle_paths = get_many_values(matches, CYCLES_ARG_NAME);
    let styles = get_styles(matches, STYLE_ARG_NAME, DEFAULT_CYCLE_STYLES, cycle_paths.len())?;

    let mut canvas = create_canvas(matches)?;
    cycle_paths.iter().zip(styles).try_for_each(|(path, style)| {
        plot_cycle_file(&mut canvas, &points, path, base, style, &logger).map(|_| ())
    })?;

    if let Some(path) = matches.get_one::<String>(TOUR_ARG_NAME) {
        plot_tour_file(&mut canvas, &points, path, Style::parse(TOUR_STYLE)?, &logger)?;
    }

    write_canvas(&canvas, matches, out_writer_func)
}
