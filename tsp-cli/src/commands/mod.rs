use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod cycles;
pub mod diff;
pub mod edges;
pub mod tour;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use tsp_cli::extensions::config::{RenderConfig, read_config};
use tsp_cli::extensions::render::{Canvas, Style};
use tsp_cli::format::common::IndexBase;
use tsp_cli::{InfoLogger, LogTarget, create_info_logger};

pub(crate) type OutWriterFunc = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

const POINTS_ARG_NAME: &str = "POINTS";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const QUIET_ARG_NAME: &str = "quiet";
const ONE_BASED_EDGES_ARG_NAME: &str = "one-based-edges";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn add_points_arg(command: Command) -> Command {
    command.arg(
        Arg::new(POINTS_ARG_NAME).help("Sets the instance file with NODE_COORD_SECTION").required(true).index(1),
    )
}

fn add_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the svg file for result output, stdout is used when it is not set")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the json file with render configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(QUIET_ARG_NAME)
                .help("Disables informational messages")
                .short('q')
                .long(QUIET_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

fn add_edge_base_arg(command: Command) -> Command {
    command.arg(
        Arg::new(ONE_BASED_EDGES_ARG_NAME)
            .help("Treats point indices of edge files as one-based, zero-based is used by default")
            .long(ONE_BASED_EDGES_ARG_NAME)
            .action(ArgAction::SetTrue),
    )
}

fn create_style_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).short('s').long(name).allow_hyphen_values(true).action(ArgAction::Append)
}

fn get_required_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a str, String> {
    matches.get_one::<String>(arg_name).map(|value| value.as_str()).ok_or_else(|| format!("'{arg_name}' is not set"))
}

fn get_many_values<'a>(matches: &'a ArgMatches, arg_name: &str) -> Vec<&'a str> {
    matches.get_many::<String>(arg_name).map(|values| values.map(|value| value.as_str()).collect()).unwrap_or_default()
}

fn get_points_path(matches: &ArgMatches) -> Result<&str, String> {
    get_required_value(matches, POINTS_ARG_NAME)
}

/// Returns styles given by user for `arg_name` complemented by defaults for the rest of `size` items.
fn get_styles(matches: &ArgMatches, arg_name: &str, defaults: &[&str], size: usize) -> Result<Vec<Style>, String> {
    let styles = get_many_values(matches, arg_name);

    (0..size)
        .map(|idx| styles.get(idx).copied().unwrap_or_else(|| defaults[idx % defaults.len()]))
        .map(|format| Style::parse(format).map_err(|err| format!("cannot parse style: '{err}'")))
        .collect()
}

fn get_edge_base(matches: &ArgMatches) -> IndexBase {
    if matches.get_flag(ONE_BASED_EDGES_ARG_NAME) { IndexBase::One } else { IndexBase::Zero }
}

fn create_logger(matches: &ArgMatches) -> InfoLogger {
    let target = if matches.get_flag(QUIET_ARG_NAME) {
        LogTarget::Silent
    } else if matches.contains_id(OUT_RESULT_ARG_NAME) {
        LogTarget::Stdout
    } else {
        LogTarget::Stderr
    };

    create_info_logger(target)
}

fn create_canvas(matches: &ArgMatches) -> Result<Canvas, String> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => RenderConfig::default(),
    };

    Ok(Canvas::new(config))
}

fn write_canvas(canvas: &Canvas, matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut out_buffer = out_writer_func(out_file);

    canvas.write_svg(&mut out_buffer)
}
