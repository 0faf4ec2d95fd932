#[cfg(test)]
#[path = "../tests/unit/cli_test.rs"]
mod cli_test;

use crate::commands::create_write_buffer;
use crate::commands::cycles::{get_cycles_app, run_cycles};
use crate::commands::diff::{get_diff_app, run_diff};
use crate::commands::edges::{get_edges_app, run_edges};
use crate::commands::tour::{get_tour_app, run_tour};
use clap::{ArgMatches, Command};

pub fn get_app() -> Command {
    Command::new("TSP Plot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to plot TSP instances, tours and edge lists")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(get_tour_app())
        .subcommand(get_diff_app())
        .subcommand(get_edges_app())
        .subcommand(get_cycles_app())
}

pub fn run_subcommand(arg_matches: ArgMatches) -> Result<(), String> {
    match arg_matches.subcommand() {
        Some(("tour", tour_matches)) => run_tour(tour_matches, create_write_buffer),
        Some(("diff", diff_matches)) => run_diff(diff_matches, create_write_buffer),
        Some(("edges", edges_matches)) => run_edges(edges_matches, create_write_buffer),
        Some(("cycles", cycles_matches)) => run_cycles(cycles_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}
