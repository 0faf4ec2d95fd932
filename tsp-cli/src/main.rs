//! A command line interface to plot TSP instances, tours and edge lists as svg.
//!
//! ## Usage
//!
//! - plot two tours over the same instance
//!
//!     `tsp-cli tour xrb14233.tsp merged_tour.txt xrb14233.tour --style ":" --style "k:" -o tours.svg`
//!
//! - compare two tours, highlighting a point
//!
//!     `tsp-cli diff xrb14233.tsp first.tour second.tour --highlight 42`
//!
//! - plot edges exchanged by a merge together with a reference tour
//!
//!     `tsp-cli edges xrb14233.tsp --old old_edges.txt --new new_edges.txt --tour xrb14233.tour`
//!
//! For more details, simply run
//!
//!     tsp-cli --help

mod cli;
mod commands;

use self::cli::{get_app, run_subcommand};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_subcommand(matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
