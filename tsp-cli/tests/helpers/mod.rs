use crate::InfoLogger;
use std::sync::{Arc, Mutex};

pub const EXAMPLE_POINTS_PATH: &str = "../tsp-format/tests/data/example.tsp";
pub const EXAMPLE_TOUR_PATH: &str = "../tsp-format/tests/data/example.tour";
pub const OLD_EDGES_PATH: &str = "tests/data/old_edges.txt";
pub const NEW_EDGES_PATH: &str = "tests/data/new_edges.txt";
pub const CYCLE0_PATH: &str = "tests/data/cycle0.txt";

/// Creates a logger which keeps all messages in memory.
pub fn create_memory_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}
