use lifo_history::{HistoryManager, Options};
use tracing_subscriber::EnvFilter;

// This example drives a history the way a text editor would, printing every outcome. Run with
// `RUST_LOG=lifo_history=trace` to see the transitions the history records.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut history = HistoryManager::with_options(Options {
        undo_capacity: Some(8),
        redo_capacity: None,
    });

    let script = [
        "type hello",
        "type world",
        "undo",
        "undo",
        "undo",
        "redo",
        "bold",
        "redo",
    ];
    for command in script {
        match command {
            "undo" => match history.undo() {
                Ok(action) => println!("Undo: {action}"),
                Err(error) => println!("{error}"),
            },
            "redo" => match history.redo() {
                Ok(action) => println!("Redo: {action}"),
                Err(error) => println!("{error}"),
            },
            action => match history.push_action(action.to_owned()) {
                Ok(()) => println!("Action added: {action}"),
                Err(error) => println!("{error}"),
            },
        }
    }

    let (undo, redo) = history.snapshot();
    println!("undo: {undo:?}\nredo: {redo:?}");
}
