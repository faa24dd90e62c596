use std::env;
use std::process;

use append_logger::{LogError, Logger, DEFAULT_LOG_PATH};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), LogError> {
    let args: Vec<String> = env::args().collect();

    let (file_path, entry) = match args.as_slice() {
        [_, entry] => (DEFAULT_LOG_PATH, entry.as_str()),
        [_, file_path, entry] => (file_path.as_str(), entry.as_str()),
        _ => {
            return Err(LogError::InvalidArguments(
                "Usage: append_logger [<file>] <message>".to_string(),
            ))
        }
    };

    // Paths resolve against the current directory, the meta log included
    Logger::new().append(file_path, entry)
}
