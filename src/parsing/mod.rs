//! Loading the generated source and its position records

use std::path::Path;
use tracing::debug;

use crate::language::{FileError, Position};

/// Read a file and return an owned String.
pub fn load(filename: &Path) -> Result<String, FileError> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(FileError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename: filename.to_path_buf(),
                }),
                _ => Err(FileError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename: filename.to_path_buf(),
                }),
            }
        }
    }
}

/// Parse position records from JSON text: an array of objects with
/// `original_line`, `emitted_line` and, optionally, `emitted_column`.
pub fn parse_positions(filename: &Path, content: &str) -> Result<Vec<Position>, FileError> {
    match serde_json::from_str::<Vec<Position>>(content) {
        Ok(positions) => {
            debug!(
                "Found {} position{}",
                positions.len(),
                if positions.len() == 1 { "" } else { "s" }
            );
            Ok(positions)
        }
        Err(error) => Err(FileError {
            problem: "Invalid positions".to_string(),
            details: error.to_string(),
            filename: filename.to_path_buf(),
        }),
    }
}

/// Read and parse a positions file.
pub fn load_positions(filename: &Path) -> Result<Vec<Position>, FileError> {
    let content = load(filename)?;
    parse_positions(filename, &content)
}
