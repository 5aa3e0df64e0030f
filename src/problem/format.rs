use owo_colors::OwoColorize;
use renumber::language::{FileError, PositionError, ReformatError};
use std::path::Path;

/// Format a FileError with concise single-line output
pub fn concise_file_error(error: &FileError) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );

    if !error
        .details
        .is_empty()
    {
        result.push_str(" (");
        result.push_str(&error.details);
        result.push(')');
    }

    result
}

/// Format a PositionError, quoting the offending record so the user can
/// find it in the positions file.
pub fn full_position_error(error: &PositionError, filename: &Path, positions: &Path) -> String {
    let index = error.index() + 1;
    let width = 3.max(
        index
            .to_string()
            .len(),
    );

    format!(
        r#"
{}: {}: {}

{:width$} {}
{:width$} {} record {} in {}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        error
            .message()
            .bold(),
        ' ',
        '|'.bright_blue(),
        index.bright_blue(),
        '|'.bright_blue(),
        index,
        positions.to_string_lossy(),
    )
    .trim_ascii()
    .to_string()
}

pub fn present_reformat_error(error: &ReformatError, filename: &Path, positions: &Path) -> String {
    match error {
        ReformatError::File(error) => concise_file_error(error),
        ReformatError::Position(error) => full_position_error(error, filename, positions),
    }
}
