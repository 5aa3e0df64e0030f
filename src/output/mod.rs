//! Writing the reformatted source back in place of the original file

use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::formatting::reformat_text;
use crate::language::{FileError, LineNumberOptions, Position, ReformatError};
use crate::parsing::load;

/// Reformat the file at the given path according to the position records and
/// options, replacing it with the result. On any error the original file is
/// left as it was.
pub fn reformat(
    filename: &Path,
    positions: &[Position],
    options: LineNumberOptions,
) -> Result<(), ReformatError> {
    info!("Reformatting file: {}", filename.display());

    let content = load(filename)?;
    let result = reformat_text(&content, positions, options)?;

    replace(filename, &result)?;
    Ok(())
}

/// Write content to a temporary file alongside the target, then rename it
/// over the target. The temporary file is removed if anything fails before
/// the rename.
pub fn replace(filename: &Path, content: &str) -> Result<(), FileError> {
    let directory = filename
        .parent()
        .filter(|parent| {
            !parent
                .as_os_str()
                .is_empty()
        })
        .unwrap_or(Path::new("."));

    let permissions = fs::metadata(filename)
        .map_err(|error| FileError::from_io("Failed reading", filename, &error))?
        .permissions();

    let prefix = match filename.file_name() {
        Some(name) => format!(".{}.", name.to_string_lossy()),
        None => ".".to_string(),
    };

    let mut temporary = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".fixed")
        .tempfile_in(directory)
        .map_err(|error| FileError::from_io("Failed creating temporary file", filename, &error))?;

    debug!("Writing to {}", temporary.path().display());

    temporary
        .write_all(content.as_bytes())
        .map_err(|error| FileError::from_io("Failed writing", filename, &error))?;
    temporary
        .as_file()
        .sync_all()
        .map_err(|error| FileError::from_io("Failed writing", filename, &error))?;
    temporary
        .as_file()
        .set_permissions(permissions)
        .map_err(|error| FileError::from_io("Failed writing", filename, &error))?;

    temporary
        .persist(filename)
        .map_err(|error| FileError::from_io("Failed replacing", filename, &error.error))?;

    Ok(())
}
