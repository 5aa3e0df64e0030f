use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Failure reading or writing one of the files involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub problem: String,
    pub details: String,
    pub filename: PathBuf,
}

impl FileError {
    pub fn from_io(problem: &str, filename: &Path, error: &std::io::Error) -> FileError {
        FileError {
            problem: problem.to_string(),
            details: error.to_string(),
            filename: filename.to_path_buf(),
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}: {}", self.problem, self.filename.display())
        } else {
            write!(
                f,
                "{}: {}: {}",
                self.problem,
                self.filename.display(),
                self.details
            )
        }
    }
}

impl std::error::Error for FileError {}

/// Position records that do not describe the file they were given with.
/// Each variant carries the index of the offending record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    ZeroValue(usize),
    OutOfOrder(usize),
    ColumnNotIncreasing(usize),
    OriginalDecreasing(usize),
    PastEndOfFile(usize, usize),
    ColumnPastEndOfLine(usize, usize),
}

impl PositionError {
    pub fn index(&self) -> usize {
        match self {
            PositionError::ZeroValue(index) => *index,
            PositionError::OutOfOrder(index) => *index,
            PositionError::ColumnNotIncreasing(index) => *index,
            PositionError::OriginalDecreasing(index) => *index,
            PositionError::PastEndOfFile(index, _) => *index,
            PositionError::ColumnPastEndOfLine(index, _) => *index,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PositionError::ZeroValue(_) => "line and column numbers start at 1".to_string(),
            PositionError::OutOfOrder(_) => "emitted lines go backwards".to_string(),
            PositionError::ColumnNotIncreasing(_) => {
                "columns on the same emitted line must increase".to_string()
            }
            PositionError::OriginalDecreasing(_) => {
                "original lines on the same emitted line must not decrease".to_string()
            }
            PositionError::PastEndOfFile(_, count) => {
                format!("emitted line is beyond the {} lines in the file", count)
            }
            PositionError::ColumnPastEndOfLine(_, length) => {
                format!("column is beyond the {} characters on the line", length)
            }
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {}: {}", self.index() + 1, self.message())
    }
}

impl std::error::Error for PositionError {}

/// Everything that can go wrong reformatting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReformatError {
    File(FileError),
    Position(PositionError),
}

impl fmt::Display for ReformatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReformatError::File(error) => fmt::Display::fmt(error, f),
            ReformatError::Position(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for ReformatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReformatError::File(error) => Some(error),
            ReformatError::Position(error) => Some(error),
        }
    }
}

impl From<FileError> for ReformatError {
    fn from(error: FileError) -> Self {
        ReformatError::File(error)
    }
}

impl From<PositionError> for ReformatError {
    fn from(error: PositionError) -> Self {
        ReformatError::Position(error)
    }
}
