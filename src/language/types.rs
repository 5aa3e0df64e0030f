//! Types describing where generated source lines came from

use serde::{Deserialize, Serialize};

/// One correspondence point between a line in the original source and the
/// physical line and column at which its content was emitted. All three
/// numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub original_line: usize,
    pub emitted_line: usize,
    #[serde(default = "first_column")]
    pub emitted_column: usize,
}

fn first_column() -> usize {
    1
}

impl Position {
    pub fn new(original_line: usize, emitted_line: usize, emitted_column: usize) -> Position {
        Position {
            original_line,
            emitted_line,
            emitted_column,
        }
    }

    /// The same record, now found at a different physical line.
    pub fn moved_to(&self, emitted_line: usize) -> Position {
        Position {
            emitted_line,
            ..*self
        }
    }
}

/// The largest original line number present, used to size the leading
/// comment so that every prefix has the same width.
pub fn max_line_number(positions: &[Position]) -> usize {
    positions
        .iter()
        .map(|position| position.original_line)
        .max()
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineNumberOption {
    /// Prefix every line with a `/*NN*/` comment showing its original line.
    LeadingComments,
    /// Insert or remove blank lines so markers sit at their original line.
    Stretched,
}

/// The set of behaviours active for one invocation. The empty set makes the
/// whole transform an identity copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineNumberOptions {
    leading_comments: bool,
    stretched: bool,
}

impl LineNumberOptions {
    pub fn new() -> LineNumberOptions {
        LineNumberOptions::default()
    }

    pub fn with(self, option: LineNumberOption) -> LineNumberOptions {
        match option {
            LineNumberOption::LeadingComments => LineNumberOptions {
                leading_comments: true,
                ..self
            },
            LineNumberOption::Stretched => LineNumberOptions {
                stretched: true,
                ..self
            },
        }
    }

    pub fn contains(&self, option: LineNumberOption) -> bool {
        match option {
            LineNumberOption::LeadingComments => self.leading_comments,
            LineNumberOption::Stretched => self.stretched,
        }
    }

    pub fn leading_comments(&self) -> bool {
        self.leading_comments
    }

    pub fn stretched(&self) -> bool {
        self.stretched
    }
}

impl FromIterator<LineNumberOption> for LineNumberOptions {
    fn from_iter<I: IntoIterator<Item = LineNumberOption>>(iter: I) -> Self {
        iter.into_iter()
            .fold(LineNumberOptions::new(), LineNumberOptions::with)
    }
}
