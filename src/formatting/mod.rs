//! Reformatting of generated source so line markers match original lines

use tracing::debug;

use crate::language::{max_line_number, LineNumberOption, LineNumberOptions, Position, PositionError};

mod printer;
mod renderer;
mod splitter;
mod stretcher;

// Re-export all public symbols
pub use printer::*;
pub use renderer::*;
pub use splitter::*;
pub use stretcher::*;

/// Run the whole pipeline over in-memory text: split co-located markers,
/// stretch and annotate, then render.
pub fn reformat_text(
    content: &str,
    positions: &[Position],
    options: LineNumberOptions,
) -> Result<String, PositionError> {
    let lines: Vec<&str> = content
        .lines()
        .collect();

    let split = split_lines(&lines, positions)?;
    debug!(
        "Split {} lines into {}",
        lines.len(),
        split
            .lines
            .len()
    );

    let stretched = stretch(&split.lines, &split.positions, options)?;
    let max = max_line_number(&split.positions);

    Ok(render_with_ending(
        &stretched.emits,
        max,
        options.leading_comments(),
        line_ending(content),
    ))
}

/// The terminator used by the first line of the content; files written
/// with `\r\n` keep it.
pub fn line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(end) if content[..end].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Summary of what reformatting would do to a file, without doing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Survey {
    pub lines: usize,
    pub markers: usize,
    /// physical lines added by splitting co-located markers
    pub splits: usize,
    /// markers not already sitting on their original line
    pub misaligned: usize,
    /// markers that stretching still cannot put on their original line
    pub unresolved: usize,
}

pub fn survey(content: &str, positions: &[Position]) -> Result<Survey, PositionError> {
    let lines: Vec<&str> = content
        .lines()
        .collect();

    let split = split_lines(&lines, positions)?;
    let options = LineNumberOptions::new().with(LineNumberOption::Stretched);
    let stretched = stretch(&split.lines, &split.positions, options)?;

    let misaligned = split
        .positions
        .iter()
        .filter(|position| position.original_line != position.emitted_line)
        .count();
    let unresolved = stretched
        .positions
        .iter()
        .filter(|position| position.original_line != position.emitted_line)
        .count();

    Ok(Survey {
        lines: lines.len(),
        markers: split
            .positions
            .len(),
        splits: split.lines.len() - lines.len(),
        misaligned,
        unresolved,
    })
}
